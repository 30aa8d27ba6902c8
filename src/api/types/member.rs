//! Member endpoint request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::member::{Member, MemberSearchCondition, MemberTeamRow};
use crate::domain::page::{PageRequest, Sort, SortDirection, SortField, DEFAULT_PAGE_SIZE};

use super::error::ApiError;

/// Flattened member/team search result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl From<MemberTeamRow> for MemberTeamDto {
    fn from(row: MemberTeamRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}

/// Single member response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            id: member.id().value(),
            username: member.username().to_string(),
            age: member.age(),
            team_id: member.team_id().map(|id| id.value()),
            created_at: member.created_at(),
        }
    }
}

/// Query parameters accepted by GET /v1/members
///
/// Filter fields are all optional; pagination defaults to the first page
/// of [`DEFAULT_PAGE_SIZE`] rows ordered by member id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchMembersParams {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl SearchMembersParams {
    /// The search condition half of the parameters
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    /// The pagination half, rejecting unknown sort fields and directions
    pub fn page_request(&self) -> Result<PageRequest, ApiError> {
        let field = match self.sort_by.as_deref() {
            None | Some("id") => SortField::Id,
            Some("username") => SortField::Username,
            Some("age") => SortField::Age,
            Some("team_name") => SortField::TeamName,
            Some(other) => {
                return Err(
                    ApiError::bad_request(format!("Invalid sort field: {}", other))
                        .with_param("sort_by"),
                )
            }
        };

        let direction = match self.sort_dir.as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(
                    ApiError::bad_request(format!("Invalid sort direction: {}", other))
                        .with_param("sort_dir"),
                )
            }
        };

        Ok(
            PageRequest::new(self.page.unwrap_or(0), self.size.unwrap_or(DEFAULT_PAGE_SIZE))
                .with_sort(Sort { field, direction }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_team_dto_field_names() {
        let dto = MemberTeamDto::from(MemberTeamRow {
            member_id: 3,
            username: "member3".to_string(),
            age: 30,
            team_id: Some(2),
            team_name: Some("teamB".to_string()),
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["memberId"], 3);
        assert_eq!(json["username"], "member3");
        assert_eq!(json["age"], 30);
        assert_eq!(json["teamId"], 2);
        assert_eq!(json["teamName"], "teamB");
    }

    #[test]
    fn test_default_page_request() {
        let params = SearchMembersParams::default();
        let request = params.page_request().unwrap();

        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort().field, SortField::Id);
        assert_eq!(request.sort().direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_parsing() {
        let params = SearchMembersParams {
            sort_by: Some("username".to_string()),
            sort_dir: Some("desc".to_string()),
            ..Default::default()
        };
        let request = params.page_request().unwrap();

        assert_eq!(request.sort().field, SortField::Username);
        assert_eq!(request.sort().direction, SortDirection::Desc);
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let params = SearchMembersParams {
            sort_by: Some("height".to_string()),
            ..Default::default()
        };

        let err = params.page_request().unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.param.as_deref(), Some("sort_by"));
    }

    #[test]
    fn test_condition_carries_filter_fields() {
        let params = SearchMembersParams {
            username: Some("member1".to_string()),
            age_goe: Some(10),
            ..Default::default()
        };
        let condition = params.condition();

        assert_eq!(condition.username.as_deref(), Some("member1"));
        assert_eq!(condition.age_goe, Some(10));
        assert_eq!(condition.team_name, None);
        assert_eq!(condition.age_loe, None);
    }
}
