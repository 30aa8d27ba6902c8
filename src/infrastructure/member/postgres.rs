//! PostgreSQL member repository implementation
//!
//! The paged search builds its content query and count query from the same
//! [`push_filters`] call, so the two can never disagree on which rows
//! match.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::member::{
    Member, MemberId, MemberRepository, MemberSearchCondition, MemberTeamRow, NewMember,
    SearchFilter,
};
use crate::domain::page::{Page, PageRequest, Sort, SortDirection, SortField};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

const SEARCH_SELECT: &str = "SELECT m.id, m.username, m.age, m.team_id, t.name AS team_name \
     FROM members m LEFT JOIN teams t ON t.id = m.team_id";

const SEARCH_COUNT: &str =
    "SELECT COUNT(*) FROM members m LEFT JOIN teams t ON t.id = m.team_id";

/// PostgreSQL implementation of MemberRepository
#[derive(Debug, Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: NewMember) -> Result<Member, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO members (username, age, team_id)
            VALUES ($1, $2, $3)
            RETURNING id, username, age, team_id, created_at
            "#,
        )
        .bind(member.username())
        .bind(member.age())
        .bind(member.team_id().map(|id| id.value()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("foreign key") {
                DomainError::validation(format!(
                    "Team '{}' does not exist",
                    member
                        .team_id()
                        .map(|id| id.to_string())
                        .unwrap_or_default()
                ))
            } else {
                DomainError::storage(format!("Failed to save member: {}", e))
            }
        })?;

        row_to_member(&row)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, age, team_id, created_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get member: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, age, team_id, created_at
            FROM members
            WHERE username = $1
            ORDER BY id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to get members by username: {}", e))
        })?;

        rows.iter().map(row_to_member).collect()
    }

    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, DomainError> {
        let filters = condition.filters();

        let mut query = QueryBuilder::new(SEARCH_SELECT);
        push_filters(&mut query, &filters);
        push_order_by(&mut query, Sort::default());

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search members: {}", e)))?;

        rows.iter().map(row_to_member_team).collect()
    }

    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError> {
        let filters = condition.filters();

        let mut content_query = QueryBuilder::new(SEARCH_SELECT);
        push_filters(&mut content_query, &filters);
        push_order_by(&mut content_query, page.sort());
        content_query
            .push(" LIMIT ")
            .push_bind(i64::from(page.size()))
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let rows = content_query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search members: {}", e)))?;

        let content = rows
            .iter()
            .map(row_to_member_team)
            .collect::<Result<Vec<_>, _>>()?;

        let mut count_query = QueryBuilder::new(SEARCH_COUNT);
        push_filters(&mut count_query, &filters);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count members: {}", e)))?;

        Ok(Page::new(content, total as u64, page))
    }
}

/// Append the fragments as a parameterized WHERE clause
///
/// Shared by the content, count and unpaged search queries. Must agree
/// with [`SearchFilter::matches`].
fn push_filters<'a>(query: &mut QueryBuilder<'a, Postgres>, filters: &'a [SearchFilter]) {
    let mut separator = " WHERE ";

    for filter in filters {
        query.push(separator);
        separator = " AND ";

        match filter {
            SearchFilter::UsernameEq(username) => {
                query.push("m.username = ").push_bind(username.as_str());
            }
            SearchFilter::TeamNameEq(team_name) => {
                query.push("t.name = ").push_bind(team_name.as_str());
            }
            SearchFilter::AgeGoe(age) => {
                query.push("m.age >= ").push_bind(*age);
            }
            SearchFilter::AgeLoe(age) => {
                query.push("m.age <= ").push_bind(*age);
            }
        }
    }
}

fn push_order_by(query: &mut QueryBuilder<'_, Postgres>, sort: Sort) {
    let column = match sort.field {
        SortField::Id => "m.id",
        SortField::Username => "m.username",
        SortField::Age => "m.age",
        SortField::TeamName => "t.name",
    };
    let direction = match sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };

    query.push(" ORDER BY ");
    query.push(column);
    query.push(" ");
    query.push(direction);

    // Member id ascending keeps page windows stable under any requested sort.
    if sort.field != SortField::Id {
        query.push(", m.id ASC");
    }
}

fn row_to_member(row: &PgRow) -> Result<Member, DomainError> {
    let team_id: Option<i64> = row
        .try_get("team_id")
        .map_err(|e| decode_error("team_id", &e))?;

    Ok(Member::new(
        MemberId::new(row.try_get("id").map_err(|e| decode_error("id", &e))?),
        row.try_get::<String, _>("username")
            .map_err(|e| decode_error("username", &e))?,
        row.try_get("age").map_err(|e| decode_error("age", &e))?,
        team_id.map(TeamId::new),
        row.try_get("created_at")
            .map_err(|e| decode_error("created_at", &e))?,
    ))
}

fn row_to_member_team(row: &PgRow) -> Result<MemberTeamRow, DomainError> {
    Ok(MemberTeamRow {
        member_id: row.try_get("id").map_err(|e| decode_error("id", &e))?,
        username: row
            .try_get("username")
            .map_err(|e| decode_error("username", &e))?,
        age: row.try_get("age").map_err(|e| decode_error("age", &e))?,
        team_id: row
            .try_get("team_id")
            .map_err(|e| decode_error("team_id", &e))?,
        team_name: row
            .try_get("team_name")
            .map_err(|e| decode_error("team_name", &e))?,
    })
}

fn decode_error(column: &str, error: &sqlx::Error) -> DomainError {
    DomainError::storage(format!("Failed to decode column '{}': {}", column, error))
}
