//! Dynamic search condition and predicate fragments
//!
//! A search condition is a set of independently optional filters. Each
//! present filter contributes exactly one predicate fragment; backends
//! combine the fragments with AND. An empty fragment list is the identity
//! of that conjunction and matches every row. Both the content query and
//! the count query of a paged search must consume the same fragment list,
//! so the translation lives here, once.

use serde::{Deserialize, Serialize};

/// Flattened member/team join projection, one row per matching pair
///
/// Members without a team survive the left join with `None` in both team
/// columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Optional filters for the member/team search
///
/// Blank and whitespace-only strings count as absent, not as equality
/// tests against the empty string. There are no cross-field invariants;
/// `age_goe` and `age_loe` apply independently and both bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Translate the condition into its predicate fragments
    ///
    /// Absent and blank fields contribute nothing. Fragment order is fixed
    /// but has no bearing on which rows match.
    pub fn filters(&self) -> Vec<SearchFilter> {
        let mut filters = Vec::new();

        if let Some(username) = present(&self.username) {
            filters.push(SearchFilter::UsernameEq(username.to_string()));
        }

        if let Some(team_name) = present(&self.team_name) {
            filters.push(SearchFilter::TeamNameEq(team_name.to_string()));
        }

        if let Some(age) = self.age_goe {
            filters.push(SearchFilter::AgeGoe(age));
        }

        if let Some(age) = self.age_loe {
            filters.push(SearchFilter::AgeLoe(age));
        }

        filters
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A single boolean test contributed by one present filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl SearchFilter {
    /// Whether a projected row satisfies this fragment
    ///
    /// Reference semantics for every backend; the SQL rendering in the
    /// Postgres repository must agree with this.
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        match self {
            Self::UsernameEq(username) => row.username == *username,
            Self::TeamNameEq(team_name) => row.team_name.as_deref() == Some(team_name.as_str()),
            Self::AgeGoe(bound) => row.age >= *bound,
            Self::AgeLoe(bound) => row.age <= *bound,
        }
    }
}

/// Whether a row satisfies every fragment; an empty list matches all rows
pub fn matches_all(filters: &[SearchFilter], row: &MemberTeamRow) -> bool {
    filters.iter().all(|filter| filter.matches(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str, age: i32, team_name: Option<&str>) -> MemberTeamRow {
        MemberTeamRow {
            member_id: 1,
            username: username.to_string(),
            age,
            team_id: team_name.map(|_| 1),
            team_name: team_name.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_empty_condition_has_no_filters() {
        assert!(MemberSearchCondition::new().filters().is_empty());
    }

    #[test]
    fn test_blank_strings_behave_as_absent() {
        let condition = MemberSearchCondition::new()
            .with_username("")
            .with_team_name("   ");

        assert!(condition.filters().is_empty());
    }

    #[test]
    fn test_each_present_field_contributes_one_fragment() {
        let condition = MemberSearchCondition::new()
            .with_username("member1")
            .with_team_name("teamA")
            .with_age_goe(10)
            .with_age_loe(30);

        assert_eq!(
            condition.filters(),
            vec![
                SearchFilter::UsernameEq("member1".to_string()),
                SearchFilter::TeamNameEq("teamA".to_string()),
                SearchFilter::AgeGoe(10),
                SearchFilter::AgeLoe(30),
            ]
        );
    }

    #[test]
    fn test_empty_filter_list_matches_every_row() {
        assert!(matches_all(&[], &row("anyone", 99, None)));
    }

    #[test]
    fn test_username_fragment_is_exact_equality() {
        let filter = SearchFilter::UsernameEq("member1".to_string());

        assert!(filter.matches(&row("member1", 10, None)));
        assert!(!filter.matches(&row("member10", 10, None)));
        assert!(!filter.matches(&row("Member1", 10, None)));
    }

    #[test]
    fn test_team_name_fragment_excludes_teamless_members() {
        let filter = SearchFilter::TeamNameEq("teamA".to_string());

        assert!(filter.matches(&row("m", 10, Some("teamA"))));
        assert!(!filter.matches(&row("m", 10, Some("teamB"))));
        assert!(!filter.matches(&row("m", 10, None)));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let goe = SearchFilter::AgeGoe(20);
        let loe = SearchFilter::AgeLoe(20);

        assert!(goe.matches(&row("m", 20, None)));
        assert!(!goe.matches(&row("m", 19, None)));
        assert!(loe.matches(&row("m", 20, None)));
        assert!(!loe.matches(&row("m", 21, None)));
    }

    #[test]
    fn test_fragments_combine_with_and() {
        let filters = MemberSearchCondition::new()
            .with_team_name("teamB")
            .with_age_goe(20)
            .filters();

        assert!(matches_all(&filters, &row("member3", 30, Some("teamB"))));
        assert!(!matches_all(&filters, &row("member2", 20, Some("teamA"))));
        assert!(!matches_all(&filters, &row("member1", 10, Some("teamB"))));
    }
}
