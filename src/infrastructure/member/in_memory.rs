//! In-memory member repository implementation
//!
//! Backs local runs and tests. The join is computed in code and rows are
//! filtered through [`matches_all`], so this backend and the Postgres one
//! share a single filter translation.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::member::{
    matches_all, Member, MemberId, MemberRepository, MemberSearchCondition, MemberTeamRow,
    NewMember,
};
use crate::domain::page::{Page, PageRequest, Sort, SortDirection, SortField};
use crate::domain::team::TeamRepository;
use crate::domain::DomainError;
use crate::infrastructure::team::InMemoryTeamRepository;

#[derive(Debug, Default)]
struct MemberStore {
    members: BTreeMap<i64, Member>,
    next_id: i64,
}

/// In-memory implementation of MemberRepository
#[derive(Debug)]
pub struct InMemoryMemberRepository {
    store: Arc<RwLock<MemberStore>>,
    teams: Arc<InMemoryTeamRepository>,
}

impl InMemoryMemberRepository {
    /// Create a new empty repository joining against the given team store
    pub fn new(teams: Arc<InMemoryTeamRepository>) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemberStore::default())),
            teams,
        }
    }

    async fn joined_rows(&self) -> Result<Vec<MemberTeamRow>, DomainError> {
        let team_names: HashMap<i64, String> = self
            .teams
            .list()
            .await?
            .into_iter()
            .map(|team| (team.id().value(), team.name().to_string()))
            .collect();

        let store = self.store.read().await;
        let rows = store
            .members
            .values()
            .map(|member| {
                let team_id = member.team_id().map(|id| id.value());
                MemberTeamRow {
                    member_id: member.id().value(),
                    username: member.username().to_string(),
                    age: member.age(),
                    team_id,
                    team_name: team_id.and_then(|id| team_names.get(&id).cloned()),
                }
            })
            .collect();

        Ok(rows)
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, member: NewMember) -> Result<Member, DomainError> {
        if let Some(team_id) = member.team_id() {
            if self.teams.find_by_id(team_id).await?.is_none() {
                return Err(DomainError::validation(format!(
                    "Team '{}' does not exist",
                    team_id
                )));
            }
        }

        let mut store = self.store.write().await;
        store.next_id += 1;

        let member = Member::new(
            MemberId::new(store.next_id),
            member.username(),
            member.age(),
            member.team_id(),
            Utc::now(),
        );
        store.members.insert(member.id().value(), member.clone());

        Ok(member)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError> {
        let store = self.store.read().await;
        Ok(store.members.get(&id.value()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .members
            .values()
            .filter(|member| member.username() == username)
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, DomainError> {
        let filters = condition.filters();

        let mut rows = self.joined_rows().await?;
        rows.retain(|row| matches_all(&filters, row));
        rows.sort_by(|a, b| compare_rows(a, b, Sort::default()));

        Ok(rows)
    }

    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError> {
        let filters = condition.filters();

        let mut rows = self.joined_rows().await?;
        rows.retain(|row| matches_all(&filters, row));

        let total = rows.len() as u64;

        rows.sort_by(|a, b| compare_rows(a, b, page.sort()));
        let content: Vec<MemberTeamRow> = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .collect();

        Ok(Page::new(content, total, page))
    }
}

fn compare_rows(a: &MemberTeamRow, b: &MemberTeamRow, sort: Sort) -> Ordering {
    let ordering = match sort.field {
        SortField::Id => a.member_id.cmp(&b.member_id),
        SortField::Username => a.username.cmp(&b.username),
        SortField::Age => a.age.cmp(&b.age),
        SortField::TeamName => compare_team_names(&a.team_name, &b.team_name),
    };

    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };

    // Member id ascending keeps page windows stable under any requested sort.
    ordering.then_with(|| a.member_id.cmp(&b.member_id))
}

// Missing teams order like SQL NULLs: last ascending, first descending.
fn compare_team_names(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}
