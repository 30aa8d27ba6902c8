//! In-memory team repository implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct TeamStore {
    teams: BTreeMap<i64, Team>,
    next_id: i64,
}

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    store: Arc<RwLock<TeamStore>>,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: NewTeam) -> Result<Team, DomainError> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let team = Team::new(TeamId::new(store.next_id), team.name(), Utc::now());
        store.teams.insert(team.id().value(), team.clone());

        Ok(team)
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let store = self.store.read().await;
        Ok(store.teams.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let store = self.store.read().await;
        let mut teams: Vec<Team> = store.teams.values().cloned().collect();
        teams.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryTeamRepository::new();

        let a = repo.save(NewTeam::new("teamA").unwrap()).await.unwrap();
        let b = repo.save(NewTeam::new("teamB").unwrap()).await.unwrap();

        assert_eq!(a.id().value(), 1);
        assert_eq!(b.id().value(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryTeamRepository::new();
        let team = repo.save(NewTeam::new("teamA").unwrap()).await.unwrap();

        let found = repo.find_by_id(team.id()).await.unwrap();
        assert_eq!(found.unwrap().name(), "teamA");

        let missing = repo.find_by_id(TeamId::new(999)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let repo = InMemoryTeamRepository::new();
        repo.save(NewTeam::new("teamB").unwrap()).await.unwrap();
        repo.save(NewTeam::new("teamA").unwrap()).await.unwrap();

        let teams = repo.list().await.unwrap();
        let names: Vec<&str> = teams.iter().map(Team::name).collect();
        assert_eq!(names, vec!["teamA", "teamB"]);
    }
}
