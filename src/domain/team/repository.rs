//! Team repository trait

use async_trait::async_trait;

use super::entity::{NewTeam, Team, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new team and return it with its assigned id
    async fn save(&self, team: NewTeam) -> Result<Team, DomainError>;

    /// Get a team by id
    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// All teams, ordered by name
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
}
