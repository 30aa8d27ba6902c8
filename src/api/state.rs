//! Application state for shared repositories

use std::sync::Arc;

use crate::domain::member::MemberRepository;
use crate::domain::team::TeamRepository;

/// Application state containing the repository backends behind dynamic
/// dispatch, so handlers are agnostic of the configured storage
#[derive(Debug, Clone)]
pub struct AppState {
    pub member_repository: Arc<dyn MemberRepository>,
    pub team_repository: Arc<dyn TeamRepository>,
}

impl AppState {
    pub fn new(
        member_repository: Arc<dyn MemberRepository>,
        team_repository: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            member_repository,
            team_repository,
        }
    }
}
