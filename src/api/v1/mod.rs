//! v1 API endpoints

pub mod members;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::search_members))
        .route("/members/{member_id}", get(members::get_member))
}
