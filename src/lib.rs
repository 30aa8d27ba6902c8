//! Member Search API
//!
//! Paginated, dynamically filtered search over a member/team schema.
//! Optional filters translate into predicate fragments exactly once, and
//! both halves of a paged search (content and count) consume the same
//! fragments, whichever storage backend is configured.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use domain::member::NewMember;
use domain::team::NewTeam;
use domain::DomainError;
use infrastructure::{
    InMemoryMemberRepository, InMemoryTeamRepository, PostgresMemberRepository,
    PostgresTeamRepository,
};

/// Create the application state for the configured storage backend
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage, seeding demo data");
            let state = create_in_memory_state();
            seed_demo_data(&state).await?;
            Ok(state)
        }
        StorageBackend::Postgres => create_postgres_state().await,
    }
}

/// Create empty in-memory application state
pub fn create_in_memory_state() -> AppState {
    let teams = Arc::new(InMemoryTeamRepository::new());
    let members = Arc::new(InMemoryMemberRepository::new(teams.clone()));

    AppState::new(members, teams)
}

/// Create Postgres-backed application state
///
/// Requires `DATABASE_URL` in the environment and brings the schema up to
/// date with the bundled migrations.
pub async fn create_postgres_state() -> anyhow::Result<AppState> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

    info!("Connecting to PostgreSQL...");
    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(AppState::new(
        Arc::new(PostgresMemberRepository::new(pool.clone())),
        Arc::new(PostgresTeamRepository::new(pool)),
    ))
}

/// Seed the demo dataset served by default in memory mode
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    let team_a = state.team_repository.save(NewTeam::new("teamA")?).await?;
    let team_b = state.team_repository.save(NewTeam::new("teamB")?).await?;

    for (username, age, team) in [
        ("member1", 10, team_a.id()),
        ("member2", 20, team_a.id()),
        ("member3", 30, team_b.id()),
        ("member4", 40, team_b.id()),
    ] {
        state
            .member_repository
            .save(NewMember::new(username, age, Some(team))?)
            .await?;
    }

    Ok(())
}
