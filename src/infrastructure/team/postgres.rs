//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: NewTeam) -> Result<Team, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO teams (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(team.name())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to save team: {}", e)))?;

        row_to_team(&row)
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_team(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM teams
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        rows.iter().map(row_to_team).collect()
    }
}

fn row_to_team(row: &PgRow) -> Result<Team, DomainError> {
    Ok(Team::new(
        TeamId::new(
            row.try_get("id")
                .map_err(|e| DomainError::storage(format!("Failed to decode team id: {}", e)))?,
        ),
        row.try_get::<String, _>("name")
            .map_err(|e| DomainError::storage(format!("Failed to decode team name: {}", e)))?,
        row.try_get("created_at").map_err(|e| {
            DomainError::storage(format!("Failed to decode team created_at: {}", e))
        })?,
    ))
}
