//! Member entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_age, validate_username, MemberValidationError};
use crate::domain::team::TeamId;

/// Member identifier backed by the bigserial primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted member
///
/// Members optionally belong to a team; the relation is nullable in the
/// schema, so search projections must tolerate members without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    username: String,
    age: i32,
    team_id: Option<TeamId>,
    created_at: DateTime<Utc>,
}

impl Member {
    /// Materialize a member from stored values
    pub fn new(
        id: MemberId,
        username: impl Into<String>,
        age: i32,
        team_id: Option<TeamId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            age,
            team_id,
            created_at,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A member waiting to be persisted - the store assigns its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    username: String,
    age: i32,
    team_id: Option<TeamId>,
}

impl NewMember {
    /// Create a new member after validation
    pub fn new(
        username: impl Into<String>,
        age: i32,
        team_id: Option<TeamId>,
    ) -> Result<Self, MemberValidationError> {
        let username = username.into();
        validate_username(&username)?;
        validate_age(age)?;

        Ok(Self {
            username,
            age,
            team_id,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }
}
