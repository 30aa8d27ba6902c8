//! Infrastructure layer - repository backends and runtime wiring

pub mod logging;
pub mod member;
pub mod team;

pub use member::{InMemoryMemberRepository, PostgresMemberRepository};
pub use team::{InMemoryTeamRepository, PostgresTeamRepository};
