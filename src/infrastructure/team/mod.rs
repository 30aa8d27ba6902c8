//! Team repository backends

mod in_memory;
mod postgres;

pub use in_memory::InMemoryTeamRepository;
pub use postgres::PostgresTeamRepository;
