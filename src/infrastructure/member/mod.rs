//! Member repository backends

mod in_memory;
mod postgres;

pub use in_memory::InMemoryMemberRepository;
pub use postgres::PostgresMemberRepository;
