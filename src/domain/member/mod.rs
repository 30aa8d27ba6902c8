//! Member domain module
//!
//! Members are the searchable unit. The search condition and its
//! predicate fragments live here so every backend and both halves of a
//! paged search (content and count) share one filter translation.

mod entity;
mod repository;
mod search;
mod validation;

pub use entity::{Member, MemberId, NewMember};
pub use repository::MemberRepository;
pub use search::{matches_all, MemberSearchCondition, MemberTeamRow, SearchFilter};
pub use validation::{validate_age, validate_username, MemberValidationError};
