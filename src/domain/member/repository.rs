//! Member repository trait

use async_trait::async_trait;

use super::entity::{Member, MemberId, NewMember};
use super::search::{MemberSearchCondition, MemberTeamRow};
use crate::domain::page::{Page, PageRequest};
use crate::domain::DomainError;

/// Repository for members and the member/team search
///
/// `search_page` returns the page window and the total match count in one
/// result. Implementations must derive both from the same
/// [`MemberSearchCondition::filters`] output so content and count can
/// never disagree on which rows match.
#[async_trait]
pub trait MemberRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new member and return it with its assigned id
    async fn save(&self, member: NewMember) -> Result<Member, DomainError>;

    /// Get a member by id
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError>;

    /// All members with the given username
    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError>;

    /// Unpaged filtered search over the member/team join
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, DomainError>;

    /// Paged filtered search plus the total match count
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError>;
}
