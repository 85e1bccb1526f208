use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::like::{Like, PostLiker};

/// The like ledger. Implementations must guarantee at most one active
/// row per (user, post) pair under concurrent calls; the application
/// layer performs no locking of its own.
#[async_trait]
pub(crate) trait LikeRepository: Send + Sync {
    /// Toggle-to-active: reactivate an inactive row for the pair if one
    /// exists, otherwise insert a fresh active row. Returns the active row.
    async fn upsert_active(&self, user_id: i64, post_id: i64) -> Result<Like, DomainError>;

    /// Flip the active row for the pair to inactive. Succeeds as a no-op
    /// when no active row exists.
    async fn deactivate(&self, user_id: i64, post_id: i64) -> Result<(), DomainError>;

    /// All currently-active likers of a post, joined with user identity.
    /// No ordering guarantee.
    async fn active_likers(&self, post_id: i64) -> Result<Vec<PostLiker>, DomainError>;
}
