use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One like row. Rows are never physically deleted: unliking flips
/// `active` to false, and a later re-like reactivates the same row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Like {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) active: bool,
    pub(crate) created_at: DateTime<Utc>,
}

/// An active liker of a post, joined with user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostLiker {
    pub(crate) username: String,
    pub(crate) user_id: i64,
    pub(crate) likes_id: i64,
}
