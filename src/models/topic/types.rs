use serde::Serialize;

/// A discussion item proposed for a review.
/// `is_pending = true` means open/unresolved, `false` means checked off.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub id: i64,
    pub review_id: i64,
    pub content: String,
    pub is_pending: bool,
    pub created_at: String,
}
