use serde::Serialize;

use crate::models::status::ReviewStatus;

/// One ballot: an employee's verdict code (1..3) on a terminated review.
#[derive(Debug, Clone, Serialize)]
pub struct Vote {
    pub id: i64,
    pub review_id: i64,
    pub employee_id: i64,
    pub status: i64,
    pub created_at: String,
}

/// For the vote list on the review detail page.
#[derive(Debug, Clone, Serialize)]
pub struct VoteDetail {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub status: i64,
}

/// What happened after a ballot was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct VoteOutcome {
    /// The running N-of-quorum count after this ballot.
    pub vote_count: usize,
    /// The final status, set only when this ballot reached quorum.
    pub resolved: Option<i64>,
}

impl VoteOutcome {
    pub fn resolved_status(&self) -> Option<ReviewStatus> {
        self.resolved.and_then(ReviewStatus::from_code)
    }
}
