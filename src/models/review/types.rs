use serde::Serialize;

use crate::models::status::ReviewStatus;

/// Full review row. `status` is the raw column value; NULL means the
/// review is still waiting to be held.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: i64,
    pub project_id: i64,
    pub manager_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub part: String,
    pub review_date: String,
    pub status: Option<i64>,
    pub created_at: String,
}

impl Review {
    pub fn status(&self) -> Option<ReviewStatus> {
        self.status.and_then(ReviewStatus::from_code)
    }

    /// True while the review has no status and the workflow is still open.
    pub fn is_waiting(&self) -> bool {
        self.status.is_none()
    }
}

/// For the review list pages (joined with project).
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListItem {
    pub id: i64,
    pub title: String,
    pub part: String,
    pub review_date: String,
    pub status: Option<i64>,
    pub project_id: i64,
    pub project_name: String,
}

/// Per-status totals for the dashboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusCounts {
    pub waiting: i64,
    pub accepted: i64,
    pub rejected: i64,
    pub pending: i64,
    pub terminated: i64,
}
