use serde::Serialize;

/// Final/terminal codes a review's `status` column may hold.
/// A NULL column means the review is still waiting to be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReviewStatus {
    Accepted = 1,
    Rejected = 2,
    Pending = 3,
    Terminated = 4,
}

impl ReviewStatus {
    pub fn from_code(code: i64) -> Option<ReviewStatus> {
        match code {
            1 => Some(ReviewStatus::Accepted),
            2 => Some(ReviewStatus::Rejected),
            3 => Some(ReviewStatus::Pending),
            4 => Some(ReviewStatus::Terminated),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Accepted => "Accepted",
            ReviewStatus::Rejected => "Rejected",
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Terminated => "Terminated",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ReviewStatus::Accepted => "green",
            ReviewStatus::Rejected => "red",
            ReviewStatus::Pending => "amber",
            ReviewStatus::Terminated => "purple",
        }
    }

    /// Only {Accepted, Rejected, Pending} are valid ballot options.
    pub fn is_vote_option(self) -> bool {
        self != ReviewStatus::Terminated
    }
}

/// Display metadata for one status, for list and detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct StatusInfo {
    pub code: Option<i64>,
    pub label: &'static str,
    pub color: &'static str,
}

/// Resolve display metadata for a raw status column value.
/// NULL and unknown codes render as the waiting placeholder.
pub fn status_info(code: Option<i64>) -> StatusInfo {
    match code.and_then(ReviewStatus::from_code) {
        Some(s) => StatusInfo {
            code: Some(s.code()),
            label: s.label(),
            color: s.color(),
        },
        None => StatusInfo {
            code: None,
            label: "Waiting",
            color: "gray",
        },
    }
}
