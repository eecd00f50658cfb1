use serde::{Deserialize, Serialize};

/// The mandatory completion summary, at most one per review.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub review_id: i64,
    pub part: String,
    pub employee_id: i64,
    pub employee_name: String,
    pub conclusions: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportInput {
    pub part: String,
    pub employee_id: i64,
    pub conclusions: String,
}
