use serde::Serialize;

/// What a participant is allowed to do in the review workflow.
///
/// Resolved once per request from the participant's role name and passed
/// explicitly into every topic/lifecycle operation. An employee with no
/// participant row gets `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewRole {
    Reviewer,
    Secretary,
    Other,
}

impl ReviewRole {
    /// Case-insensitive match on the stored role name.
    pub fn from_name(name: &str) -> ReviewRole {
        match name.to_lowercase().as_str() {
            "reviewer" => ReviewRole::Reviewer,
            "secretary" => ReviewRole::Secretary,
            _ => ReviewRole::Other,
        }
    }
}

/// For the participant panel on the review detail page (joined with
/// employee and role).
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantDetail {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub profession: String,
    pub role_id: i64,
    pub role_name: String,
    pub role_description: String,
}
