use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
    pub created_at: String,
}

/// For the client list (with project count).
#[derive(Debug, Clone, Serialize)]
pub struct ClientListItem {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
    pub project_count: i64,
}
