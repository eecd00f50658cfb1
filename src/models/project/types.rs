use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}
