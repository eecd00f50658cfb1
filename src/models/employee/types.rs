use serde::Serialize;

/// An employee is both a directory entry and the login principal.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub profession: String,
    pub is_manager: bool,
    pub created_at: String,
}

/// Employee without credentials, for list and detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDisplay {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub profession: String,
    pub is_manager: bool,
}

impl From<&Employee> for EmployeeDisplay {
    fn from(e: &Employee) -> Self {
        EmployeeDisplay {
            id: e.id,
            name: e.name.clone(),
            email: e.email.clone(),
            profession: e.profession.clone(),
            is_manager: e.is_manager,
        }
    }
}
