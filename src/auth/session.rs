use actix_session::Session;
use serde::Serialize;

use crate::errors::AppError;

/// The authenticated employee, read once per request from the cookie session
/// and passed explicitly into every workflow operation.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub is_manager: bool,
}

pub fn set_current_user(session: &Session, user: &CurrentUser) -> Result<(), AppError> {
    session
        .insert("employee_id", user.id)
        .and_then(|_| session.insert("employee_name", user.name.clone()))
        .and_then(|_| session.insert("is_manager", user.is_manager))
        .map_err(|e| AppError::Session(e.to_string()))
}

pub fn get_employee_id(session: &Session) -> Option<i64> {
    session.get::<i64>("employee_id").unwrap_or(None)
}

/// Returns the logged-in employee or a session error when not authenticated.
pub fn current_user(session: &Session) -> Result<CurrentUser, AppError> {
    let id = get_employee_id(session)
        .ok_or_else(|| AppError::Session("No employee in session".to_string()))?;
    let name = session
        .get::<String>("employee_name")
        .unwrap_or(None)
        .unwrap_or_default();
    let is_manager = session.get::<bool>("is_manager").unwrap_or(None).unwrap_or(false);
    Ok(CurrentUser { id, name, is_manager })
}

/// Manager gate for scheduling, editing, and deleting entities.
pub fn require_manager(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_manager {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(
            "Only managers may perform this action".to_string(),
        ))
    }
}
