use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::auth::session::{current_user, require_manager};
use crate::auth::validate::{validate_email, validate_password, validate_required};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::employee::{self, EmployeeDisplay};

/// GET /api/v1/employees
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let employees = employee::find_all(&conn)?;
    Ok(HttpResponse::Ok().json(employees))
}

#[derive(Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub is_manager: bool,
}

/// POST /api/v1/employees — manager only. Duplicate email surfaces as 409.
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<CreateEmployee>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    if let Some(msg) = validate_required(&body.name, "Name", 100) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate_email(&body.email) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate_password(&body.password) {
        return Err(AppError::Validation(msg));
    }

    let hash = hash_password(&body.password).map_err(AppError::Hash)?;
    let conn = pool.get()?;
    let id = employee::create(
        &conn,
        body.name.trim(),
        body.email.trim(),
        &hash,
        body.profession.trim(),
        body.is_manager,
    )?;
    let created = employee::find_by_id(&conn, id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(EmployeeDisplay::from(&created)))
}

/// GET /api/v1/employees/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let found = employee::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(EmployeeDisplay::from(&found)))
}
