use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::{current_user, require_manager};
use crate::auth::validate::{validate_email, validate_required};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::client;

/// GET /api/v1/clients
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let clients = client::find_all(&conn)?;
    Ok(HttpResponse::Ok().json(clients))
}

#[derive(Deserialize)]
pub struct CreateClient {
    pub name: String,
    #[serde(default)]
    pub contact_email: String,
}

/// POST /api/v1/clients — manager only.
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<CreateClient>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    if let Some(msg) = validate_required(&body.name, "Client name", 200) {
        return Err(AppError::Validation(msg));
    }
    if !body.contact_email.trim().is_empty() {
        if let Some(msg) = validate_email(&body.contact_email) {
            return Err(AppError::Validation(msg));
        }
    }

    let conn = pool.get()?;
    let id = client::create(&conn, body.name.trim(), body.contact_email.trim())?;
    let created = client::find_by_id(&conn, id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/v1/clients/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let found = client::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(found))
}

/// DELETE /api/v1/clients/{id} — manager only; removes the client's
/// projects, their reviews, and every review's children in one transaction.
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    let conn = pool.get()?;
    let found = client::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    client::delete_cascade(&conn, found.id)?;
    log::info!("client {} deleted by manager {}", found.id, user.id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}
