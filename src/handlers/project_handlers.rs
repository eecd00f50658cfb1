use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::collections::HashMap;

use crate::auth::session::{current_user, require_manager};
use crate::auth::validate::{validate_optional, validate_required};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::{client, project};

/// GET /api/v1/projects — optional `client_id` filter.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let projects = match query.get("client_id").and_then(|s| s.parse::<i64>().ok()) {
        Some(client_id) => project::find_by_client(&conn, client_id)?,
        None => project::find_all(&conn)?,
    };
    Ok(HttpResponse::Ok().json(projects))
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub client_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// POST /api/v1/projects — manager only.
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<CreateProject>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    if let Some(msg) = validate_required(&body.name, "Project name", 200) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate_optional(&body.description, "Description", 2000) {
        return Err(AppError::Validation(msg));
    }

    let conn = pool.get()?;
    if client::find_by_id(&conn, body.client_id)?.is_none() {
        return Err(AppError::Validation("Unknown client".to_string()));
    }

    let id = project::create(&conn, body.client_id, body.name.trim(), body.description.trim())?;
    let created = project::find_by_id(&conn, id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/v1/projects/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let found = project::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(found))
}

/// DELETE /api/v1/projects/{id} — manager only; removes the project's
/// reviews and every review's children in one transaction.
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    let conn = pool.get()?;
    let found = project::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    project::delete_cascade(&conn, found.id)?;
    log::info!("project {} deleted by manager {}", found.id, user.id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}
