use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use super::load_review;
use crate::auth::session::{current_user, require_manager};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::{employee, participant};

/// GET /api/v1/roles — the assignable participant roles.
pub async fn roles(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let roles: Vec<_> = participant::find_roles(&conn)?
        .into_iter()
        .map(|(id, name, description)| json!({ "id": id, "name": name, "description": description }))
        .collect();
    Ok(HttpResponse::Ok().json(roles))
}

/// GET /api/v1/reviews/{id}/participants
pub async fn list(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let participants = participant::find_by_review(&conn, review.id)?;
    Ok(HttpResponse::Ok().json(participants))
}

#[derive(Deserialize)]
pub struct AssignRequest {
    pub employee_id: i64,
    pub role_id: i64,
}

/// POST /api/v1/reviews/{id}/participants — manager assigns an employee
/// under a role. Duplicate rows are allowed; the first wins at role
/// resolution.
pub async fn assign(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<AssignRequest>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    if employee::find_by_id(&conn, body.employee_id)?.is_none() {
        return Err(AppError::Validation("Unknown employee".to_string()));
    }
    if !participant::role_exists(&conn, body.role_id)? {
        return Err(AppError::Validation("Unknown role".to_string()));
    }

    let id = participant::assign(&conn, review.id, body.employee_id, body.role_id)?;
    let participants = participant::find_by_review(&conn, review.id)?;
    let created = participants.into_iter().find(|p| p.id == id).ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(created))
}

/// DELETE /api/v1/reviews/{id}/participants/{participant_id} — manager only.
pub async fn remove(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (review_id, participant_id) = path.into_inner();
    let user = current_user(&session)?;
    require_manager(&user)?;

    let conn = pool.get()?;
    let review = load_review(&conn, review_id)?;
    // A participant id from another review is not visible through this path.
    match participant::find_review_id(&conn, participant_id)? {
        Some(owner) if owner == review.id => {}
        _ => return Err(AppError::NotFound),
    }
    participant::remove(&conn, participant_id)?;
    log::info!("participant {} removed from review {}", participant_id, review.id);
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}
