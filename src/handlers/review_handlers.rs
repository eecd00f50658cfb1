use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{load_review, today};
use crate::auth::session::{current_user, require_manager};
use crate::auth::validate::{validate_date, validate_optional, validate_required};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::participant::{self, ParticipantDetail, ReviewRole};
use crate::models::report::{self, Report};
use crate::models::review::{self, Review, lifecycle};
use crate::models::status::{ReviewStatus, StatusInfo, status_info};
use crate::models::topic::{self, Topic};
use crate::models::vote::{self, QUORUM, VoteDetail};

/// GET /api/v1/reviews — optional `project_id` and `status` filters.
/// `status` is a code 1..4 or the literal `waiting`.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;

    let items = if let Some(pid) = query.get("project_id").and_then(|s| s.parse::<i64>().ok()) {
        review::find_by_project(&conn, pid)?
    } else if let Some(status) = query.get("status") {
        let filter = if status == "waiting" {
            None
        } else {
            let code = status
                .parse::<i64>()
                .ok()
                .and_then(ReviewStatus::from_code)
                .ok_or_else(|| AppError::Validation("Unknown status filter".to_string()))?;
            Some(code.code())
        };
        review::find_by_status(&conn, filter)?
    } else {
        review::find_all(&conn)?
    };

    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/v1/reviews/recent — last N by creation time (default 10).
pub async fn recent(
    pool: web::Data<DbPool>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let limit = query
        .get("limit")
        .and_then(|l| l.parse::<i64>().ok())
        .unwrap_or(10)
        .clamp(1, 100);
    let items = review::find_recent(&conn, limit)?;
    Ok(HttpResponse::Ok().json(items))
}

#[derive(Deserialize)]
pub struct CreateReview {
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub part: String,
    pub review_date: String,
    /// Normally absent (waiting). A manager may set an initial code 1..4
    /// to bypass the termination flow.
    pub status: Option<i64>,
}

/// POST /api/v1/reviews — manager only.
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    if let Some(msg) = validate_required(&body.title, "Title", 200) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate_date(&body.review_date, "Review date") {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate_optional(&body.description, "Description", 2000) {
        return Err(AppError::Validation(msg));
    }
    if let Some(code) = body.status {
        if ReviewStatus::from_code(code).is_none() {
            return Err(AppError::Validation("Unknown status code".to_string()));
        }
    }

    let conn = pool.get()?;
    if crate::models::project::find_by_id(&conn, body.project_id)?.is_none() {
        return Err(AppError::Validation("Unknown project".to_string()));
    }

    let id = review::create(
        &conn,
        body.project_id,
        Some(user.id),
        body.title.trim(),
        body.description.trim(),
        body.part.trim(),
        body.review_date.trim(),
        body.status,
    )?;
    log::info!("review {} scheduled by manager {}", id, user.id);
    let created = load_review(&conn, id)?;
    Ok(HttpResponse::Created().json(created))
}

#[derive(Serialize)]
pub struct ReviewDetailResponse {
    pub review: Review,
    pub status: StatusInfo,
    pub project_name: String,
    pub participants: Vec<ParticipantDetail>,
    pub topics: Vec<Topic>,
    pub report: Option<Report>,
    pub votes: Vec<VoteDetail>,
    pub quorum: usize,
    /// The caller's resolved workflow role for this review.
    pub my_role: ReviewRole,
    /// The caller's own ballot code, if cast.
    pub my_vote: Option<i64>,
}

/// GET /api/v1/reviews/{id} — everything the detail page needs.
pub async fn detail(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;

    let project_name = crate::models::project::find_by_id(&conn, review.project_id)?
        .map(|p| p.name)
        .unwrap_or_default();
    let participants = participant::find_by_review(&conn, review.id)?;
    let my_role = participant::resolve_role(&conn, review.id, user.id)?;
    let topics = topic::find_by_review(&conn, review.id)?;
    let report = report::find_by_review(&conn, review.id)?;

    // Ballots only surface once the review has left the waiting state.
    let (votes, my_vote) = if review.status().is_some() {
        let votes = vote::find_by_review(&conn, review.id)?;
        let mine = vote::find_by_employee(&conn, review.id, user.id)?.map(|v| v.status);
        (votes, mine)
    } else {
        (Vec::new(), None)
    };

    Ok(HttpResponse::Ok().json(ReviewDetailResponse {
        status: status_info(review.status),
        project_name,
        participants,
        topics,
        report,
        votes,
        quorum: QUORUM,
        my_role,
        my_vote,
        review,
    }))
}

#[derive(Deserialize)]
pub struct UpdateReview {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub part: String,
    pub review_date: String,
}

/// PUT /api/v1/reviews/{id} — manager only; never touches status.
pub async fn update(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<UpdateReview>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    if let Some(msg) = validate_required(&body.title, "Title", 200) {
        return Err(AppError::Validation(msg));
    }
    if let Some(msg) = validate_date(&body.review_date, "Review date") {
        return Err(AppError::Validation(msg));
    }

    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    review::update_fields(
        &conn,
        review.id,
        body.title.trim(),
        body.description.trim(),
        body.part.trim(),
        body.review_date.trim(),
    )?;
    let updated = load_review(&conn, review.id)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/reviews/{id} — manager only; cascades transactionally.
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    require_manager(&user)?;

    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    review::delete_cascade(&conn, review.id)?;
    log::info!("review {} deleted by manager {}", review.id, user.id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

/// POST /api/v1/reviews/{id}/complete — secretary finalizes the meeting.
/// Fails until a completion report exists (see the report submit endpoint).
pub async fn complete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let role = participant::resolve_role(&conn, review.id, user.id)?;

    lifecycle::complete(&conn, &review, role, &today())?;

    let updated = load_review(&conn, review.id)?;
    Ok(HttpResponse::Ok().json(updated))
}
