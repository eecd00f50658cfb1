use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::{load_review, today};
use crate::auth::session::current_user;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::participant::{self, ReviewRole};
use crate::models::topic::{self, drafts, moderation};

/// GET /api/v1/reviews/{id}/topics
pub async fn list(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let topics = topic::find_by_review(&conn, review.id)?;
    Ok(HttpResponse::Ok().json(topics))
}

/// GET /api/v1/reviews/{id}/topics/drafts — the caller's unsaved list.
pub async fn draft_list(
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let list = drafts::load(&session, path.into_inner());
    Ok(HttpResponse::Ok().json(list))
}

#[derive(Deserialize)]
pub struct DraftRequest {
    pub content: String,
}

/// POST /api/v1/reviews/{id}/topics/drafts — append to the unsaved list.
/// Reviewer only, and only while the review is still waiting; nothing is
/// persisted until commit.
pub async fn draft_add(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<DraftRequest>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let role = participant::resolve_role(&conn, review.id, user.id)?;

    if role != ReviewRole::Reviewer {
        return Err(AppError::PermissionDenied(
            "Only the reviewer may suggest topics".to_string(),
        ));
    }
    if !review.is_waiting() {
        return Err(AppError::PermissionDenied(
            "Topics can no longer be suggested once the review has been finalized".to_string(),
        ));
    }
    if body.content.trim().is_empty() {
        return Err(AppError::Validation("Topic content is required".to_string()));
    }

    let mut list = drafts::load(&session, review.id);
    list.add(&body.content);
    drafts::store(&session, review.id, &list)?;
    Ok(HttpResponse::Ok().json(list))
}

/// DELETE /api/v1/reviews/{id}/topics/drafts/{index}
pub async fn draft_remove(
    session: Session,
    path: web::Path<(i64, usize)>,
) -> Result<HttpResponse, AppError> {
    let (review_id, index) = path.into_inner();
    let mut list = drafts::load(&session, review_id);
    list.remove(index);
    drafts::store(&session, review_id, &list)?;
    Ok(HttpResponse::Ok().json(list))
}

/// POST /api/v1/reviews/{id}/topics/commit — persist the drafted topics in
/// one batch. The draft list is cleared only when the insert succeeds, so a
/// failed commit leaves the drafts intact for retry.
pub async fn commit(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let role = participant::resolve_role(&conn, review.id, user.id)?;

    let list = drafts::load(&session, review.id);
    let created = moderation::commit(&conn, &review, role, &today(), &list.items)?;
    drafts::clear(&session, review.id);
    log::info!("{} topics committed for review {}", created.len(), review.id);
    Ok(HttpResponse::Created().json(created))
}

/// POST /api/v1/reviews/{id}/topics/{topic_id}/toggle — secretary flips a
/// topic between pending and resolved.
pub async fn toggle(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (review_id, topic_id) = path.into_inner();
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, review_id)?;
    let role = participant::resolve_role(&conn, review.id, user.id)?;

    let is_pending = moderation::toggle(&conn, &review, role, topic_id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": topic_id, "is_pending": is_pending })))
}

/// DELETE /api/v1/reviews/{id}/topics/{topic_id} — reviewer hard-deletes.
pub async fn remove(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (review_id, topic_id) = path.into_inner();
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, review_id)?;
    let role = participant::resolve_role(&conn, review.id, user.id)?;

    moderation::remove(&conn, &review, role, topic_id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}
