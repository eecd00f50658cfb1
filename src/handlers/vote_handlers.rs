use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::load_review;
use crate::auth::session::current_user;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::vote::{self, QUORUM, quorum};

/// GET /api/v1/reviews/{id}/votes — ballots plus the running N/3 counter.
pub async fn list(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;

    let votes = vote::find_by_review(&conn, review.id)?;
    let vote_count = votes.len();
    let my_vote = vote::find_by_employee(&conn, review.id, user.id)?.map(|v| v.status);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "votes": votes,
        "vote_count": vote_count,
        "quorum": QUORUM,
        "my_vote": my_vote,
    })))
}

#[derive(Deserialize)]
pub struct CastRequest {
    pub status: i64,
    /// The binding-vote disclaimer must be explicitly acknowledged.
    #[serde(default)]
    pub accepted_terms: bool,
}

/// POST /api/v1/reviews/{id}/votes — one ballot per employee; at the third
/// ballot the review's final status is resolved in the same transaction.
pub async fn cast(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<CastRequest>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;

    let outcome = quorum::cast(&conn, &review, user.id, body.status, body.accepted_terms)?;
    Ok(HttpResponse::Created().json(outcome))
}
