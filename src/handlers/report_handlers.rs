use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::{load_review, today};
use crate::auth::session::current_user;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::participant::{self, ReviewRole};
use crate::models::report::{self, ReportInput};
use crate::models::review::lifecycle;

/// GET /api/v1/reviews/{id}/report
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let report = report::find_by_review(&conn, review.id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(report))
}

/// POST /api/v1/reviews/{id}/report — secretary submits the completion
/// report and the review is finalized in the same request (the two-step
/// protocol: report row first, then the Waiting -> Terminated write).
pub async fn submit(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    body: web::Json<ReportInput>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    let conn = pool.get()?;
    let review = load_review(&conn, path.into_inner())?;
    let role = participant::resolve_role(&conn, review.id, user.id)?;

    if role != ReviewRole::Secretary {
        return Err(AppError::PermissionDenied(
            "Only the secretary may submit the completion report".to_string(),
        ));
    }

    report::submit(&conn, &review, &body)?;
    lifecycle::complete(&conn, &review, role, &today())?;

    let updated = load_review(&conn, review.id)?;
    let report = report::find_by_review(&conn, review.id)?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "review": updated,
        "report": report,
    })))
}
