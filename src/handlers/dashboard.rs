use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::review;

/// GET /api/v1/dashboard — recent reviews plus per-status totals.
pub async fn index(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let recent = review::find_recent(&conn, 10)?;
    let counts = review::count_by_status(&conn)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "recent": recent,
        "counts": counts,
    })))
}
