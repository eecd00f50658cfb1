use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;
use crate::errors::{AppError, duplicate_on_constraint};
use crate::models::review::Review;

pub fn exists(conn: &Connection, review_id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM reports WHERE review_id = ?1)",
        params![review_id],
        |row| row.get(0),
    )
}

pub fn find_by_review(conn: &Connection, review_id: i64) -> rusqlite::Result<Option<Report>> {
    conn.query_row(
        "SELECT rp.review_id, rp.part, rp.employee_id, e.name AS employee_name, \
                rp.conclusions, rp.created_at \
         FROM reports rp \
         JOIN employees e ON e.id = rp.employee_id \
         WHERE rp.review_id = ?1",
        params![review_id],
        |row| {
            Ok(Report {
                review_id: row.get("review_id")?,
                part: row.get("part")?,
                employee_id: row.get("employee_id")?,
                employee_name: row.get("employee_name")?,
                conclusions: row.get("conclusions")?,
                created_at: row.get("created_at")?,
            })
        },
    )
    .optional()
}

/// Submit the completion report for a review.
///
/// All three fields must be filled and the review must still be waiting.
/// The primary key on `review_id` rejects a second submission with
/// `Duplicate` instead of silently inserting a twin row.
pub fn submit(conn: &Connection, review: &Review, input: &ReportInput) -> Result<(), AppError> {
    if input.part.trim().is_empty() {
        return Err(AppError::Validation("Report part is required".to_string()));
    }
    if input.conclusions.trim().is_empty() {
        return Err(AppError::Validation(
            "Report conclusions are required".to_string(),
        ));
    }
    if input.employee_id <= 0 {
        return Err(AppError::Validation(
            "Report reviewer is required".to_string(),
        ));
    }
    if !review.is_waiting() {
        return Err(AppError::PermissionDenied(
            "Reports can only be submitted while the review is waiting".to_string(),
        ));
    }

    conn.execute(
        "INSERT INTO reports (review_id, part, employee_id, conclusions) VALUES (?1, ?2, ?3, ?4)",
        params![review.id, input.part.trim(), input.employee_id, input.conclusions.trim()],
    )
    .map_err(|e| duplicate_on_constraint(e, "report"))?;
    Ok(())
}
