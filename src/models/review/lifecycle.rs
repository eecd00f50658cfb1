use rusqlite::Connection;

use super::queries;
use super::types::Review;
use crate::errors::AppError;
use crate::models::participant::ReviewRole;
use crate::models::report;

/// Finalize a review: Waiting -> Terminated.
///
/// Only the secretary may finalize, only on the scheduled day, and only
/// after a completion report has been submitted. The status write is
/// guarded on `status IS NULL`, so a review that already left the waiting
/// state is never overwritten.
pub fn complete(
    conn: &Connection,
    review: &Review,
    role: ReviewRole,
    today: &str,
) -> Result<(), AppError> {
    if role != ReviewRole::Secretary {
        return Err(AppError::PermissionDenied(
            "Only the secretary may finalize the review".to_string(),
        ));
    }
    if !review.is_waiting() {
        return Err(AppError::PermissionDenied(
            "The review has already been finalized".to_string(),
        ));
    }
    if review.review_date != today {
        return Err(AppError::PermissionDenied(
            "A review can only be finalized on its scheduled day".to_string(),
        ));
    }
    if !report::exists(conn, review.id)? {
        return Err(AppError::PermissionDenied(
            "A completion report must be submitted before finalizing".to_string(),
        ));
    }

    let changed = queries::terminate_from_waiting(conn, review.id)?;
    if changed == 0 {
        // Lost a race with another finalize; the guard kept the row intact.
        return Err(AppError::PermissionDenied(
            "The review has already been finalized".to_string(),
        ));
    }
    log::info!("review {} terminated, voting is open", review.id);
    Ok(())
}
