use rusqlite::Connection;

use super::queries;
use super::types::Topic;
use crate::errors::AppError;
use crate::models::participant::ReviewRole;
use crate::models::review::Review;

/// Topics are frozen once the review leaves the waiting state.
fn require_waiting(review: &Review) -> Result<(), AppError> {
    if review.is_waiting() {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(
            "Topics can no longer be changed once the review has been finalized".to_string(),
        ))
    }
}

/// Persist the reviewer's drafted topics, all-or-nothing.
///
/// Reviewer only, on the scheduled day only, while the review is waiting.
/// Drafts are not deduplicated against what is already stored.
pub fn commit(
    conn: &Connection,
    review: &Review,
    role: ReviewRole,
    today: &str,
    contents: &[String],
) -> Result<Vec<Topic>, AppError> {
    if role != ReviewRole::Reviewer {
        return Err(AppError::PermissionDenied(
            "Only the reviewer may suggest topics".to_string(),
        ));
    }
    require_waiting(review)?;
    if review.review_date != today {
        return Err(AppError::PermissionDenied(
            "Topics can only be suggested on the scheduled review day".to_string(),
        ));
    }
    if contents.is_empty() {
        return Err(AppError::Validation("No drafted topics to commit".to_string()));
    }
    if contents.iter().any(|c| c.trim().is_empty()) {
        return Err(AppError::Validation("Topic content is required".to_string()));
    }

    Ok(queries::insert_batch(conn, review.id, contents)?)
}

/// Flip a topic between pending and resolved. Secretary only.
/// Returns the new `is_pending` value.
pub fn toggle(
    conn: &Connection,
    review: &Review,
    role: ReviewRole,
    topic_id: i64,
) -> Result<bool, AppError> {
    if role != ReviewRole::Secretary {
        return Err(AppError::PermissionDenied(
            "Only the secretary may resolve topics".to_string(),
        ));
    }
    require_waiting(review)?;

    let topic = queries::find_by_id(conn, topic_id)?.ok_or(AppError::NotFound)?;
    if topic.review_id != review.id {
        return Err(AppError::NotFound);
    }
    let next = !topic.is_pending;
    queries::set_pending(conn, topic_id, next)?;
    Ok(next)
}

/// Hard-delete a topic. Reviewer only.
pub fn remove(
    conn: &Connection,
    review: &Review,
    role: ReviewRole,
    topic_id: i64,
) -> Result<(), AppError> {
    if role != ReviewRole::Reviewer {
        return Err(AppError::PermissionDenied(
            "Only the reviewer may delete topics".to_string(),
        ));
    }
    require_waiting(review)?;

    let topic = queries::find_by_id(conn, topic_id)?.ok_or(AppError::NotFound)?;
    if topic.review_id != review.id {
        return Err(AppError::NotFound);
    }
    queries::delete(conn, topic_id)?;
    Ok(())
}
