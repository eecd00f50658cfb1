use rusqlite::Connection;

use super::queries;
use super::types::VoteOutcome;
use crate::errors::{AppError, duplicate_on_constraint};
use crate::models::review::{self, Review};
use crate::models::status::ReviewStatus;

/// Votes needed to resolve a terminated review, independent of how many
/// participants it has.
pub const QUORUM: usize = 3;

/// The modal ballot code, ties broken by lowest status code.
pub fn winning_status(codes: &[i64]) -> Option<ReviewStatus> {
    let mut winner: Option<(i64, usize)> = None;
    for candidate in [
        ReviewStatus::Accepted.code(),
        ReviewStatus::Rejected.code(),
        ReviewStatus::Pending.code(),
    ] {
        let count = codes.iter().filter(|&&c| c == candidate).count();
        if count > 0 && winner.map(|(_, n)| count > n).unwrap_or(true) {
            winner = Some((candidate, count));
        }
    }
    winner.and_then(|(code, _)| ReviewStatus::from_code(code))
}

/// Record a ballot and, at quorum, resolve the review's final status.
///
/// The insert and the status resolution run in one transaction, so a ballot
/// is never recorded with a half-applied outcome. The UNIQUE constraint on
/// (review_id, employee_id) turns a concurrent double-vote into `Duplicate`.
pub fn cast(
    conn: &Connection,
    review: &Review,
    employee_id: i64,
    code: i64,
    accepted_terms: bool,
) -> Result<VoteOutcome, AppError> {
    if review.status() != Some(ReviewStatus::Terminated) {
        return Err(AppError::PermissionDenied(
            "Voting is only open once the review has been terminated".to_string(),
        ));
    }
    let status = ReviewStatus::from_code(code)
        .filter(|s| s.is_vote_option())
        .ok_or_else(|| AppError::Validation("Vote must be 1 (accepted), 2 (rejected) or 3 (pending)".to_string()))?;
    if !accepted_terms {
        return Err(AppError::Validation(
            "The binding-vote conditions must be accepted".to_string(),
        ));
    }

    let tx = conn.unchecked_transaction()?;
    queries::insert(&tx, review.id, employee_id, status.code())
        .map_err(|e| duplicate_on_constraint(e, "vote"))?;

    let codes = queries::find_codes_by_review(&tx, review.id)?;
    let mut resolved = None;
    if codes.len() >= QUORUM {
        if let Some(winner) = winning_status(&codes) {
            // Guarded on status = 4; the first quorum write wins.
            if review::resolve_from_terminated(&tx, review.id, winner)? > 0 {
                resolved = Some(winner.code());
                log::info!(
                    "review {} resolved to {} after {} votes",
                    review.id,
                    winner.label(),
                    codes.len()
                );
            }
        }
    }
    tx.commit().map_err(AppError::Db)?;

    Ok(VoteOutcome {
        vote_count: codes.len(),
        resolved,
    })
}
