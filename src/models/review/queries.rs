use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;
use crate::models::status::ReviewStatus;

/// Schedule a new review for a project.
///
/// `status` is normally NULL (waiting); a manager may pass an explicit
/// initial code to bypass the termination/voting flow.
pub fn create(
    conn: &Connection,
    project_id: i64,
    manager_id: Option<i64>,
    title: &str,
    description: &str,
    part: &str,
    review_date: &str,
    status: Option<i64>,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO reviews (project_id, manager_id, title, description, part, review_date, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![project_id, manager_id, title, description, part, review_date, status],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_review_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        manager_id: row.get("manager_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        part: row.get("part")?,
        review_date: row.get("review_date")?,
        status: row.get("status")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Review>> {
    conn.query_row(
        "SELECT id, project_id, manager_id, title, description, part, review_date, status, created_at \
         FROM reviews WHERE id = ?1",
        params![id],
        map_review_row,
    )
    .optional()
}

const REVIEW_LIST_SELECT: &str = "\
SELECT r.id, r.title, r.part, r.review_date, r.status, \
       p.id AS project_id, p.name AS project_name \
FROM reviews r \
JOIN projects p ON p.id = r.project_id";

fn map_list_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReviewListItem> {
    Ok(ReviewListItem {
        id: row.get("id")?,
        title: row.get("title")?,
        part: row.get("part")?,
        review_date: row.get("review_date")?,
        status: row.get("status")?,
        project_id: row.get("project_id")?,
        project_name: row.get("project_name")?,
    })
}

/// All reviews, newest review date first.
pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<ReviewListItem>> {
    let sql = format!("{} ORDER BY r.review_date DESC", REVIEW_LIST_SELECT);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_list_row)?;
    rows.collect()
}

pub fn find_by_project(conn: &Connection, project_id: i64) -> rusqlite::Result<Vec<ReviewListItem>> {
    let sql = format!(
        "{} WHERE r.project_id = ?1 ORDER BY r.review_date DESC",
        REVIEW_LIST_SELECT
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![project_id], map_list_row)?;
    rows.collect()
}

pub fn find_by_status(conn: &Connection, status: Option<i64>) -> rusqlite::Result<Vec<ReviewListItem>> {
    let sql = match status {
        Some(_) => format!(
            "{} WHERE r.status = ?1 ORDER BY r.review_date DESC",
            REVIEW_LIST_SELECT
        ),
        None => format!(
            "{} WHERE r.status IS NULL ORDER BY r.review_date DESC",
            REVIEW_LIST_SELECT
        ),
    };
    let mut stmt = conn.prepare(&sql)?;
    let rows = match status {
        Some(code) => stmt.query_map(params![code], map_list_row)?,
        None => stmt.query_map([], map_list_row)?,
    };
    rows.collect()
}

/// Most recently created reviews, for the dashboard.
pub fn find_recent(conn: &Connection, limit: i64) -> rusqlite::Result<Vec<ReviewListItem>> {
    let sql = format!(
        "{} ORDER BY r.created_at DESC, r.id DESC LIMIT ?1",
        REVIEW_LIST_SELECT
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![limit], map_list_row)?;
    rows.collect()
}

/// Update the editable fields of a review. Status is never touched here;
/// it only moves through the lifecycle and quorum paths.
pub fn update_fields(
    conn: &Connection,
    id: i64,
    title: &str,
    description: &str,
    part: &str,
    review_date: &str,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE reviews SET title = ?2, description = ?3, part = ?4, review_date = ?5 WHERE id = ?1",
        params![id, title, description, part, review_date],
    )
}

/// Waiting -> Terminated, guarded so a review that already left the waiting
/// state is never overwritten. Returns the number of rows changed.
pub fn terminate_from_waiting(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE reviews SET status = ?2 WHERE id = ?1 AND status IS NULL",
        params![id, ReviewStatus::Terminated.code()],
    )
}

/// Terminated -> final verdict, guarded the same way. The quorum engine is
/// the only caller.
pub fn resolve_from_terminated(
    conn: &Connection,
    id: i64,
    winner: ReviewStatus,
) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE reviews SET status = ?2 WHERE id = ?1 AND status = ?3",
        params![id, winner.code(), ReviewStatus::Terminated.code()],
    )
}

/// Delete a review and all its child rows in one transaction, so a failure
/// partway through leaves nothing orphaned.
pub fn delete_cascade(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM votes WHERE review_id = ?1", params![id])?;
    tx.execute("DELETE FROM reports WHERE review_id = ?1", params![id])?;
    tx.execute("DELETE FROM topics WHERE review_id = ?1", params![id])?;
    tx.execute("DELETE FROM participants WHERE review_id = ?1", params![id])?;
    tx.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
    tx.commit()
}

/// Per-status totals for the dashboard.
pub fn count_by_status(conn: &Connection) -> rusqlite::Result<StatusCounts> {
    let mut counts = StatusCounts::default();
    let mut stmt = conn.prepare("SELECT status, COUNT(*) FROM reviews GROUP BY status")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, i64>(1)?))
    })?;
    for row in rows {
        let (status, count) = row?;
        match status.and_then(ReviewStatus::from_code) {
            None => counts.waiting += count,
            Some(ReviewStatus::Accepted) => counts.accepted += count,
            Some(ReviewStatus::Rejected) => counts.rejected += count,
            Some(ReviewStatus::Pending) => counts.pending += count,
            Some(ReviewStatus::Terminated) => counts.terminated += count,
        }
    }
    Ok(counts)
}
