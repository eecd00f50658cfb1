use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;

/// Record one ballot. The UNIQUE(review_id, employee_id) constraint makes a
/// second ballot from the same employee fail instead of double-inserting.
pub fn insert(
    conn: &Connection,
    review_id: i64,
    employee_id: i64,
    status: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO votes (review_id, employee_id, status) VALUES (?1, ?2, ?3)",
        params![review_id, employee_id, status],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All ballot codes for a review, oldest first.
pub fn find_codes_by_review(conn: &Connection, review_id: i64) -> rusqlite::Result<Vec<i64>> {
    let mut stmt =
        conn.prepare("SELECT status FROM votes WHERE review_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map(params![review_id], |row| row.get(0))?;
    rows.collect()
}

/// Ballots with voter names, for the detail page.
pub fn find_by_review(conn: &Connection, review_id: i64) -> rusqlite::Result<Vec<VoteDetail>> {
    let mut stmt = conn.prepare(
        "SELECT v.id, v.employee_id, e.name AS employee_name, v.status \
         FROM votes v \
         JOIN employees e ON e.id = v.employee_id \
         WHERE v.review_id = ?1 ORDER BY v.id ASC",
    )?;
    let rows = stmt.query_map(params![review_id], |row| {
        Ok(VoteDetail {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            employee_name: row.get("employee_name")?,
            status: row.get("status")?,
        })
    })?;
    rows.collect()
}

/// The caller's own ballot, if any.
pub fn find_by_employee(
    conn: &Connection,
    review_id: i64,
    employee_id: i64,
) -> rusqlite::Result<Option<Vote>> {
    conn.query_row(
        "SELECT id, review_id, employee_id, status, created_at \
         FROM votes WHERE review_id = ?1 AND employee_id = ?2",
        params![review_id, employee_id],
        |row| {
            Ok(Vote {
                id: row.get("id")?,
                review_id: row.get("review_id")?,
                employee_id: row.get("employee_id")?,
                status: row.get("status")?,
                created_at: row.get("created_at")?,
            })
        },
    )
    .optional()
}
