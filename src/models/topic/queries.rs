use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;

fn map_topic_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Topic> {
    Ok(Topic {
        id: row.get("id")?,
        review_id: row.get("review_id")?,
        content: row.get("content")?,
        is_pending: row.get("is_pending")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_review(conn: &Connection, review_id: i64) -> rusqlite::Result<Vec<Topic>> {
    let mut stmt = conn.prepare(
        "SELECT id, review_id, content, is_pending, created_at \
         FROM topics WHERE review_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![review_id], map_topic_row)?;
    rows.collect()
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Topic>> {
    conn.query_row(
        "SELECT id, review_id, content, is_pending, created_at FROM topics WHERE id = ?1",
        params![id],
        map_topic_row,
    )
    .optional()
}

/// Persist a batch of drafted topics in one transaction, all pending.
/// All-or-nothing: if any insert fails the whole batch rolls back.
pub fn insert_batch(
    conn: &Connection,
    review_id: i64,
    contents: &[String],
) -> rusqlite::Result<Vec<Topic>> {
    let tx = conn.unchecked_transaction()?;
    let mut ids = Vec::with_capacity(contents.len());
    for content in contents {
        tx.execute(
            "INSERT INTO topics (review_id, content, is_pending) VALUES (?1, ?2, 1)",
            params![review_id, content],
        )?;
        ids.push(tx.last_insert_rowid());
    }
    tx.commit()?;

    ids.into_iter()
        .map(|id| find_by_id(conn, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows))
        .collect()
}

pub fn set_pending(conn: &Connection, id: i64, is_pending: bool) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE topics SET is_pending = ?2 WHERE id = ?1",
        params![id, is_pending],
    )
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM topics WHERE id = ?1", params![id])
}
