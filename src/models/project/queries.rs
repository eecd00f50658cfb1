use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;

pub fn create(
    conn: &Connection,
    client_id: i64,
    name: &str,
    description: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO projects (client_id, name, description) VALUES (?1, ?2, ?3)",
        params![client_id, name, description],
    )?;
    Ok(conn.last_insert_rowid())
}

const PROJECT_SELECT: &str = "\
SELECT p.id, p.client_id, c.name AS client_name, p.name, p.description, p.created_at \
FROM projects p \
JOIN clients c ON c.id = p.client_id";

fn map_project_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        client_id: row.get("client_id")?,
        client_name: row.get("client_name")?,
        name: row.get("name")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Project>> {
    let sql = format!("{} WHERE p.id = ?1", PROJECT_SELECT);
    conn.query_row(&sql, params![id], map_project_row).optional()
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<Project>> {
    let sql = format!("{} ORDER BY p.name ASC", PROJECT_SELECT);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_project_row)?;
    rows.collect()
}

pub fn find_by_client(conn: &Connection, client_id: i64) -> rusqlite::Result<Vec<Project>> {
    let sql = format!("{} WHERE p.client_id = ?1 ORDER BY p.name ASC", PROJECT_SELECT);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![client_id], map_project_row)?;
    rows.collect()
}

/// Delete a project, its reviews, and every review's children in one
/// transaction.
pub fn delete_cascade(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    for table in ["votes", "reports", "topics", "participants"] {
        let sql = format!(
            "DELETE FROM {table} WHERE review_id IN \
                 (SELECT id FROM reviews WHERE project_id = ?1)"
        );
        tx.execute(&sql, params![id])?;
    }
    tx.execute("DELETE FROM reviews WHERE project_id = ?1", params![id])?;
    tx.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
    tx.commit()
}
