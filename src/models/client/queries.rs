use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;

pub fn create(conn: &Connection, name: &str, contact_email: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO clients (name, contact_email) VALUES (?1, ?2)",
        params![name, contact_email],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Client>> {
    conn.query_row(
        "SELECT id, name, contact_email, created_at FROM clients WHERE id = ?1",
        params![id],
        |row| {
            Ok(Client {
                id: row.get("id")?,
                name: row.get("name")?,
                contact_email: row.get("contact_email")?,
                created_at: row.get("created_at")?,
            })
        },
    )
    .optional()
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<ClientListItem>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.name, c.contact_email, \
                (SELECT COUNT(*) FROM projects p WHERE p.client_id = c.id) AS project_count \
         FROM clients c ORDER BY c.name ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ClientListItem {
            id: row.get("id")?,
            name: row.get("name")?,
            contact_email: row.get("contact_email")?,
            project_count: row.get("project_count")?,
        })
    })?;
    rows.collect()
}

/// Delete a client and everything under it (projects, their reviews, and
/// each review's children) in one transaction.
pub fn delete_cascade(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    for table in ["votes", "reports", "topics", "participants"] {
        let sql = format!(
            "DELETE FROM {table} WHERE review_id IN ( \
                 SELECT r.id FROM reviews r \
                 JOIN projects p ON p.id = r.project_id \
                 WHERE p.client_id = ?1)"
        );
        tx.execute(&sql, params![id])?;
    }
    tx.execute(
        "DELETE FROM reviews WHERE project_id IN (SELECT id FROM projects WHERE client_id = ?1)",
        params![id],
    )?;
    tx.execute("DELETE FROM projects WHERE client_id = ?1", params![id])?;
    tx.execute("DELETE FROM clients WHERE id = ?1", params![id])?;
    tx.commit()
}
