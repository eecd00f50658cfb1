use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;

/// Assign an employee to a review under a role.
///
/// No uniqueness is enforced; an employee may hold several rows and the
/// first one wins at role resolution.
pub fn assign(
    conn: &Connection,
    review_id: i64,
    employee_id: i64,
    role_id: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO participants (review_id, employee_id, role_id) VALUES (?1, ?2, ?3)",
        params![review_id, employee_id, role_id],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All participants of a review with employee and role details.
pub fn find_by_review(conn: &Connection, review_id: i64) -> rusqlite::Result<Vec<ParticipantDetail>> {
    let mut stmt = conn.prepare(
        "SELECT pt.id, e.id AS employee_id, e.name AS employee_name, e.profession, \
                ro.id AS role_id, ro.name AS role_name, ro.description AS role_description \
         FROM participants pt \
         JOIN employees e ON e.id = pt.employee_id \
         JOIN roles ro ON ro.id = pt.role_id \
         WHERE pt.review_id = ?1 \
         ORDER BY pt.id ASC",
    )?;
    let rows = stmt.query_map(params![review_id], |row| {
        Ok(ParticipantDetail {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            employee_name: row.get("employee_name")?,
            profession: row.get("profession")?,
            role_id: row.get("role_id")?,
            role_name: row.get("role_name")?,
            role_description: row.get("role_description")?,
        })
    })?;
    rows.collect()
}

/// Resolve an employee's workflow role for a review. First participant row
/// wins when the employee appears more than once.
pub fn resolve_role(
    conn: &Connection,
    review_id: i64,
    employee_id: i64,
) -> rusqlite::Result<ReviewRole> {
    let name: Option<String> = conn
        .query_row(
            "SELECT ro.name FROM participants pt \
             JOIN roles ro ON ro.id = pt.role_id \
             WHERE pt.review_id = ?1 AND pt.employee_id = ?2 \
             ORDER BY pt.id ASC LIMIT 1",
            params![review_id, employee_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(name.map(|n| ReviewRole::from_name(&n)).unwrap_or(ReviewRole::Other))
}

/// The review a participant row belongs to, for scoping checks.
pub fn find_review_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<i64>> {
    conn.query_row(
        "SELECT review_id FROM participants WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )
    .optional()
}

pub fn remove(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM participants WHERE id = ?1", params![id])
}

pub fn role_exists(conn: &Connection, role_id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM roles WHERE id = ?1)",
        params![role_id],
        |row| row.get(0),
    )
}

/// Role lookup for assignment forms.
pub fn find_roles(conn: &Connection) -> rusqlite::Result<Vec<(i64, String, String)>> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM roles ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;
    rows.collect()
}
