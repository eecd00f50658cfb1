use rusqlite::{Connection, OptionalExtension, params};

use super::types::*;
use crate::errors::{AppError, duplicate_on_constraint};

/// Create an employee. The UNIQUE email constraint surfaces as `Duplicate`.
pub fn create(
    conn: &Connection,
    name: &str,
    email: &str,
    password_hash: &str,
    profession: &str,
    is_manager: bool,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO employees (name, email, password_hash, profession, is_manager) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, email, password_hash, profession, is_manager],
    )
    .map_err(|e| duplicate_on_constraint(e, "employee with this email"))?;
    Ok(conn.last_insert_rowid())
}

fn map_employee_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        profession: row.get("profession")?,
        is_manager: row.get("is_manager")?,
        created_at: row.get("created_at")?,
    })
}

const EMPLOYEE_SELECT: &str =
    "SELECT id, name, email, password_hash, profession, is_manager, created_at FROM employees";

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Employee>> {
    let sql = format!("{} WHERE id = ?1", EMPLOYEE_SELECT);
    conn.query_row(&sql, params![id], map_employee_row).optional()
}

/// Login lookup.
pub fn find_by_email(conn: &Connection, email: &str) -> rusqlite::Result<Option<Employee>> {
    let sql = format!("{} WHERE email = ?1", EMPLOYEE_SELECT);
    conn.query_row(&sql, params![email], map_employee_row).optional()
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<EmployeeDisplay>> {
    let sql = format!("{} ORDER BY name ASC", EMPLOYEE_SELECT);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| map_employee_row(row).map(|e| EmployeeDisplay::from(&e)))?;
    rows.collect()
}
