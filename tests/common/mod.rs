//! Shared test infrastructure for model layer tests.
//!
//! Creates a temporary SQLite database with the real schema and provides
//! seed helpers for the entities most tests need.

use rusqlite::{Connection, params};
use tempfile::TempDir;

use revboard::db::MIGRATIONS;

pub const TODAY: &str = "2026-03-01";

/// Setup a test database with schema and the three participant roles.
///
/// Returns a tuple of (TempDir, Connection) where TempDir must be kept
/// alive for the Connection to remain valid.
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS).expect("Failed to run migrations");

    for (name, description) in revboard::db::SEED_ROLES {
        conn.execute(
            "INSERT INTO roles (name, description) VALUES (?1, ?2)",
            params![name, description],
        )
        .expect("Failed to seed role");
    }

    (dir, conn)
}

pub fn role_id(conn: &Connection, name: &str) -> i64 {
    conn.query_row("SELECT id FROM roles WHERE name = ?1", params![name], |row| row.get(0))
        .expect("Role not found")
}

pub fn insert_employee(conn: &Connection, name: &str, is_manager: bool) -> i64 {
    conn.execute(
        "INSERT INTO employees (name, email, password_hash, is_manager) \
         VALUES (?1, ?2, 'not-a-real-hash', ?3)",
        params![name, format!("{name}@example.com"), is_manager],
    )
    .expect("Failed to insert employee");
    conn.last_insert_rowid()
}

pub fn insert_project(conn: &Connection, name: &str) -> i64 {
    conn.execute("INSERT INTO clients (name) VALUES ('Test Client')", [])
        .expect("Failed to insert client");
    let client_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO projects (client_id, name) VALUES (?1, ?2)",
        params![client_id, name],
    )
    .expect("Failed to insert project");
    conn.last_insert_rowid()
}

/// Insert a waiting review scheduled for `TODAY`.
pub fn insert_review(conn: &Connection, project_id: i64) -> i64 {
    revboard::models::review::create(
        conn,
        project_id,
        None,
        "Q4 API Architecture Review",
        "Quarterly design pass",
        "Auth",
        TODAY,
        None,
    )
    .expect("Failed to insert review")
}

#[allow(dead_code)]
pub fn insert_participant(conn: &Connection, review_id: i64, employee_id: i64, role: &str) -> i64 {
    revboard::models::participant::assign(conn, review_id, employee_id, role_id(conn, role))
        .expect("Failed to assign participant")
}

/// Reload a review after a mutation.
#[allow(dead_code)]
pub fn reload_review(conn: &Connection, id: i64) -> revboard::models::review::Review {
    revboard::models::review::find_by_id(conn, id)
        .expect("Query failed")
        .expect("Review not found")
}

/// A review plus a reviewer and a secretary, the usual fixture.
#[allow(dead_code)]
pub fn setup_review_with_crew(conn: &Connection) -> (i64, i64, i64) {
    let project_id = insert_project(conn, "Test Project");
    let review_id = insert_review(conn, project_id);
    let reviewer_id = insert_employee(conn, "rhea", false);
    let secretary_id = insert_employee(conn, "sam", false);
    insert_participant(conn, review_id, reviewer_id, "Reviewer");
    insert_participant(conn, review_id, secretary_id, "Secretary");
    (review_id, reviewer_id, secretary_id)
}
