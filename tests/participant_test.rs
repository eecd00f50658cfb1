mod common;

use common::*;
use rusqlite::params;

use revboard::models::participant::{self, ReviewRole};

#[test]
fn test_role_name_matching_is_case_insensitive() {
    assert_eq!(ReviewRole::from_name("Reviewer"), ReviewRole::Reviewer);
    assert_eq!(ReviewRole::from_name("REVIEWER"), ReviewRole::Reviewer);
    assert_eq!(ReviewRole::from_name("secretary"), ReviewRole::Secretary);
    assert_eq!(ReviewRole::from_name("SeCrEtArY"), ReviewRole::Secretary);
    assert_eq!(ReviewRole::from_name("Observer"), ReviewRole::Other);
    assert_eq!(ReviewRole::from_name(""), ReviewRole::Other);
}

#[test]
fn test_resolve_role_for_participants() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, secretary_id) = setup_review_with_crew(&conn);

    assert_eq!(
        participant::resolve_role(&conn, review_id, reviewer_id).unwrap(),
        ReviewRole::Reviewer
    );
    assert_eq!(
        participant::resolve_role(&conn, review_id, secretary_id).unwrap(),
        ReviewRole::Secretary
    );
}

#[test]
fn test_resolve_role_other_for_non_participant() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let outsider = insert_employee(&conn, "olaf", false);

    assert_eq!(
        participant::resolve_role(&conn, review_id, outsider).unwrap(),
        ReviewRole::Other
    );

    let observer = insert_employee(&conn, "ola", false);
    insert_participant(&conn, review_id, observer, "Observer");
    assert_eq!(
        participant::resolve_role(&conn, review_id, observer).unwrap(),
        ReviewRole::Other
    );
}

#[test]
fn test_resolve_role_first_row_wins_on_duplicates() {
    let (_dir, conn) = setup_test_db();
    let project_id = insert_project(&conn, "Test Project");
    let review_id = insert_review(&conn, project_id);
    let employee_id = insert_employee(&conn, "dual", false);

    // No uniqueness on (review, employee); the oldest row decides.
    insert_participant(&conn, review_id, employee_id, "Secretary");
    insert_participant(&conn, review_id, employee_id, "Reviewer");

    assert_eq!(
        participant::resolve_role(&conn, review_id, employee_id).unwrap(),
        ReviewRole::Secretary
    );
}

#[test]
fn test_find_by_review_joins_employee_and_role() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);

    let participants = participant::find_by_review(&conn, review_id).unwrap();
    assert_eq!(participants.len(), 2);
    let reviewer = participants.iter().find(|p| p.employee_id == reviewer_id).unwrap();
    assert_eq!(reviewer.employee_name, "rhea");
    assert_eq!(reviewer.role_name, "Reviewer");
}

#[test]
fn test_remove_participant() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);

    let participants = participant::find_by_review(&conn, review_id).unwrap();
    let target = participants.iter().find(|p| p.employee_id == reviewer_id).unwrap();
    assert_eq!(participant::remove(&conn, target.id).unwrap(), 1);

    let remaining: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM participants WHERE review_id = ?1",
            params![review_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(remaining, 1);
}
