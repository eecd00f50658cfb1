mod common;

use common::*;
use revboard::errors::AppError;
use revboard::models::report::{self, ReportInput};

fn input(part: &str, employee_id: i64, conclusions: &str) -> ReportInput {
    ReportInput {
        part: part.to_string(),
        employee_id,
        conclusions: conclusions.to_string(),
    }
}

#[test]
fn test_submit_and_read_back() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    report::submit(&conn, &review, &input("Auth", reviewer_id, "OK")).expect("Failed to submit");

    assert!(report::exists(&conn, review_id).unwrap());
    let stored = report::find_by_review(&conn, review_id).unwrap().unwrap();
    assert_eq!(stored.part, "Auth");
    assert_eq!(stored.employee_id, reviewer_id);
    assert_eq!(stored.employee_name, "rhea");
    assert_eq!(stored.conclusions, "OK");
}

#[test]
fn test_submit_rejects_empty_fields() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    let cases = [
        input("", reviewer_id, "OK"),
        input("Auth", reviewer_id, "   "),
        input("Auth", 0, "OK"),
    ];
    for case in &cases {
        let err = report::submit(&conn, &review, case).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert!(!report::exists(&conn, review_id).unwrap());
}

#[test]
fn test_submit_rejected_once_finalized() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);
    conn.execute("UPDATE reviews SET status = 4 WHERE id = ?1", [review_id])
        .expect("Failed to terminate");
    let review = reload_review(&conn, review_id);

    let err = report::submit(&conn, &review, &input("Auth", reviewer_id, "OK")).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
    assert!(!report::exists(&conn, review_id).unwrap());
}

#[test]
fn test_second_report_is_duplicate() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    report::submit(&conn, &review, &input("Auth", reviewer_id, "OK")).expect("Failed to submit");
    let err = report::submit(&conn, &review, &input("DB", reviewer_id, "Later")).unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));

    // The first report stands.
    let stored = report::find_by_review(&conn, review_id).unwrap().unwrap();
    assert_eq!(stored.part, "Auth");
}

#[test]
fn test_fields_are_trimmed() {
    let (_dir, conn) = setup_test_db();
    let (review_id, reviewer_id, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    report::submit(&conn, &review, &input("  Auth  ", reviewer_id, "  OK  "))
        .expect("Failed to submit");
    let stored = report::find_by_review(&conn, review_id).unwrap().unwrap();
    assert_eq!(stored.part, "Auth");
    assert_eq!(stored.conclusions, "OK");
}
