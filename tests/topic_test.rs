mod common;

use common::*;
use revboard::errors::AppError;
use revboard::models::participant::ReviewRole;
use revboard::models::topic::{self, DraftList, moderation};

fn commit_one(conn: &rusqlite::Connection, review_id: i64, content: &str) -> i64 {
    let review = reload_review(conn, review_id);
    let created = moderation::commit(
        conn,
        &review,
        ReviewRole::Reviewer,
        TODAY,
        &[content.to_string()],
    )
    .expect("Failed to commit topic");
    created[0].id
}

#[test]
fn test_commit_batch_round_trip() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    let drafted = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let created = moderation::commit(&conn, &review, ReviewRole::Reviewer, TODAY, &drafted)
        .expect("Failed to commit");
    assert_eq!(created.len(), 3);

    let reloaded = topic::find_by_review(&conn, review_id).expect("Query failed");
    let contents: Vec<_> = reloaded.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
    assert!(reloaded.iter().all(|t| t.is_pending));
}

#[test]
fn test_commit_requires_reviewer() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    let drafted = vec!["a".to_string()];
    for role in [ReviewRole::Secretary, ReviewRole::Other] {
        let err = moderation::commit(&conn, &review, role, TODAY, &drafted).unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }
    assert!(topic::find_by_review(&conn, review_id).unwrap().is_empty());
}

#[test]
fn test_commit_requires_review_day() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    let err = moderation::commit(
        &conn,
        &review,
        ReviewRole::Reviewer,
        "2026-02-28",
        &["a".to_string()],
    )
    .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
}

#[test]
fn test_commit_rejects_empty_batch_and_blank_content() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let review = reload_review(&conn, review_id);

    let err = moderation::commit(&conn, &review, ReviewRole::Reviewer, TODAY, &[]).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = moderation::commit(
        &conn,
        &review,
        ReviewRole::Reviewer,
        TODAY,
        &["ok".to_string(), "   ".to_string()],
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // All-or-nothing: the valid entry must not have been inserted.
    assert!(topic::find_by_review(&conn, review_id).unwrap().is_empty());
}

#[test]
fn test_toggle_requires_secretary() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let topic_id = commit_one(&conn, review_id, "scope creep");
    let review = reload_review(&conn, review_id);

    let err = moderation::toggle(&conn, &review, ReviewRole::Reviewer, topic_id).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let unchanged = topic::find_by_id(&conn, topic_id).unwrap().unwrap();
    assert!(unchanged.is_pending);
}

#[test]
fn test_toggle_twice_restores_pending() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let topic_id = commit_one(&conn, review_id, "scope creep");
    let review = reload_review(&conn, review_id);

    let first = moderation::toggle(&conn, &review, ReviewRole::Secretary, topic_id).unwrap();
    assert!(!first);
    let second = moderation::toggle(&conn, &review, ReviewRole::Secretary, topic_id).unwrap();
    assert!(second);

    let topic = topic::find_by_id(&conn, topic_id).unwrap().unwrap();
    assert!(topic.is_pending);
}

#[test]
fn test_remove_requires_reviewer() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let topic_id = commit_one(&conn, review_id, "scope creep");
    let review = reload_review(&conn, review_id);

    let err = moderation::remove(&conn, &review, ReviewRole::Secretary, topic_id).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    moderation::remove(&conn, &review, ReviewRole::Reviewer, topic_id).expect("Failed to remove");
    assert!(topic::find_by_id(&conn, topic_id).unwrap().is_none());
}

#[test]
fn test_topics_frozen_after_finalize() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let topic_id = commit_one(&conn, review_id, "scope creep");

    conn.execute("UPDATE reviews SET status = 4 WHERE id = ?1", [review_id])
        .expect("Failed to terminate");
    let review = reload_review(&conn, review_id);

    let err = moderation::commit(
        &conn,
        &review,
        ReviewRole::Reviewer,
        TODAY,
        &["late".to_string()],
    )
    .unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let err = moderation::toggle(&conn, &review, ReviewRole::Secretary, topic_id).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let err = moderation::remove(&conn, &review, ReviewRole::Reviewer, topic_id).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let topic = topic::find_by_id(&conn, topic_id).unwrap().unwrap();
    assert!(topic.is_pending);
}

#[test]
fn test_toggle_scoped_to_review() {
    let (_dir, conn) = setup_test_db();
    let (review_id, _, _) = setup_review_with_crew(&conn);
    let other_project = insert_project(&conn, "Other Project");
    let other_review = insert_review(&conn, other_project);
    let topic_id = commit_one(&conn, other_review, "belongs elsewhere");

    let review = reload_review(&conn, review_id);
    let err = moderation::toggle(&conn, &review, ReviewRole::Secretary, topic_id).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[test]
fn test_draft_list_add_and_remove() {
    let mut drafts = DraftList::default();
    drafts.add("first");
    drafts.add("  second  ");
    drafts.add("   ");
    assert_eq!(drafts.items, vec!["first", "second"]);

    drafts.remove(0);
    assert_eq!(drafts.items, vec!["second"]);

    // Out-of-range indexes are ignored.
    drafts.remove(5);
    assert_eq!(drafts.items, vec!["second"]);
    assert!(!drafts.is_empty());
}
