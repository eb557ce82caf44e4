use crate::db::history::{record_submission, SubmissionRecord};
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db};
use chrono::DateTime;

fn record(n: i64) -> SubmissionRecord {
    SubmissionRecord {
        lead_id: format!("lead-{n}"),
        name: format!("Person {n}"),
        email: format!("p{n}@example.com"),
        channel: "demo-channel".to_string(),
        created_at: DateTime::from_timestamp(1_700_000_000 + n, 0).unwrap(),
    }
}

#[test]
fn history_page_is_empty_at_first() {
    let db = make_db("history_empty");
    let mut resp = handle(get("/history"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("No submissions recorded yet"));
}

#[test]
fn history_page_lists_recent_submissions_with_tracker_links() {
    let db = make_db("history_list");
    record_submission(&db, &record(1)).unwrap();
    record_submission(&db, &record(2)).unwrap();

    let mut resp = handle(get("/history"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Person 1"));
    assert!(body.contains("p2@example.com"));
    assert!(body.contains("/leads/lead-2/activity"));
}

#[test]
fn track_redirects_to_the_activity_page() {
    let db = make_db("track");
    let resp = handle(get("/track?lead_id=abc-123"), &db).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "/leads/abc-123/activity"
    );
}

#[test]
fn track_without_an_id_returns_to_history() {
    let db = make_db("track_blank");
    let resp = handle(get("/track?lead_id=++"), &db).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/history");
}
