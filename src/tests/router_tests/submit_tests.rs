use crate::router::handle;
use crate::tests::utils::{body_string, make_db, post_form};

use std::sync::Mutex;

// The base-URL override is process-wide, so the tests using it take turns.
static API_LOCK: Mutex<()> = Mutex::new(());

// Point the client at a local port nothing listens on: the submission
// flow then exercises the transport-failure path deterministically.
fn with_unreachable_api<T>(f: impl FnOnce() -> T) -> T {
    let _guard = API_LOCK.lock().unwrap();
    std::env::set_var("RECHAT_API_BASE", "http://127.0.0.1:9");
    let out = f();
    std::env::remove_var("RECHAT_API_BASE");
    out
}

#[test]
fn failed_submission_renders_the_error_and_echoes_the_request() {
    let db = make_db("submit_fail");

    let mut resp = with_unreachable_api(|| {
        handle(
            post_form(
                "/submit",
                "lead_channel=test-channel&first_name=Jane&tags=website_inquiry",
            ),
            &db,
        )
        .unwrap()
    });

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Submission failed"));
    assert!(body.contains("/leads/channels/test-channel/webhook"));
    // The built payload is echoed for inspection.
    assert!(body.contains("Jane"));
    assert!(body.contains("website_inquiry"));
    // And the share link restores the submitted form.
    assert!(body.contains("/?s="));
}

#[test]
fn failed_activity_post_renders_a_banner_not_an_error_page() {
    let db = make_db("activity_fail");

    let mut resp = with_unreachable_api(|| {
        handle(
            post_form(
                "/leads/abc-123/activity",
                "action=ContactSignedUp&notes=hello",
            ),
            &db,
        )
        .unwrap()
    });

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Failed to post activity"));
    assert!(body.contains("abc-123"));
}
