use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db, post_form};

#[test]
fn activity_page_renders_the_tracker_for_a_lead() {
    let db = make_db("activity_page");
    let mut resp = handle(get("/leads/abc-123/activity"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("abc-123"));
    // All ten action types are offered.
    assert!(body.contains("ContactViewedListing"));
    assert!(body.contains("ContactSearchedListings"));
    assert!(body.contains("Replace Assignees"));
}

#[test]
fn posting_an_unknown_action_is_a_bad_request() {
    let db = make_db("activity_bad_action");
    let req = post_form("/leads/abc-123/activity", "action=ContactDidSomething");

    match handle(req, &db) {
        Err(ServerError::BadRequest(msg)) => {
            assert!(msg.contains("ContactDidSomething"), "got: {msg}")
        }
        Err(other) => panic!("expected BadRequest, got {other:?}"),
        Ok(_) => panic!("expected BadRequest, got a response"),
    }
}

#[test]
fn lead_routes_reject_missing_ids_and_unknown_actions() {
    let db = make_db("activity_404");

    for path in ["/leads//activity", "/leads/abc", "/leads/abc/timeline"] {
        match handle(get(path), &db) {
            Err(ServerError::NotFound) => {}
            Err(other) => panic!("expected NotFound for {path}, got {other:?}"),
            Ok(_) => panic!("expected NotFound for {path}, got a response"),
        }
    }
}
