use crate::errors::ServerError;
use crate::payload::LeadForm;
use crate::router::handle;
use crate::session;
use crate::tests::utils::{body_string, get, make_db};

#[test]
fn home_renders_the_capture_form_with_demo_defaults() {
    let db = make_db("home");
    let mut resp = handle(get("/"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Lead Capture API Test"));
    assert!(body.contains("54a57918-ad9b-4adb-a35a-9232bf78d734"));
    assert!(body.contains("real_estate_website"));
    assert!(body.contains(r#"action="/submit""#));
}

#[test]
fn home_prefills_from_a_snapshot_query_param() {
    let db = make_db("home_snapshot");

    let mut form = LeadForm::demo();
    form.first_name = "Snapshotted".to_string();
    form.note = "remember me".to_string();
    let snapshot = session::encode_snapshot(&form);

    let mut resp = handle(get(&format!("/?s={snapshot}")), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Snapshotted"));
    assert!(body.contains("remember me"));
}

#[test]
fn malformed_snapshot_falls_back_to_demo_defaults() {
    let db = make_db("home_bad_snapshot");

    let mut resp = handle(get("/?s=%21%21%21garbage"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("54a57918-ad9b-4adb-a35a-9232bf78d734"));
}

#[test]
fn unknown_paths_are_not_found() {
    let db = make_db("home_404");
    match handle(get("/nope"), &db) {
        Err(ServerError::NotFound) => {}
        Err(other) => panic!("expected NotFound, got {other:?}"),
        Ok(_) => panic!("expected NotFound, got a response"),
    }
}
