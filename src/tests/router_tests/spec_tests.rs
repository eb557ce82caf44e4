use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db};

#[test]
fn openapi_document_is_served_as_yaml_with_open_cors() {
    let db = make_db("spec");
    let mut resp = handle(get("/api/spec"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/x-yaml"
    );
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("openapi:"));
    assert!(body.contains("/leads/channels/{channelId}/webhook"));
    assert!(body.contains("/leads/{leadId}/timeline"));
    assert!(body.contains("/leads/{leadId}/assignees"));
}

#[test]
fn stylesheet_is_served_as_css() {
    let db = make_db("css");
    let mut resp = handle(get("/static/main.css"), &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(&mut resp).contains(".card"));
}
