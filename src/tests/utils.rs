use crate::db::connection::{init_db, Database};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh test database using the production schema.
pub fn make_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{label}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

pub fn get(path: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(astra::Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, body: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(astra::Body::new(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: &mut astra::Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .expect("response body read");
    String::from_utf8(buf).expect("response body is UTF-8")
}
