use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use std::fs;

/// Read-only passthrough of the packaged OpenAPI document. Served with an
/// open CORS header so external doc viewers can load it.
pub fn openapi_response(path: &str) -> ResultResp {
    let contents = fs::read_to_string(path)
        .map_err(|e| ServerError::IoError(format!("Failed to read OpenAPI document: {e}")))?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/x-yaml")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::new(contents))
        .map_err(|_| ServerError::InternalError)
}

/// The demo's single stylesheet.
pub fn stylesheet_response(path: &str) -> ResultResp {
    let contents = fs::read_to_string(path)
        .map_err(|e| ServerError::IoError(format!("Failed to read stylesheet: {e}")))?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .body(Body::new(contents))
        .map_err(|_| ServerError::InternalError)
}
