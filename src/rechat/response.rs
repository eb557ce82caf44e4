use serde_json::Value;
use std::fmt;

/// What a remote call came back with, reduced to what the pages render.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccess {
    pub status: u16,
    pub body: ApiBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ApiSuccess {
    /// Server-assigned lead identifier, when the response carries one.
    /// Checked under the shapes the API has been seen to use.
    pub fn lead_id(&self) -> Option<String> {
        let ApiBody::Json(json) = &self.body else {
            return None;
        };
        for candidate in [&json["data"]["id"], &json["id"], &json["lead_id"]] {
            match candidate {
                Value::String(s) if !s.is_empty() => return Some(s.clone()),
                Value::Number(n) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }

    /// Pretty-printed body for the result page, if there is one.
    pub fn body_pretty(&self) -> Option<String> {
        match &self.body {
            ApiBody::Empty => None,
            ApiBody::Json(json) => serde_json::to_string_pretty(json).ok(),
            ApiBody::Text(text) => Some(text.clone()),
        }
    }
}

/// The two failure kinds the demo distinguishes: the request never got a
/// response, or the service answered with a non-2xx status. Neither is
/// retried; both are shown to the user verbatim.
#[derive(Debug)]
pub enum ApiError {
    Transport(String),
    Rejected { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed before a response: {msg}"),
            ApiError::Rejected { status, body } => {
                write!(f, "rejected with status {status}: {body}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Normalizes a raw (status, body text) pair.
///
/// 204 is a bodyless success. Other 2xx parse the body as JSON when
/// possible and fall back to raw text. Non-2xx become a rejection whose
/// message carries whatever the server said, re-serialized compactly when
/// it was JSON.
pub fn normalize(status: u16, text: &str) -> Result<ApiSuccess, ApiError> {
    if status == 204 {
        return Ok(ApiSuccess {
            status,
            body: ApiBody::Empty,
        });
    }

    let parsed = if text.is_empty() {
        None
    } else {
        serde_json::from_str::<Value>(text).ok()
    };

    if (200..300).contains(&status) {
        let body = match parsed {
            Some(json) => ApiBody::Json(json),
            None if text.is_empty() => ApiBody::Empty,
            None => ApiBody::Text(text.to_string()),
        };
        return Ok(ApiSuccess { status, body });
    }

    let body = match parsed {
        Some(json) => serde_json::to_string(&json).unwrap_or_else(|_| text.to_string()),
        None if text.is_empty() => "(no body)".to_string(),
        None => text.to_string(),
    };
    Err(ApiError::Rejected { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_is_success_without_body() {
        let outcome = normalize(204, "").unwrap();
        assert_eq!(outcome.status, 204);
        assert_eq!(outcome.body, ApiBody::Empty);
        assert_eq!(outcome.body_pretty(), None);
        assert_eq!(outcome.lead_id(), None);
    }

    #[test]
    fn ok_with_json_body_parses() {
        let outcome = normalize(200, r#"{"data":{"id":"abc-123"}}"#).unwrap();
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.lead_id(), Some("abc-123".to_string()));
    }

    #[test]
    fn ok_with_plain_text_wraps_raw() {
        let outcome = normalize(201, "created").unwrap();
        assert_eq!(outcome.body, ApiBody::Text("created".to_string()));
        assert_eq!(outcome.lead_id(), None);
    }

    #[test]
    fn lead_id_falls_back_through_known_shapes() {
        let top = normalize(200, r#"{"id":"x1"}"#).unwrap();
        assert_eq!(top.lead_id(), Some("x1".to_string()));

        let snake = normalize(200, r#"{"lead_id":"x2"}"#).unwrap();
        assert_eq!(snake.lead_id(), Some("x2".to_string()));

        let numeric = normalize(200, r#"{"id":42}"#).unwrap();
        assert_eq!(numeric.lead_id(), Some("42".to_string()));

        let none = normalize(200, r#"{"ok":true}"#).unwrap();
        assert_eq!(none.lead_id(), None);
    }

    #[test]
    fn not_found_rejection_carries_status_and_body() {
        let err = normalize(404, r#"{"message":"not found"}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("404"), "missing status in: {message}");
        assert!(message.contains("not found"), "missing body in: {message}");
    }

    #[test]
    fn rejection_with_plain_text_body_keeps_it_raw() {
        let err = normalize(500, "upstream exploded").unwrap_err();
        match err {
            ApiError::Rejected { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejection_with_empty_body_notes_it() {
        let err = normalize(503, "").unwrap_err();
        assert!(err.to_string().contains("(no body)"));
    }
}
