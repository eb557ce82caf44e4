// src/session.rs
use crate::payload::LeadForm;
use base64::Engine;
use std::fmt;

/// Snapshot codec for the shareable form state carried in the page URL.
///
/// Encoding is the UTF-8 JSON of the form, base64 with the URL-safe
/// alphabet and no padding, so it can live in a fragment or query
/// parameter without further escaping.
pub fn encode_snapshot(form: &LeadForm) -> String {
    let json = serde_json::to_vec(form).unwrap_or_default();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json)
}

/// Reverses `encode_snapshot`. Failures are reported, never fatal; the
/// caller falls back to defaults.
pub fn decode_snapshot(encoded: &str) -> Result<LeadForm, DecodeError> {
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let json = std::str::from_utf8(&bytes).map_err(|e| DecodeError::Utf8(e.to_string()))?;
    serde_json::from_str(json).map_err(|e| DecodeError::Json(e.to_string()))
}

/// Best-effort variant used by the routes: a bad snapshot is logged and
/// the form silently reverts to the demo defaults.
pub fn decode_snapshot_or_default(encoded: &str) -> LeadForm {
    match decode_snapshot(encoded) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("⚠️ Ignoring malformed form snapshot: {e}");
            LeadForm::demo()
        }
    }
}

#[derive(Debug)]
pub enum DecodeError {
    Base64(String),
    Utf8(String),
    Json(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Base64(msg) => write!(f, "base64 decode failed: {msg}"),
            DecodeError::Utf8(msg) => write!(f, "snapshot is not UTF-8: {msg}"),
            DecodeError::Json(msg) => write!(f, "snapshot JSON parse failed: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}
