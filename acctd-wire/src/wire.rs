//! The wire error type returned to the HTTP transport layer.
//!
//! A [`WireError`] is the terminal form of every error response: a valid
//! HTTP status, a stable errno, a non-empty message, and a pointer to the
//! response-format documentation. It is created fresh per request, never
//! mutated after construction, and handed straight to the transport layer
//! for rendering.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Documentation reference included in every error response.
///
/// Identical across all error kinds; part of the response-format contract.
pub const INFO_URL: &str = "https://acctd.dev/docs/api#response-format";

/// Wire key for the retry hint carried by throttling and availability errors.
pub(crate) const RETRY_AFTER_FIELD: &str = "retryAfter";

/// Envelope fields that caller-supplied extras may not override.
pub(crate) const RESERVED_FIELDS: &[&str] = &["code", "errno", "error", "message", "info"];

/// A fully-populated error response body.
///
/// `extra` carries the kind-specific fields (`email`, `param`,
/// `serverTime`, `retryAfter`, ...) and anything the raw error supplied;
/// it is flattened into the JSON object on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (errno {errno})")]
pub struct WireError {
    /// HTTP status code; always a valid status.
    pub code: u16,
    /// Stable error number; always defined, 999 when unclassifiable.
    pub errno: u32,
    /// Generic reason phrase for `code` ("Bad Request", "Unauthorized", ...).
    pub error: String,
    /// Human-readable message; never empty.
    pub message: String,
    /// Documentation reference for the response format.
    pub info: String,
    /// Kind-specific and passthrough fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WireError {
    /// Returns the HTTP status as a typed value.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Returns the retry hint in seconds, if this response carries one.
    #[must_use]
    pub fn retry_after(&self) -> Option<u64> {
        self.extra.get(RETRY_AFTER_FIELD).and_then(Value::as_u64)
    }
}

/// Generic label for a status code, for the `error` field.
pub(crate) fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Error")
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for WireError {
    fn into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse;

        let status = self.status();
        let retry_after = self.retry_after();
        let mut response = (status, axum::Json(self)).into_response();
        if let Some(secs) = retry_after
            && let Ok(value) = http::HeaderValue::from_str(&secs.to_string())
        {
            response.headers_mut().insert(http::header::RETRY_AFTER, value);
        }
        response
    }
}
