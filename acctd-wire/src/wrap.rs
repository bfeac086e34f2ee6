//! Entry point that normalizes any raw error-like value into a [`WireError`].
//!
//! `wrap` is total: heterogeneous inputs — internal errors, auth-protocol
//! rejections, transport failures, or values with no recognizable structure
//! at all — deterministically produce a well-formed response. The error
//! reporting path itself must never fail, so unrecognized inputs degrade to
//! the generic errno-999 response instead of propagating a secondary error.

use crate::catalog::ErrorKind;
use crate::classify::classify;
use crate::wire::{INFO_URL, RESERVED_FIELDS, WireError, reason_phrase};
use http::StatusCode;
use serde_json::{Map, Value};

/// Loosely-typed error input, as raised by upstream collaborators.
///
/// Every field is optional and the whole value is treated as untrusted.
/// `code` stays untyped because upstream layers put non-numeric junk in it;
/// sanitization happens in [`wrap`], not here.
#[derive(Debug, Clone, Default)]
pub struct RawError {
    /// Human-readable message, if the source provided one.
    pub message: Option<String>,
    /// Claimed HTTP status, in whatever shape the source used.
    pub code: Option<Value>,
    /// Explicit errno; when present, classification is bypassed entirely.
    pub errno: Option<u32>,
    /// Any additional fields carried by the source.
    pub extra: Map<String, Value>,
}

impl RawError {
    /// Creates an empty raw error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the claimed HTTP status.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<Value>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets an explicit errno.
    #[must_use]
    pub fn with_errno(mut self, errno: u32) -> Self {
        self.errno = Some(errno);
        self
    }

    /// Adds one extra field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Captures any displayable error as a raw error.
    ///
    /// Only the rendered message survives; everything else is left for
    /// classification and defaulting.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::fmt::Display + ?Sized,
    {
        Self::default().with_message(err.to_string())
    }
}

impl From<Value> for RawError {
    /// Total ingestion of arbitrary JSON: objects contribute their fields,
    /// bare strings become the message, every other shape is empty input.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => {
                let mut raw = Self::default();
                for (key, value) in fields {
                    match key.as_str() {
                        "message" => raw.message = value.as_str().map(str::to_string),
                        "code" => raw.code = Some(value),
                        "errno" => {
                            // Only a non-negative integer counts as an
                            // explicit errno; anything else is unclassified.
                            raw.errno = value.as_u64().and_then(|n| u32::try_from(n).ok());
                        }
                        _ => {
                            raw.extra.insert(key, value);
                        }
                    }
                }
                raw
            }
            Value::String(message) => Self::default().with_message(message),
            _ => Self::default(),
        }
    }
}

/// Converts any raw error-like value into a well-formed wire error.
///
/// The result always has a defined errno (999 when nothing recognized the
/// input), a valid HTTP status, a non-empty message, and the documentation
/// reference. Unclassifiable inputs additionally emit one structured log
/// event before being degraded; that is the only side effect.
pub fn wrap(raw: impl Into<RawError>) -> WireError {
    let raw: RawError = raw.into();

    // Defaults first, then the caller's fields by explicit list.
    let message = match raw.message {
        Some(message) if !message.is_empty() => message,
        _ => ErrorKind::Unspecified.message().to_string(),
    };

    // An explicit errno always wins; classification runs only without one,
    // and a classified error replaces the working payload outright.
    if raw.errno.is_none()
        && let Some(wire) = classify(raw.code.as_ref(), &message)
    {
        return wire;
    }

    let status = sanitize_status(raw.code.as_ref(), raw.errno);

    let mut extra = raw.extra;
    for field in RESERVED_FIELDS {
        extra.remove(*field);
    }

    let errno = match raw.errno {
        Some(errno) => errno,
        None => {
            log_unclassified(status, &message, &extra);
            ErrorKind::Unspecified.errno()
        }
    };

    WireError {
        code: status.as_u16(),
        errno,
        error: reason_phrase(status).to_string(),
        message,
        info: INFO_URL.to_string(),
        extra,
    }
}

/// Emits the single observability event for an error nothing recognized.
fn log_unclassified(status: StatusCode, message: &str, extra: &Map<String, Value>) {
    let mut payload = extra.clone();
    payload.insert("code".to_string(), Value::from(status.as_u16()));
    payload.insert("message".to_string(), Value::from(message));
    payload.insert("info".to_string(), Value::from(INFO_URL));
    let payload = Value::Object(payload);
    tracing::error!(op = "error.wrap", err = %payload, "unexpected error");
}

/// Applies the status-sanitation rules shared by every entry path.
///
/// A claimed status survives only if it is an integer naming a valid HTTP
/// status; everything else is forced to 500. Absent statuses fall back to
/// the errno's default.
fn sanitize_status(code: Option<&Value>, errno: Option<u32>) -> StatusCode {
    match code {
        None => default_status(errno),
        Some(value) => value
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .and_then(|n| StatusCode::from_u16(n).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Default status when the raw error carried none.
///
/// Signature-family errnos (109-111) are 401 as a class; other catalog
/// entries use their table default; unknown errnos are 400.
fn default_status(errno: Option<u32>) -> StatusCode {
    let code = match errno {
        Some(109..=111) => 401,
        Some(errno) => ErrorKind::from_errno(errno).map_or(400, |kind| kind.http_status()),
        None => 400,
    };
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}
