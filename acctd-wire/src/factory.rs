//! Constructors for every canonical error kind.
//!
//! Each constructor takes only the variable fields relevant to its kind and
//! delegates to [`wrap`](crate::wrap::wrap), so status sanitization and
//! defaulting are identical no matter how an error enters the system.
//! Numeric and status defaults come exclusively from the catalog; callers
//! never supply an HTTP status.

use crate::catalog::ErrorKind;
use crate::wire::{RETRY_AFTER_FIELD, WireError};
use crate::wrap::{RawError, wrap};
use serde_json::{Map, Value};

/// Seeds a raw error from a catalog entry: errno, message template, and the
/// retry hint when the entry carries one.
fn seeded(kind: ErrorKind) -> RawError {
    let mut raw = RawError::new()
        .with_errno(kind.errno())
        .with_message(kind.message());
    if let Some(secs) = kind.retry_after() {
        raw = raw.with_extra(RETRY_AFTER_FIELD, secs);
    }
    raw
}

impl WireError {
    /// Account creation collided with an existing account (101).
    #[must_use]
    pub fn account_exists(email: impl Into<String>) -> Self {
        wrap(seeded(ErrorKind::AccountExists).with_extra("email", email.into()))
    }

    /// No account matches the given email (102).
    #[must_use]
    pub fn unknown_account(email: impl Into<String>) -> Self {
        wrap(seeded(ErrorKind::UnknownAccount).with_extra("email", email.into()))
    }

    /// Password verification failed for the account (103).
    #[must_use]
    pub fn incorrect_password(email: impl Into<String>) -> Self {
        wrap(seeded(ErrorKind::IncorrectPassword).with_extra("email", email.into()))
    }

    /// Operation requires a verified account (104).
    #[must_use]
    pub fn unverified_account() -> Self {
        wrap(seeded(ErrorKind::UnverifiedAccount))
    }

    /// Verification code mismatch (105); `details` is merged into the
    /// response for the caller's diagnostics.
    #[must_use]
    pub fn invalid_verification_code(details: Map<String, Value>) -> Self {
        let mut raw = seeded(ErrorKind::InvalidVerificationCode);
        raw.extra.extend(details);
        wrap(raw)
    }

    /// Request body was not parseable JSON (106).
    #[must_use]
    pub fn invalid_json() -> Self {
        wrap(seeded(ErrorKind::InvalidJson))
    }

    /// A request parameter failed validation (107).
    #[must_use]
    pub fn invalid_parameter(param: impl Into<String>) -> Self {
        wrap(seeded(ErrorKind::InvalidParameter).with_extra("param", param.into()))
    }

    /// A required request parameter was absent (108).
    #[must_use]
    pub fn missing_parameter(param: impl Into<String>) -> Self {
        wrap(seeded(ErrorKind::MissingParameter).with_extra("param", param.into()))
    }

    /// Request signature failed to validate (109). The upstream message is
    /// kept verbatim so clients can see what the signing layer rejected.
    #[must_use]
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        wrap(seeded(ErrorKind::InvalidSignature).with_message(message.into()))
    }

    /// Authentication token unknown or invalid (110).
    #[must_use]
    pub fn invalid_token() -> Self {
        wrap(seeded(ErrorKind::InvalidToken))
    }

    /// Request timestamp outside the allowed skew window (111). Reports the
    /// current server time, in epoch seconds, so clients can resynchronize.
    #[must_use]
    pub fn invalid_timestamp() -> Self {
        wrap(seeded(ErrorKind::InvalidTimestamp).with_extra(
            "serverTime",
            chrono::Utc::now().timestamp(),
        ))
    }

    /// Request had no content-length header (112).
    #[must_use]
    pub fn missing_content_length() -> Self {
        wrap(seeded(ErrorKind::MissingContentLength))
    }

    /// Request body exceeded the configured maximum (113).
    #[must_use]
    pub fn request_body_too_large() -> Self {
        wrap(seeded(ErrorKind::RequestBodyTooLarge))
    }

    /// Client is being throttled (114); carries the retry hint.
    #[must_use]
    pub fn too_many_requests() -> Self {
        wrap(seeded(ErrorKind::TooManyRequests))
    }

    /// Request nonce was rejected (115).
    #[must_use]
    pub fn invalid_nonce() -> Self {
        wrap(seeded(ErrorKind::InvalidNonce))
    }

    /// Backend dependency is down (201); carries the retry hint.
    #[must_use]
    pub fn service_unavailable() -> Self {
        wrap(seeded(ErrorKind::ServiceUnavailable))
    }

    /// Error the service could not classify (999). Goes through the
    /// unclassified path, so constructing one emits the log event.
    #[must_use]
    pub fn unexpected_error() -> Self {
        wrap(RawError::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statuses_come_from_catalog() {
        assert_eq!(WireError::account_exists("a@b.test").code, 400);
        assert_eq!(WireError::invalid_signature("Bad mac").code, 401);
        assert_eq!(WireError::invalid_token().code, 401);
        assert_eq!(WireError::invalid_timestamp().code, 401);
        assert_eq!(WireError::invalid_nonce().code, 401);
        assert_eq!(WireError::missing_content_length().code, 411);
        assert_eq!(WireError::request_body_too_large().code, 413);
        assert_eq!(WireError::too_many_requests().code, 429);
        assert_eq!(WireError::service_unavailable().code, 503);
    }

    #[test]
    fn test_email_kinds_carry_email() {
        for wire in [
            WireError::account_exists("user@restmail.net"),
            WireError::unknown_account("user@restmail.net"),
            WireError::incorrect_password("user@restmail.net"),
        ] {
            assert_eq!(wire.extra.get("email"), Some(&json!("user@restmail.net")));
        }
    }

    #[test]
    fn test_param_kinds_carry_param() {
        let wire = WireError::invalid_parameter("authPW");
        assert_eq!(wire.errno, 107);
        assert_eq!(wire.extra.get("param"), Some(&json!("authPW")));

        let wire = WireError::missing_parameter("sessionToken");
        assert_eq!(wire.errno, 108);
        assert_eq!(wire.extra.get("param"), Some(&json!("sessionToken")));
    }

    #[test]
    fn test_verification_code_merges_details() {
        let mut details = Map::new();
        details.insert("tries".to_string(), json!(3));
        let wire = WireError::invalid_verification_code(details);
        assert_eq!(wire.errno, 105);
        assert_eq!(wire.extra.get("tries"), Some(&json!(3)));
    }

    #[test]
    fn test_signature_keeps_caller_message() {
        let wire = WireError::invalid_signature("Bad mac");
        assert_eq!(wire.errno, 109);
        assert_eq!(wire.message, "Bad mac");
    }

    #[test]
    fn test_timestamp_reports_server_time() {
        let wire = WireError::invalid_timestamp();
        let server_time = wire
            .extra
            .get("serverTime")
            .and_then(Value::as_i64)
            .expect("serverTime present");
        let now = chrono::Utc::now().timestamp();
        assert!((now - server_time).abs() <= 2);
    }

    #[test]
    fn test_retry_hints_on_wire() {
        assert_eq!(WireError::too_many_requests().retry_after(), Some(30));
        assert_eq!(WireError::service_unavailable().retry_after(), Some(30));
        assert_eq!(WireError::invalid_token().retry_after(), None);
    }

    #[test]
    fn test_unexpected_error_degrades_to_unspecified() {
        let wire = WireError::unexpected_error();
        assert_eq!(wire.errno, 999);
        assert_eq!(wire.code, 400);
        assert_eq!(wire.message, "Unspecified error");
    }

    #[test]
    fn test_constructors_are_deterministic() {
        // Field-for-field identical apart from time-dependent payloads.
        assert_eq!(
            WireError::account_exists("a@b.test"),
            WireError::account_exists("a@b.test")
        );
        assert_eq!(WireError::too_many_requests(), WireError::too_many_requests());
    }
}
