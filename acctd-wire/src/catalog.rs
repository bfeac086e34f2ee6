//! Canonical catalog of client-visible error kinds.
//!
//! Every error the API can return to a client is enumerated here as an
//! immutable triple: a stable numeric `errno`, a default HTTP status, and a
//! message template. The errno is the client-facing contract — existing
//! numbers are never reassigned, and new kinds always get new numbers.
//!
//! # Errno Assignments
//!
//! | Range        | Class          | Description                           |
//! |--------------|----------------|---------------------------------------|
//! | 101-108      | Request        | Malformed or unacceptable requests    |
//! | 109-111, 115 | Auth           | Signature and credential failures     |
//! | 112-113      | Transport      | Content-length and body-size limits   |
//! | 114          | Rate limit     | Request throttling                    |
//! | 201          | Service health | Backend availability                  |
//! | 999          | Unclassified   | Anything the service cannot identify  |
//!
//! The table is established at compile time and never mutated; concurrent
//! readers need no synchronization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds a throttled or unavailable response asks the client to wait.
///
/// Part of the wire contract for errnos 114 and 201; fixed, not tunable.
pub const RETRY_AFTER_SECS: u64 = 30;

/// Every error kind the API reports, keyed by stable errno.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Attempt to create an account that already exists (101)
    AccountExists,
    /// Account not found (102)
    UnknownAccount,
    /// Password did not match the stored verifier (103)
    IncorrectPassword,
    /// Operation requires a verified account (104)
    UnverifiedAccount,
    /// Verification code did not match (105)
    InvalidVerificationCode,
    /// Request body was not parseable JSON (106)
    InvalidJson,
    /// A request parameter failed validation (107)
    InvalidParameter,
    /// A required request parameter was absent (108)
    MissingParameter,
    /// Request signature did not validate (109)
    InvalidSignature,
    /// Authentication token unknown or invalid (110)
    InvalidToken,
    /// Request timestamp outside the allowed skew window (111)
    InvalidTimestamp,
    /// Request had no content-length header (112)
    MissingContentLength,
    /// Request body exceeded the configured maximum (113)
    RequestBodyTooLarge,
    /// Client is being throttled (114)
    TooManyRequests,
    /// Request nonce was rejected (115)
    InvalidNonce,
    /// Backend dependency is down (201)
    ServiceUnavailable,
    /// Error the service could not classify (999)
    Unspecified,
}

impl ErrorKind {
    /// Returns the stable client-visible errno.
    #[must_use]
    pub const fn errno(&self) -> u32 {
        match self {
            Self::AccountExists => 101,
            Self::UnknownAccount => 102,
            Self::IncorrectPassword => 103,
            Self::UnverifiedAccount => 104,
            Self::InvalidVerificationCode => 105,
            Self::InvalidJson => 106,
            Self::InvalidParameter => 107,
            Self::MissingParameter => 108,
            Self::InvalidSignature => 109,
            Self::InvalidToken => 110,
            Self::InvalidTimestamp => 111,
            Self::MissingContentLength => 112,
            Self::RequestBodyTooLarge => 113,
            Self::TooManyRequests => 114,
            Self::InvalidNonce => 115,
            Self::ServiceUnavailable => 201,
            Self::Unspecified => 999,
        }
    }

    /// Returns the default HTTP status for this kind.
    ///
    /// The wrapper may still honor an explicit status supplied by the
    /// raw error; this is the value used when none is present.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::AccountExists
            | Self::UnknownAccount
            | Self::IncorrectPassword
            | Self::UnverifiedAccount
            | Self::InvalidVerificationCode
            | Self::InvalidJson
            | Self::InvalidParameter
            | Self::MissingParameter
            | Self::Unspecified => 400,
            Self::InvalidSignature
            | Self::InvalidToken
            | Self::InvalidTimestamp
            | Self::InvalidNonce => 401,
            Self::MissingContentLength => 411,
            Self::RequestBodyTooLarge => 413,
            Self::TooManyRequests => 429,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Returns the message template for this kind.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AccountExists => "Account already exists",
            Self::UnknownAccount => "Unknown account",
            Self::IncorrectPassword => "Incorrect password",
            Self::UnverifiedAccount => "Unverified account",
            Self::InvalidVerificationCode => "Invalid verification code",
            Self::InvalidJson => "Invalid JSON in request body",
            Self::InvalidParameter => "Invalid parameter in request body",
            Self::MissingParameter => "Missing parameter in request body",
            Self::InvalidSignature => "Invalid request signature",
            Self::InvalidToken => "Invalid authentication token",
            Self::InvalidTimestamp => "Invalid timestamp in request signature",
            Self::MissingContentLength => "Missing content-length header",
            Self::RequestBodyTooLarge => "Request body too large",
            Self::TooManyRequests => "Client has sent too many requests",
            Self::InvalidNonce => "Invalid nonce in request signature",
            Self::ServiceUnavailable => "Service unavailable",
            Self::Unspecified => "Unspecified error",
        }
    }

    /// Returns the retry hint in seconds, for kinds that carry one.
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::TooManyRequests | Self::ServiceUnavailable => Some(RETRY_AFTER_SECS),
            _ => None,
        }
    }

    /// Returns the error class this kind belongs to.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self.errno() {
            101..=108 => ErrorClass::Request,
            109..=111 | 115 => ErrorClass::Auth,
            112..=113 => ErrorClass::Transport,
            114 => ErrorClass::RateLimit,
            201 => ErrorClass::ServiceHealth,
            _ => ErrorClass::Unclassified,
        }
    }

    /// Looks up a kind by its errno.
    ///
    /// Returns `None` for numbers the catalog does not define; unknown
    /// errnos supplied by callers pass through the wrapper untouched.
    #[must_use]
    pub fn from_errno(errno: u32) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.errno() == errno)
    }

    /// Returns the full definition triple for this kind.
    #[must_use]
    pub const fn definition(&self) -> Definition {
        Definition {
            errno: self.errno(),
            http_status: self.http_status(),
            message: self.message(),
        }
    }

    /// Returns all catalog entries.
    #[must_use]
    pub const fn all() -> &'static [ErrorKind] {
        &[
            Self::AccountExists,
            Self::UnknownAccount,
            Self::IncorrectPassword,
            Self::UnverifiedAccount,
            Self::InvalidVerificationCode,
            Self::InvalidJson,
            Self::InvalidParameter,
            Self::MissingParameter,
            Self::InvalidSignature,
            Self::InvalidToken,
            Self::InvalidTimestamp,
            Self::MissingContentLength,
            Self::RequestBodyTooLarge,
            Self::TooManyRequests,
            Self::InvalidNonce,
            Self::ServiceUnavailable,
            Self::Unspecified,
        ]
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errno {}: {}", self.errno(), self.message())
    }
}

/// Coarse grouping of error kinds, used for reporting and docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Malformed or unacceptable requests (101-108)
    Request,
    /// Signature and credential failures (109-111, 115)
    Auth,
    /// Content-length and body-size limits (112-113)
    Transport,
    /// Request throttling (114)
    RateLimit,
    /// Backend availability (201)
    ServiceHealth,
    /// Anything the service cannot identify (999)
    Unclassified,
}

impl ErrorClass {
    /// Returns a human-readable name for the class.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Auth => "Authentication",
            Self::Transport => "Transport",
            Self::RateLimit => "Rate limit",
            Self::ServiceHealth => "Service health",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable definition triple for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// Stable client-visible errno.
    pub errno: u32,
    /// Default HTTP status.
    pub http_status: u16,
    /// Message template.
    pub message: &'static str,
}
