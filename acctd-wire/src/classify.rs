//! Heuristic classification of unlabeled raw errors.
//!
//! The auth-protocol layer and the HTTP framework report failures without
//! an errno; the only signals available are the claimed status and the
//! message text. Classification maps those onto a canonical catalog entry.
//! The rules are deliberately narrow: only the 400/401 families carry
//! messages stable enough to match on, and the match strings track the
//! upstream layers verbatim.

use crate::wire::WireError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Body-size rejection emitted by the HTTP framework. Case-sensitive,
/// anchored: the framework appends the limit after this prefix.
static PAYLOAD_TOO_LARGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Payload (content length|size) greater than maximum allowed")
        .expect("payload-size pattern is valid")
});

/// Infers a canonical error from a status/message pair.
///
/// Returns the fully-populated canonical payload, or `None` when nothing
/// matches and the caller should fall back to the unclassified path. Only
/// invoked for raw errors with no explicit errno.
pub fn classify(code: Option<&Value>, message: &str) -> Option<WireError> {
    match code?.as_u64()? {
        // 401 is how the auth-protocol layer signals credential and
        // signature problems; its message text is the discriminator.
        401 => Some(match message {
            "Unknown credentials" | "Invalid credentials" => WireError::invalid_token(),
            "Stale timestamp" => WireError::invalid_timestamp(),
            "Invalid nonce" => WireError::invalid_nonce(),
            // Anything else in the 401 family is a signature failure; keep
            // the original text rather than the generic template.
            other => WireError::invalid_signature(other),
        }),
        400 if PAYLOAD_TOO_LARGE.is_match(message) => Some(WireError::request_body_too_large()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify_status(code: u64, message: &str) -> Option<WireError> {
        classify(Some(&json!(code)), message)
    }

    #[test]
    fn test_credential_messages_map_to_invalid_token() {
        let wire = classify_status(401, "Unknown credentials").expect("classified");
        assert_eq!(wire.errno, 110);
        assert_eq!(wire.code, 401);

        let wire = classify_status(401, "Invalid credentials").expect("classified");
        assert_eq!(wire.errno, 110);
    }

    #[test]
    fn test_stale_timestamp_maps_to_invalid_timestamp() {
        let wire = classify_status(401, "Stale timestamp").expect("classified");
        assert_eq!(wire.errno, 111);
        assert_eq!(wire.code, 401);
        assert!(wire.extra.contains_key("serverTime"));
    }

    #[test]
    fn test_invalid_nonce_maps_to_invalid_nonce() {
        let wire = classify_status(401, "Invalid nonce").expect("classified");
        assert_eq!(wire.errno, 115);
        assert_eq!(wire.code, 401);
    }

    #[test]
    fn test_unmatched_401_falls_back_to_signature() {
        let wire = classify_status(401, "Bad mac").expect("classified");
        assert_eq!(wire.errno, 109);
        assert_eq!(wire.code, 401);
        assert_eq!(wire.message, "Bad mac");
    }

    #[test]
    fn test_matching_is_exact() {
        // Near-misses take the signature fallback, not the specific kind.
        let wire = classify_status(401, "unknown credentials").expect("classified");
        assert_eq!(wire.errno, 109);
        let wire = classify_status(401, "Stale timestamp ").expect("classified");
        assert_eq!(wire.errno, 109);
    }

    #[test]
    fn test_payload_size_messages_map_to_body_too_large() {
        for message in [
            "Payload content length greater than maximum allowed: 2048",
            "Payload size greater than maximum allowed: 1048576",
            "Payload content length greater than maximum allowed",
        ] {
            let wire = classify_status(400, message).expect("classified");
            assert_eq!(wire.errno, 113);
            assert_eq!(wire.code, 413);
        }
    }

    #[test]
    fn test_payload_pattern_is_anchored_and_case_sensitive() {
        assert!(classify_status(400, "Oops: Payload size greater than maximum allowed").is_none());
        assert!(classify_status(400, "payload size greater than maximum allowed").is_none());
        assert!(classify_status(400, "Payload length greater than maximum allowed").is_none());
    }

    #[test]
    fn test_other_codes_are_not_classified() {
        assert!(classify_status(400, "Unknown credentials").is_none());
        assert!(classify_status(403, "Unknown credentials").is_none());
        assert!(classify_status(500, "Stale timestamp").is_none());
        assert!(classify(None, "Unknown credentials").is_none());
        assert!(classify(Some(&json!("401")), "Unknown credentials").is_none());
    }
}
