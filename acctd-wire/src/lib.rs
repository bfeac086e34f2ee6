//! Wire-format error contract for the acctd authentication API.
//!
//! This crate is the terminal error-reporting stage of the service: it
//! converts heterogeneous, loosely-typed failures — domain errors from
//! account and token handling, rejections from the request-signing layer,
//! transport failures from the HTTP framework, or values with no
//! recognizable structure at all — into the single stable JSON error shape
//! clients depend on.
//!
//! The entry point is [`wrap`]: hand it any raw error-like value and it
//! returns a [`WireError`] with a defined errno, a valid HTTP status, a
//! non-empty message, and the response-format documentation reference. It
//! never fails; inputs nothing recognizes degrade to the generic errno-999
//! response after one structured log event.
//!
//! # Modules
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | [`catalog`]  | Fixed table of error kinds, errnos, and defaults      |
//! | [`classify`] | Heuristics mapping unlabeled raw errors to the catalog|
//! | `factory`    | Per-kind constructors on [`WireError`]                |
//! | [`wrap`]     | The normalizing entry point and [`RawError`] input    |
//! | [`wire`]     | The response type and its HTTP rendering              |
//!
//! Everything is synchronous and stateless per call; the catalog is
//! compile-time data, so concurrent use needs no synchronization.

pub mod catalog;
pub mod classify;
mod factory;
pub mod wire;
pub mod wrap;

pub use catalog::{Definition, ErrorClass, ErrorKind, RETRY_AFTER_SECS};
pub use classify::classify;
pub use wire::{INFO_URL, WireError};
pub use wrap::{RawError, wrap};
