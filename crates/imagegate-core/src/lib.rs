//! imagegate core: policy primitives, decision types, and the authorization
//! wire contract.
//!
//! This crate defines the compiled policy store, the decision/reason surface,
//! and the authorization-plugin JSON shapes shared by the gateway and tests.
//! It intentionally carries no transport or runtime dependencies so the
//! decision logic can be exercised without a running daemon.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ImageGateError`/`Result` so the
//! gateway does not crash on malformed input or bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;
pub mod policy;
pub mod protocol;

/// Shared result type.
pub use error::{ImageGateError, Result};

pub use decision::{Decision, ReasonCode, Verdict};
pub use policy::PolicyStore;
