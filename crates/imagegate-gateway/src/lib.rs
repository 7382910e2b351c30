//! imagegate gateway library entry.
//!
//! This crate wires config loading, the compiled policy store, the
//! authorization interceptor, decision metrics, and the HTTP surface into a
//! cohesive gateway stack. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod intercept;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
