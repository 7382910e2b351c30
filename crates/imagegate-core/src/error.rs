//! Shared error type across imagegate crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ImageGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ImageGateError {
    /// A configured pattern failed to compile. Startup must abort; the
    /// gateway never serves with a partially valid policy.
    #[error("invalid {list} pattern at index {index}: {pattern:?}: {source}")]
    InvalidPattern {
        /// Which list the pattern came from ("whitelist" or "blacklist").
        list: &'static str,
        /// Zero-based position within the configured list.
        index: usize,
        /// Original pattern text.
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("config error: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}
