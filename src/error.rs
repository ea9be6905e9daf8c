//! Error types surfaced by the library.

use thiserror::Error;

/// Errors produced while constructing a cache.
///
/// Runtime operations never fail: `get` answers misses through `Option`,
/// `put` and `clear` always succeed. The only fallible surface is
/// configuration, checked synchronously before an instance exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A constructor parameter violated its bound.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which bound was violated, e.g. `"size should be > 0"`.
        reason: &'static str,
    },
}

impl CacheError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        CacheError::InvalidConfiguration { reason }
    }
}
