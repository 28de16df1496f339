//! Crate error type
//!
//! Only genuinely caller-facing failures live here. Unknown registry keys
//! surface as `None` from [`crate::registry::Algorithm::resolve`] and
//! storage failures are contained inside [`crate::storage`], so the
//! remaining error surface is small.

/// Errors reported to the caller by the session API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An externally supplied algorithm key matched nothing in the registry
    #[error("unknown algorithm key '{0}'")]
    UnknownAlgorithm(String),

    /// A search target input could not be parsed as an integer; state is
    /// left unchanged
    #[error("invalid search target '{0}': expected an integer")]
    InvalidTarget(String),
}
