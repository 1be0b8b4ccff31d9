//! Error types for htmltotext.
//!
//! Malformed markup and undecodable bytes are never errors: they are
//! absorbed during parsing and surfaced through the flags on
//! [`ParsedPage`](crate::ParsedPage). Only boundary-contract violations
//! escalate through this type.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller supplied an encoding label that is not a known
    /// WHATWG encoding name or alias.
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
