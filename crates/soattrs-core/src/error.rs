//! Error type for malformed origin attribute suffixes.

use thiserror::Error;

/// A suffix was rejected by the attribute grammar.
///
/// There is a single failure kind at this layer ("malformed suffix"); the
/// variant only records which rule tripped so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuffixError {
    /// Non-empty suffix that does not start with `^`.
    #[error("malformed suffix: expected leading '^', got {0:?}")]
    MissingMarker(String),

    /// A numeric attribute whose value is not a decimal `u32`.
    #[error("malformed suffix: {key}={value:?} is not a valid unsigned 32-bit integer")]
    InvalidNumber { key: String, value: String },

    /// A flag attribute whose value is anything but `1`.
    #[error("malformed suffix: {key}={value:?} is not a valid flag (expected \"1\")")]
    InvalidFlag { key: String, value: String },

    /// Key not known to either attribute set, under [`UnknownKeyPolicy::Reject`].
    ///
    /// [`UnknownKeyPolicy::Reject`]: crate::suffix::UnknownKeyPolicy::Reject
    #[error("malformed suffix: unknown attribute {key:?}")]
    UnknownKey { key: String },
}
