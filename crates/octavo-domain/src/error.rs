//! Error types for the octavo domain

use thiserror::Error;

/// Errors signaled by the domain core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Constructor input was rejected (blank title/author, negative year).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Indexed child access outside `[0, len)`.
    #[error("index {index} out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// `try_next` was called on a finished iterator.
    #[error("iterator exhausted")]
    ExhaustedIterator,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
