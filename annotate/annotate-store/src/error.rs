//! Error types for the annotation store.

use thiserror::Error;

/// Convenience alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when working with pain annotations.
///
/// Persistence failures never appear here: the store logs and swallows
/// them, and the in-memory state stays authoritative.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Pain level outside the valid `[0, 10]` range.
    #[error("pain level {0} is outside [0, 10]")]
    InvalidLevel(u8),
}
