//! Error types for stroke handling.

use thiserror::Error;

/// Convenience alias for stroke operations.
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors that can occur while assembling a stroke.
///
/// Degenerate geometry (too few points, collinear loops) deliberately
/// does **not** appear here: those conditions degrade to empty results
/// in the capture and hit-testing layers. These variants cover genuine
/// misuse of the types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// A coordinate is `NaN` or infinite.
    #[error("non-finite coordinate: {0}")]
    NonFiniteCoordinate(f64),

    /// A pain level outside `[0, 10]` was attached to a path.
    #[error("pain level {0} is outside [0, 10]")]
    PainLevelOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::NonFiniteCoordinate(f64::NAN);
        assert!(err.to_string().contains("non-finite"));

        let err = PathError::PainLevelOutOfRange(11);
        assert!(err.to_string().contains("11"));
    }
}
