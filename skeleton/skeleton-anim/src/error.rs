//! Error types for animation and projection.

use thiserror::Error;

/// Convenience alias for animation operations.
pub type Result<T> = std::result::Result<T, AnimError>;

/// Errors that can occur when generating or projecting a skeleton.
///
/// The geometry itself is total over finite numbers; these errors only
/// fire on malformed input, which fails fast instead of propagating
/// `NaN` through a frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimError {
    /// Walk phase is `NaN` or infinite.
    #[error("non-finite walk phase: {0}")]
    NonFinitePhase(f64),

    /// A rotation angle is `NaN` or infinite.
    #[error("non-finite rotation angle: {0}")]
    NonFiniteRotation(f64),

    /// Viewport dimensions must be positive and finite.
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

impl AnimError {
    /// Create an invalid viewport error.
    #[must_use]
    pub const fn invalid_viewport(width: f64, height: f64) -> Self {
        Self::InvalidViewport { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AnimError::NonFinitePhase(f64::NAN);
        assert!(err.to_string().contains("walk phase"));

        let err = AnimError::invalid_viewport(0.0, 640.0);
        assert!(err.to_string().contains("0x640"));
    }
}
