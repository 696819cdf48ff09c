//! Error types for skeleton data validation.

use thiserror::Error;

/// Convenience alias for skeleton operations.
pub type Result<T> = std::result::Result<T, SkeletonError>;

/// Errors that can occur when constructing skeleton data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkeletonError {
    /// Confidence score is outside `[0, 1]` or not finite.
    #[error("invalid confidence score {0}: must be finite and in [0, 1]")]
    InvalidScore(f64),

    /// A coordinate is `NaN` or infinite.
    #[error("non-finite coordinate for landmark `{name}`: {value}")]
    NonFiniteCoordinate {
        /// Landmark the bad coordinate belongs to.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// A landmark name is not part of the canonical set.
    ///
    /// Only raised by operations that explicitly require canonical names;
    /// general pose input accepts arbitrary names.
    #[error("unknown landmark `{0}`")]
    UnknownLandmark(String),
}

impl SkeletonError {
    /// Create a non-finite coordinate error.
    #[must_use]
    pub fn non_finite(name: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteCoordinate {
            name: name.into(),
            value,
        }
    }

    /// Check if this is an invalid score error.
    #[must_use]
    pub fn is_invalid_score(&self) -> bool {
        matches!(self, Self::InvalidScore(_))
    }
}
