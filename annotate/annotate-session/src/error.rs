//! Session error type.

use thiserror::Error;

/// Errors surfaced by the assessment session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Skeleton generation or projection failed.
    #[error(transparent)]
    Anim(#[from] skeleton_anim::AnimError),

    /// A pain level was out of range.
    #[error(transparent)]
    Store(#[from] annotate_store::StoreError),

    /// An intensity was committed with no drawn region waiting for one.
    #[error("no drawn region is awaiting an intensity choice")]
    NoPendingRegion,
}

impl SessionError {
    /// Returns `true` if the error is the missing-pending-region case.
    #[must_use]
    pub fn is_no_pending_region(&self) -> bool {
        matches!(self, Self::NoPendingRegion)
    }
}

/// Convenience alias for session results.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_matches_variant() {
        assert!(SessionError::NoPendingRegion.is_no_pending_region());
        let wrapped: SessionError = annotate_store::StoreError::InvalidLevel(12).into();
        assert!(!wrapped.is_no_pending_region());
    }

    #[test]
    fn display_is_stable() {
        assert_eq!(
            SessionError::NoPendingRegion.to_string(),
            "no drawn region is awaiting an intensity choice"
        );
    }
}
