//! Validated pain intensity and its render color scale.

use serde::{Deserialize, Serialize};

use crate::{Result, StoreError};

/// Pain severity on the standard 0-10 scale.
///
/// Zero is an explicit "no pain" rating, different from a keypoint
/// having no entry at all. Construction is validated; the inner value
/// can never exceed 10.
///
/// # Example
///
/// ```
/// use annotate_store::PainLevel;
///
/// let severe = PainLevel::try_from(9).unwrap();
/// assert_eq!(severe.value(), 9);
/// assert!(PainLevel::try_from(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PainLevel(u8);

impl PainLevel {
    /// Maximum severity.
    pub const MAX: Self = Self(10);

    /// Explicit "no pain" rating.
    pub const NONE: Self = Self(0);

    /// Create a level, rejecting values above 10.
    pub fn new(value: u8) -> Result<Self> {
        if value > 10 {
            return Err(StoreError::InvalidLevel(value));
        }
        Ok(Self(value))
    }

    /// The raw severity value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PainLevel {
    type Error = StoreError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PainLevel> for u8 {
    fn from(level: PainLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for PainLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stroke color for a pain level: green at 0 trending through orange to
/// red at 10.
///
/// The scale is `r = min(255, 50 + level*20)`, `g = max(0, 255 - level*25)`,
/// `b = 0`.
///
/// # Example
///
/// ```
/// use annotate_store::{pain_color, PainLevel};
///
/// assert_eq!(pain_color(PainLevel::NONE), [50, 255, 0]);
/// assert_eq!(pain_color(PainLevel::MAX), [250, 5, 0]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pain_color(level: PainLevel) -> [u8; 3] {
    let level = i32::from(level.value());
    let r = (50 + level * 20).min(255);
    let g = (255 - level * 25).max(0);
    [r as u8, g as u8, 0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_validation() {
        assert!(PainLevel::new(0).is_ok());
        assert!(PainLevel::new(10).is_ok());
        assert_eq!(PainLevel::new(11), Err(StoreError::InvalidLevel(11)));
        assert_eq!(PainLevel::new(255), Err(StoreError::InvalidLevel(255)));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn serde_round_trip_validates() {
        let level = PainLevel::new(6).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, "6");
        let back: PainLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);

        // out-of-range values fail to deserialize
        let bad: std::result::Result<PainLevel, _> = serde_json::from_str("12");
        assert!(bad.is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn color_scale_endpoints_and_monotonicity() {
        assert_eq!(pain_color(PainLevel::NONE), [50, 255, 0]);
        assert_eq!(pain_color(PainLevel::MAX), [250, 5, 0]);

        // red rises and green falls with severity
        for v in 1..=10u8 {
            let lo = pain_color(PainLevel::new(v - 1).unwrap());
            let hi = pain_color(PainLevel::new(v).unwrap());
            assert!(hi[0] >= lo[0]);
            assert!(hi[1] <= lo[1]);
            assert_eq!(hi[2], 0);
        }
    }
}
