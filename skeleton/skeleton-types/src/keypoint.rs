//! Single keypoint type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, SkeletonError};

/// A named anatomical landmark position.
///
/// The `x`/`y` components of [`position`](Self::position) are 2D screen
/// coordinates; `z` is a depth offset used only for rotation and
/// depth-based shading. `score` is a confidence in `[0, 1]`, always
/// `1.0` for procedurally generated skeletons, and whatever the tracker
/// reported for camera-derived poses.
///
/// Keypoints are regenerated every animation tick and never persisted;
/// only the pain annotation store outlives a frame.
///
/// # Example
///
/// ```
/// use skeleton_types::{landmark, Keypoint3D};
///
/// let kp = Keypoint3D::procedural(landmark::NOSE, 200.0, 80.0, -2.0);
/// assert_eq!(kp.name, "nose");
/// assert!((kp.score - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keypoint3D {
    /// Landmark name, unique within a pose.
    pub name: String,
    /// Position: `x`/`y` in screen units, `z` as depth offset.
    pub position: Point3<f64>,
    /// Confidence score in `[0, 1]`.
    pub score: f64,
}

impl Keypoint3D {
    /// Create a procedural keypoint with full confidence.
    #[must_use]
    pub fn procedural(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            position: Point3::new(x, y, z),
            score: 1.0,
        }
    }

    /// Create a keypoint from an external pose source, validating the score.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::InvalidScore`] if `score` is not finite or
    /// outside `[0, 1]`, and [`SkeletonError::NonFiniteCoordinate`] for
    /// `NaN`/infinite coordinates.
    pub fn tracked(name: impl Into<String>, x: f64, y: f64, score: f64) -> Result<Self> {
        let name = name.into();
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(SkeletonError::InvalidScore(score));
        }
        for value in [x, y] {
            if !value.is_finite() {
                return Err(SkeletonError::non_finite(name.as_str(), value));
            }
        }
        Ok(Self {
            name,
            position: Point3::new(x, y, 0.0),
            score,
        })
    }

    /// Screen-space X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Screen-space Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Depth offset.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Returns a copy with a different position, keeping name and score.
    #[must_use]
    pub fn at(&self, position: Point3<f64>) -> Self {
        Self {
            name: self.name.clone(),
            position,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark;

    #[test]
    fn procedural_keypoint_has_full_score() {
        let kp = Keypoint3D::procedural(landmark::LEFT_KNEE, 10.0, 20.0, 3.0);
        assert_eq!(kp.name, landmark::LEFT_KNEE);
        assert!((kp.score - 1.0).abs() < f64::EPSILON);
        assert!((kp.z() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tracked_keypoint_rejects_bad_score() {
        assert!(Keypoint3D::tracked("nose", 1.0, 2.0, 1.5).is_err());
        assert!(Keypoint3D::tracked("nose", 1.0, 2.0, -0.1).is_err());
        assert!(Keypoint3D::tracked("nose", 1.0, 2.0, f64::NAN).is_err());
        assert!(Keypoint3D::tracked("nose", 1.0, 2.0, 0.8).is_ok());
    }

    #[test]
    fn tracked_keypoint_rejects_non_finite_coords() {
        let err = Keypoint3D::tracked("nose", f64::INFINITY, 2.0, 0.5);
        assert!(matches!(
            err,
            Err(SkeletonError::NonFiniteCoordinate { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn serde_round_trip() {
        let kp = Keypoint3D::procedural(landmark::NOSE, 1.0, 2.0, 3.0);
        let json = serde_json::to_string(&kp).unwrap();
        let back: Keypoint3D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kp);
    }

    #[test]
    fn at_preserves_name_and_score() {
        let kp = Keypoint3D::procedural(landmark::NOSE, 1.0, 2.0, 3.0);
        let moved = kp.at(Point3::new(9.0, 8.0, 7.0));
        assert_eq!(moved.name, kp.name);
        assert!((moved.score - kp.score).abs() < f64::EPSILON);
        assert!((moved.x() - 9.0).abs() < f64::EPSILON);
    }
}
