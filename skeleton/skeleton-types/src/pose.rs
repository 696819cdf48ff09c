//! Owned keypoint sets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Keypoint3D, Result};

/// An owned list of keypoints forming one skeleton frame.
///
/// `Pose` is the common currency between the procedural generator, the
/// camera-based pose collaborator, and the region hit tester. Keypoint
/// order is generation order; [`get`](Self::get) performs name lookup.
///
/// A pose is valid for exactly one rendering frame: the generator
/// produces a fresh one on every animation tick.
///
/// # Example
///
/// ```
/// use skeleton_types::{landmark, Keypoint3D, Pose};
///
/// let pose = Pose::new(vec![
///     Keypoint3D::procedural(landmark::NOSE, 200.0, 80.0, 0.0),
/// ]);
/// assert_eq!(pose.len(), 1);
/// assert!(pose.get(landmark::NOSE).is_some());
/// assert!(pose.get(landmark::PELVIS).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    keypoints: Vec<Keypoint3D>,
}

impl Pose {
    /// Create a pose from a keypoint list.
    #[must_use]
    pub fn new(keypoints: Vec<Keypoint3D>) -> Self {
        Self { keypoints }
    }

    /// Build a pose from an external tracker's `(name, x, y, score)`
    /// tuples, validating each keypoint at the boundary.
    ///
    /// # Errors
    ///
    /// Returns the first keypoint validation failure.
    pub fn from_tracked<I, S>(tuples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64, f64, f64)>,
        S: Into<String>,
    {
        let keypoints = tuples
            .into_iter()
            .map(|(name, x, y, score)| Keypoint3D::tracked(name, x, y, score))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { keypoints })
    }

    /// Number of keypoints in this pose.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Returns `true` if the pose has no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Look up a keypoint by landmark name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Keypoint3D> {
        self.keypoints.iter().find(|kp| kp.name == name)
    }

    /// All keypoints in generation order.
    #[must_use]
    pub fn keypoints(&self) -> &[Keypoint3D] {
        &self.keypoints
    }

    /// Iterate over the keypoints.
    pub fn iter(&self) -> std::slice::Iter<'_, Keypoint3D> {
        self.keypoints.iter()
    }

    /// Map every keypoint through `f`, producing a new pose.
    ///
    /// Used by the geometry engine to project a whole frame through a
    /// rotation in one pass.
    #[must_use]
    pub fn map(&self, f: impl FnMut(&Keypoint3D) -> Keypoint3D) -> Self {
        Self {
            keypoints: self.keypoints.iter().map(f).collect(),
        }
    }
}

impl IntoIterator for Pose {
    type Item = Keypoint3D;
    type IntoIter = std::vec::IntoIter<Keypoint3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.keypoints.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pose {
    type Item = &'a Keypoint3D;
    type IntoIter = std::slice::Iter<'a, Keypoint3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.keypoints.iter()
    }
}
