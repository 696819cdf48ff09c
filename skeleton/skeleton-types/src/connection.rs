//! The fixed anatomical adjacency graph.

use crate::landmark::*;

/// An unordered pair of landmark names forming a drawn line segment.
///
/// Connections are static: the adjacency graph is defined once in
/// [`CONNECTIONS`] and never mutated. Equality is order-insensitive:
///
/// ```
/// use skeleton_types::SkeletonConnection;
///
/// let a = SkeletonConnection::new("left_hip", "left_knee");
/// let b = SkeletonConnection::new("left_knee", "left_hip");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Eq)]
pub struct SkeletonConnection {
    /// First endpoint name.
    pub a: &'static str,
    /// Second endpoint name.
    pub b: &'static str,
}

impl SkeletonConnection {
    /// Create a connection between two landmarks.
    #[must_use]
    pub const fn new(a: &'static str, b: &'static str) -> Self {
        Self { a, b }
    }

    /// Returns `true` if this connection touches the given landmark.
    #[must_use]
    pub fn touches(&self, name: &str) -> bool {
        self.a == name || self.b == name
    }

    /// Returns `true` if this connection joins the two given landmarks,
    /// in either order.
    #[must_use]
    pub fn joins(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

impl PartialEq for SkeletonConnection {
    fn eq(&self, other: &Self) -> bool {
        self.joins(other.a, other.b)
    }
}

/// Shorthand for the table below.
const fn c(a: &'static str, b: &'static str) -> SkeletonConnection {
    SkeletonConnection::new(a, b)
}

/// The anatomical adjacency graph drawn by the renderer.
pub const CONNECTIONS: &[SkeletonConnection] = &[
    // Head and face
    c(HEAD_TOP, FOREHEAD),
    c(FOREHEAD, NOSE),
    c(NOSE, CHIN),
    c(CHIN, THROAT),
    c(THROAT, NECK),
    c(FOREHEAD, LEFT_TEMPLE),
    c(FOREHEAD, RIGHT_TEMPLE),
    c(LEFT_TEMPLE, LEFT_EAR),
    c(RIGHT_TEMPLE, RIGHT_EAR),
    c(NOSE, LEFT_EYE),
    c(NOSE, RIGHT_EYE),
    c(NOSE, LEFT_CHEEK),
    c(NOSE, RIGHT_CHEEK),
    c(LEFT_CHEEK, LEFT_JAW),
    c(RIGHT_CHEEK, RIGHT_JAW),
    // Spine
    c(NECK, UPPER_SPINE),
    c(UPPER_SPINE, MID_SPINE),
    c(MID_SPINE, LOWER_SPINE),
    c(LOWER_SPINE, PELVIS),
    c(PELVIS, TAILBONE),
    // Torso
    c(STERNUM, CHEST),
    c(CHEST, ABDOMEN),
    c(ABDOMEN, PELVIS),
    c(CHEST, LEFT_RIBS),
    c(CHEST, RIGHT_RIBS),
    // Shoulder girdle
    c(NECK, LEFT_CLAVICLE),
    c(NECK, RIGHT_CLAVICLE),
    c(LEFT_CLAVICLE, LEFT_SHOULDER),
    c(RIGHT_CLAVICLE, RIGHT_SHOULDER),
    c(LEFT_SHOULDER, LEFT_SHOULDER_BLADE),
    c(RIGHT_SHOULDER, RIGHT_SHOULDER_BLADE),
    // Arms
    c(LEFT_SHOULDER, LEFT_UPPER_ARM),
    c(LEFT_UPPER_ARM, LEFT_ELBOW),
    c(LEFT_ELBOW, LEFT_FOREARM),
    c(LEFT_FOREARM, LEFT_WRIST),
    c(RIGHT_SHOULDER, RIGHT_UPPER_ARM),
    c(RIGHT_UPPER_ARM, RIGHT_ELBOW),
    c(RIGHT_ELBOW, RIGHT_FOREARM),
    c(RIGHT_FOREARM, RIGHT_WRIST),
    // Left hand
    c(LEFT_WRIST, LEFT_PALM),
    c(LEFT_PALM, LEFT_THUMB_BASE),
    c(LEFT_THUMB_BASE, LEFT_THUMB_MID),
    c(LEFT_THUMB_MID, LEFT_THUMB_TIP),
    c(LEFT_PALM, LEFT_INDEX_BASE),
    c(LEFT_INDEX_BASE, LEFT_INDEX_MID),
    c(LEFT_INDEX_MID, LEFT_INDEX_TIP),
    c(LEFT_PALM, LEFT_MIDDLE_BASE),
    c(LEFT_MIDDLE_BASE, LEFT_MIDDLE_MID),
    c(LEFT_MIDDLE_MID, LEFT_MIDDLE_TIP),
    c(LEFT_PALM, LEFT_RING_BASE),
    c(LEFT_RING_BASE, LEFT_RING_MID),
    c(LEFT_RING_MID, LEFT_RING_TIP),
    c(LEFT_PALM, LEFT_PINKY_BASE),
    c(LEFT_PINKY_BASE, LEFT_PINKY_MID),
    c(LEFT_PINKY_MID, LEFT_PINKY_TIP),
    // Right hand
    c(RIGHT_WRIST, RIGHT_PALM),
    c(RIGHT_PALM, RIGHT_THUMB_BASE),
    c(RIGHT_THUMB_BASE, RIGHT_THUMB_MID),
    c(RIGHT_THUMB_MID, RIGHT_THUMB_TIP),
    c(RIGHT_PALM, RIGHT_INDEX_BASE),
    c(RIGHT_INDEX_BASE, RIGHT_INDEX_MID),
    c(RIGHT_INDEX_MID, RIGHT_INDEX_TIP),
    c(RIGHT_PALM, RIGHT_MIDDLE_BASE),
    c(RIGHT_MIDDLE_BASE, RIGHT_MIDDLE_MID),
    c(RIGHT_MIDDLE_MID, RIGHT_MIDDLE_TIP),
    c(RIGHT_PALM, RIGHT_RING_BASE),
    c(RIGHT_RING_BASE, RIGHT_RING_MID),
    c(RIGHT_RING_MID, RIGHT_RING_TIP),
    c(RIGHT_PALM, RIGHT_PINKY_BASE),
    c(RIGHT_PINKY_BASE, RIGHT_PINKY_MID),
    c(RIGHT_PINKY_MID, RIGHT_PINKY_TIP),
    // Hips and legs
    c(PELVIS, LEFT_HIP),
    c(PELVIS, RIGHT_HIP),
    c(LEFT_HIP, LEFT_THIGH),
    c(LEFT_THIGH, LEFT_KNEE),
    c(LEFT_KNEE, LEFT_SHIN),
    c(LEFT_SHIN, LEFT_ANKLE),
    c(RIGHT_HIP, RIGHT_THIGH),
    c(RIGHT_THIGH, RIGHT_KNEE),
    c(RIGHT_KNEE, RIGHT_SHIN),
    c(RIGHT_SHIN, RIGHT_ANKLE),
    // Feet
    c(LEFT_ANKLE, LEFT_HEEL),
    c(LEFT_HEEL, LEFT_BALL),
    c(LEFT_BALL, LEFT_BIG_TOE),
    c(LEFT_BALL, LEFT_LITTLE_TOE),
    c(RIGHT_ANKLE, RIGHT_HEEL),
    c(RIGHT_HEEL, RIGHT_BALL),
    c(RIGHT_BALL, RIGHT_BIG_TOE),
    c(RIGHT_BALL, RIGHT_LITTLE_TOE),
];
