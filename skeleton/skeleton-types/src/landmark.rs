//! Canonical anatomical landmark names.
//!
//! These are the names produced by the procedural skeleton generator and
//! keyed on by the pain annotation store. The set spans head, spine,
//! torso, arms, hands (per-finger joints), legs, and feet: 90 landmarks
//! in total.
//!
//! Names are plain snake_case strings rather than an enum so that external
//! pose sources can introduce their own landmarks without this crate
//! gatekeeping them; [`is_canonical`] distinguishes the two when needed.

// Head and face.
/// Crown of the head.
pub const HEAD_TOP: &str = "head_top";
/// Center of the forehead.
pub const FOREHEAD: &str = "forehead";
/// Tip of the nose.
pub const NOSE: &str = "nose";
/// Point of the chin.
pub const CHIN: &str = "chin";
/// Left eye.
pub const LEFT_EYE: &str = "left_eye";
/// Right eye.
pub const RIGHT_EYE: &str = "right_eye";
/// Left ear.
pub const LEFT_EAR: &str = "left_ear";
/// Right ear.
pub const RIGHT_EAR: &str = "right_ear";
/// Left temple.
pub const LEFT_TEMPLE: &str = "left_temple";
/// Right temple.
pub const RIGHT_TEMPLE: &str = "right_temple";
/// Left cheek.
pub const LEFT_CHEEK: &str = "left_cheek";
/// Right cheek.
pub const RIGHT_CHEEK: &str = "right_cheek";
/// Left jaw corner.
pub const LEFT_JAW: &str = "left_jaw";
/// Right jaw corner.
pub const RIGHT_JAW: &str = "right_jaw";
/// Front of the throat.
pub const THROAT: &str = "throat";

// Neck and spine.
/// Base of the neck.
pub const NECK: &str = "neck";
/// Upper thoracic spine.
pub const UPPER_SPINE: &str = "upper_spine";
/// Mid thoracic spine.
pub const MID_SPINE: &str = "mid_spine";
/// Lumbar spine.
pub const LOWER_SPINE: &str = "lower_spine";
/// Pelvis center.
pub const PELVIS: &str = "pelvis";
/// Tailbone.
pub const TAILBONE: &str = "tailbone";

// Torso.
/// Sternum.
pub const STERNUM: &str = "sternum";
/// Center of the chest.
pub const CHEST: &str = "chest";
/// Abdomen.
pub const ABDOMEN: &str = "abdomen";
/// Left rib cage.
pub const LEFT_RIBS: &str = "left_ribs";
/// Right rib cage.
pub const RIGHT_RIBS: &str = "right_ribs";
/// Left collarbone.
pub const LEFT_CLAVICLE: &str = "left_clavicle";
/// Right collarbone.
pub const RIGHT_CLAVICLE: &str = "right_clavicle";
/// Left shoulder blade.
pub const LEFT_SHOULDER_BLADE: &str = "left_shoulder_blade";
/// Right shoulder blade.
pub const RIGHT_SHOULDER_BLADE: &str = "right_shoulder_blade";

// Arms.
/// Left shoulder joint.
pub const LEFT_SHOULDER: &str = "left_shoulder";
/// Right shoulder joint.
pub const RIGHT_SHOULDER: &str = "right_shoulder";
/// Left upper arm midpoint.
pub const LEFT_UPPER_ARM: &str = "left_upper_arm";
/// Right upper arm midpoint.
pub const RIGHT_UPPER_ARM: &str = "right_upper_arm";
/// Left elbow.
pub const LEFT_ELBOW: &str = "left_elbow";
/// Right elbow.
pub const RIGHT_ELBOW: &str = "right_elbow";
/// Left forearm midpoint.
pub const LEFT_FOREARM: &str = "left_forearm";
/// Right forearm midpoint.
pub const RIGHT_FOREARM: &str = "right_forearm";
/// Left wrist.
pub const LEFT_WRIST: &str = "left_wrist";
/// Right wrist.
pub const RIGHT_WRIST: &str = "right_wrist";

// Left hand.
/// Left palm center.
pub const LEFT_PALM: &str = "left_palm";
/// Left thumb base joint.
pub const LEFT_THUMB_BASE: &str = "left_thumb_base";
/// Left thumb middle joint.
pub const LEFT_THUMB_MID: &str = "left_thumb_mid";
/// Left thumb tip.
pub const LEFT_THUMB_TIP: &str = "left_thumb_tip";
/// Left index finger base joint.
pub const LEFT_INDEX_BASE: &str = "left_index_base";
/// Left index finger middle joint.
pub const LEFT_INDEX_MID: &str = "left_index_mid";
/// Left index finger tip.
pub const LEFT_INDEX_TIP: &str = "left_index_tip";
/// Left middle finger base joint.
pub const LEFT_MIDDLE_BASE: &str = "left_middle_base";
/// Left middle finger middle joint.
pub const LEFT_MIDDLE_MID: &str = "left_middle_mid";
/// Left middle finger tip.
pub const LEFT_MIDDLE_TIP: &str = "left_middle_tip";
/// Left ring finger base joint.
pub const LEFT_RING_BASE: &str = "left_ring_base";
/// Left ring finger middle joint.
pub const LEFT_RING_MID: &str = "left_ring_mid";
/// Left ring finger tip.
pub const LEFT_RING_TIP: &str = "left_ring_tip";
/// Left little finger base joint.
pub const LEFT_PINKY_BASE: &str = "left_pinky_base";
/// Left little finger middle joint.
pub const LEFT_PINKY_MID: &str = "left_pinky_mid";
/// Left little finger tip.
pub const LEFT_PINKY_TIP: &str = "left_pinky_tip";

// Right hand.
/// Right palm center.
pub const RIGHT_PALM: &str = "right_palm";
/// Right thumb base joint.
pub const RIGHT_THUMB_BASE: &str = "right_thumb_base";
/// Right thumb middle joint.
pub const RIGHT_THUMB_MID: &str = "right_thumb_mid";
/// Right thumb tip.
pub const RIGHT_THUMB_TIP: &str = "right_thumb_tip";
/// Right index finger base joint.
pub const RIGHT_INDEX_BASE: &str = "right_index_base";
/// Right index finger middle joint.
pub const RIGHT_INDEX_MID: &str = "right_index_mid";
/// Right index finger tip.
pub const RIGHT_INDEX_TIP: &str = "right_index_tip";
/// Right middle finger base joint.
pub const RIGHT_MIDDLE_BASE: &str = "right_middle_base";
/// Right middle finger middle joint.
pub const RIGHT_MIDDLE_MID: &str = "right_middle_mid";
/// Right middle finger tip.
pub const RIGHT_MIDDLE_TIP: &str = "right_middle_tip";
/// Right ring finger base joint.
pub const RIGHT_RING_BASE: &str = "right_ring_base";
/// Right ring finger middle joint.
pub const RIGHT_RING_MID: &str = "right_ring_mid";
/// Right ring finger tip.
pub const RIGHT_RING_TIP: &str = "right_ring_tip";
/// Right little finger base joint.
pub const RIGHT_PINKY_BASE: &str = "right_pinky_base";
/// Right little finger middle joint.
pub const RIGHT_PINKY_MID: &str = "right_pinky_mid";
/// Right little finger tip.
pub const RIGHT_PINKY_TIP: &str = "right_pinky_tip";

// Hips and legs.
/// Left hip joint.
pub const LEFT_HIP: &str = "left_hip";
/// Right hip joint.
pub const RIGHT_HIP: &str = "right_hip";
/// Left thigh midpoint.
pub const LEFT_THIGH: &str = "left_thigh";
/// Right thigh midpoint.
pub const RIGHT_THIGH: &str = "right_thigh";
/// Left knee.
pub const LEFT_KNEE: &str = "left_knee";
/// Right knee.
pub const RIGHT_KNEE: &str = "right_knee";
/// Left shin midpoint.
pub const LEFT_SHIN: &str = "left_shin";
/// Right shin midpoint.
pub const RIGHT_SHIN: &str = "right_shin";
/// Left ankle.
pub const LEFT_ANKLE: &str = "left_ankle";
/// Right ankle.
pub const RIGHT_ANKLE: &str = "right_ankle";

// Feet.
/// Left heel.
pub const LEFT_HEEL: &str = "left_heel";
/// Right heel.
pub const RIGHT_HEEL: &str = "right_heel";
/// Ball of the left foot.
pub const LEFT_BALL: &str = "left_ball";
/// Ball of the right foot.
pub const RIGHT_BALL: &str = "right_ball";
/// Left big toe.
pub const LEFT_BIG_TOE: &str = "left_big_toe";
/// Right big toe.
pub const RIGHT_BIG_TOE: &str = "right_big_toe";
/// Left little toe.
pub const LEFT_LITTLE_TOE: &str = "left_little_toe";
/// Right little toe.
pub const RIGHT_LITTLE_TOE: &str = "right_little_toe";

/// All canonical landmark names, in generation order.
pub const ALL: &[&str] = &[
    HEAD_TOP,
    FOREHEAD,
    NOSE,
    CHIN,
    LEFT_EYE,
    RIGHT_EYE,
    LEFT_EAR,
    RIGHT_EAR,
    LEFT_TEMPLE,
    RIGHT_TEMPLE,
    LEFT_CHEEK,
    RIGHT_CHEEK,
    LEFT_JAW,
    RIGHT_JAW,
    THROAT,
    NECK,
    UPPER_SPINE,
    MID_SPINE,
    LOWER_SPINE,
    PELVIS,
    TAILBONE,
    STERNUM,
    CHEST,
    ABDOMEN,
    LEFT_RIBS,
    RIGHT_RIBS,
    LEFT_CLAVICLE,
    RIGHT_CLAVICLE,
    LEFT_SHOULDER_BLADE,
    RIGHT_SHOULDER_BLADE,
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    LEFT_UPPER_ARM,
    RIGHT_UPPER_ARM,
    LEFT_ELBOW,
    RIGHT_ELBOW,
    LEFT_FOREARM,
    RIGHT_FOREARM,
    LEFT_WRIST,
    RIGHT_WRIST,
    LEFT_PALM,
    LEFT_THUMB_BASE,
    LEFT_THUMB_MID,
    LEFT_THUMB_TIP,
    LEFT_INDEX_BASE,
    LEFT_INDEX_MID,
    LEFT_INDEX_TIP,
    LEFT_MIDDLE_BASE,
    LEFT_MIDDLE_MID,
    LEFT_MIDDLE_TIP,
    LEFT_RING_BASE,
    LEFT_RING_MID,
    LEFT_RING_TIP,
    LEFT_PINKY_BASE,
    LEFT_PINKY_MID,
    LEFT_PINKY_TIP,
    RIGHT_PALM,
    RIGHT_THUMB_BASE,
    RIGHT_THUMB_MID,
    RIGHT_THUMB_TIP,
    RIGHT_INDEX_BASE,
    RIGHT_INDEX_MID,
    RIGHT_INDEX_TIP,
    RIGHT_MIDDLE_BASE,
    RIGHT_MIDDLE_MID,
    RIGHT_MIDDLE_TIP,
    RIGHT_RING_BASE,
    RIGHT_RING_MID,
    RIGHT_RING_TIP,
    RIGHT_PINKY_BASE,
    RIGHT_PINKY_MID,
    RIGHT_PINKY_TIP,
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_THIGH,
    RIGHT_THIGH,
    LEFT_KNEE,
    RIGHT_KNEE,
    LEFT_SHIN,
    RIGHT_SHIN,
    LEFT_ANKLE,
    RIGHT_ANKLE,
    LEFT_HEEL,
    RIGHT_HEEL,
    LEFT_BALL,
    RIGHT_BALL,
    LEFT_BIG_TOE,
    RIGHT_BIG_TOE,
    LEFT_LITTLE_TOE,
    RIGHT_LITTLE_TOE,
];

/// Returns `true` if `name` is one of the canonical landmark names.
///
/// # Example
///
/// ```
/// use skeleton_types::landmark;
///
/// assert!(landmark::is_canonical("left_knee"));
/// assert!(!landmark::is_canonical("left_flipper"));
/// ```
#[must_use]
pub fn is_canonical(name: &str) -> bool {
    ALL.contains(&name)
}
