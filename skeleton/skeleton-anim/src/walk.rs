//! Procedural walk-cycle keypoint generation.
//!
//! The figure is a fixed base layout (90 landmarks in layout units,
//! centered on the origin) plus five phase-locked sinusoids:
//!
//! - **arm swing** - forward/back `z` motion along each arm chain
//! - **leg lift** - upward `y` motion on the swinging leg
//! - **body bob** - whole-figure vertical oscillation at twice the phase
//! - **shoulder tilt** - small vertical counter-rotation of the girdle
//! - **hip sway** - lateral pelvis motion
//!
//! Contralateral limbs run at `walk_phase + π`: the left arm swings with
//! the right leg. At `walk_phase = 0` every sinusoid is zero and the
//! generator returns the base pose exactly, which makes frame-precise
//! tests possible without a running timer.

use std::f64::consts::PI;

use skeleton_types::{landmark::*, Keypoint3D, Pose};

use crate::{AnimError, Result, SkeletonLayout};

/// Vertical bob amplitude, layout units.
const BODY_BOB: f64 = 4.0;
/// Arm swing amplitude at full chain reach, layout units of depth.
const ARM_SWING: f64 = 26.0;
/// Leg drive amplitude at full chain reach, layout units of depth.
const LEG_DRIVE: f64 = 30.0;
/// Leg lift amplitude at full chain reach, layout units.
const LEG_LIFT: f64 = 12.0;
/// Shoulder tilt amplitude at the girdle, layout units.
const SHOULDER_TILT: f64 = 3.5;
/// Hip sway amplitude, layout units.
const HIP_SWAY: f64 = 5.0;

/// Which sinusoid family a landmark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Head,
    Torso,
    Pelvis,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// One row of the base figure table.
struct Base {
    name: &'static str,
    x: f64,
    y: f64,
    z: f64,
    group: Group,
    /// Normalized position along the limb chain (0 at the joint root,
    /// 1 at the extremity). Swing amplitude grows with reach; shoulder
    /// tilt and hip sway fade with it.
    reach: f64,
}

const fn b(name: &'static str, x: f64, y: f64, z: f64, group: Group, reach: f64) -> Base {
    Base {
        name,
        x,
        y,
        z,
        group,
        reach,
    }
}

/// Base figure, in layout units centered on the origin, listed in
/// [`skeleton_types::landmark::ALL`] order. Y grows downward.
#[rustfmt::skip]
const BASE: &[Base] = &[
    b(HEAD_TOP,             0.0, -230.0,   0.0, Group::Head, 0.0),
    b(FOREHEAD,             0.0, -214.0,   8.0, Group::Head, 0.0),
    b(NOSE,                 0.0, -196.0,  14.0, Group::Head, 0.0),
    b(CHIN,                 0.0, -178.0,  10.0, Group::Head, 0.0),
    b(LEFT_EYE,            -9.0, -204.0,  10.0, Group::Head, 0.0),
    b(RIGHT_EYE,            9.0, -204.0,  10.0, Group::Head, 0.0),
    b(LEFT_EAR,           -19.0, -200.0,  -2.0, Group::Head, 0.0),
    b(RIGHT_EAR,           19.0, -200.0,  -2.0, Group::Head, 0.0),
    b(LEFT_TEMPLE,        -14.0, -212.0,   2.0, Group::Head, 0.0),
    b(RIGHT_TEMPLE,        14.0, -212.0,   2.0, Group::Head, 0.0),
    b(LEFT_CHEEK,         -11.0, -190.0,   8.0, Group::Head, 0.0),
    b(RIGHT_CHEEK,         11.0, -190.0,   8.0, Group::Head, 0.0),
    b(LEFT_JAW,           -13.0, -182.0,   4.0, Group::Head, 0.0),
    b(RIGHT_JAW,           13.0, -182.0,   4.0, Group::Head, 0.0),
    b(THROAT,               0.0, -166.0,   8.0, Group::Head, 0.0),
    b(NECK,                 0.0, -158.0,   0.0, Group::Torso, 0.0),
    b(UPPER_SPINE,          0.0, -140.0, -12.0, Group::Torso, 0.0),
    b(MID_SPINE,            0.0, -112.0, -12.0, Group::Torso, 0.0),
    b(LOWER_SPINE,          0.0,  -84.0, -10.0, Group::Torso, 0.0),
    b(PELVIS,               0.0,  -56.0,   0.0, Group::Pelvis, 0.0),
    b(TAILBONE,             0.0,  -46.0, -12.0, Group::Pelvis, 0.0),
    b(STERNUM,              0.0, -144.0,  10.0, Group::Torso, 0.0),
    b(CHEST,                0.0, -118.0,  12.0, Group::Torso, 0.0),
    b(ABDOMEN,              0.0,  -86.0,  10.0, Group::Torso, 0.0),
    b(LEFT_RIBS,          -26.0, -120.0,   6.0, Group::Torso, 0.0),
    b(RIGHT_RIBS,          26.0, -120.0,   6.0, Group::Torso, 0.0),
    b(LEFT_CLAVICLE,      -16.0, -150.0,   4.0, Group::LeftArm, 0.05),
    b(RIGHT_CLAVICLE,      16.0, -150.0,   4.0, Group::RightArm, 0.05),
    b(LEFT_SHOULDER_BLADE, -26.0, -138.0, -12.0, Group::LeftArm, 0.1),
    b(RIGHT_SHOULDER_BLADE, 26.0, -138.0, -12.0, Group::RightArm, 0.1),
    b(LEFT_SHOULDER,      -45.0, -146.0,   0.0, Group::LeftArm, 0.15),
    b(RIGHT_SHOULDER,      45.0, -146.0,   0.0, Group::RightArm, 0.15),
    b(LEFT_UPPER_ARM,     -50.0, -112.0,   2.0, Group::LeftArm, 0.45),
    b(RIGHT_UPPER_ARM,     50.0, -112.0,   2.0, Group::RightArm, 0.45),
    b(LEFT_ELBOW,         -54.0,  -78.0,   4.0, Group::LeftArm, 0.7),
    b(RIGHT_ELBOW,         54.0,  -78.0,   4.0, Group::RightArm, 0.7),
    b(LEFT_FOREARM,       -57.0,  -46.0,   6.0, Group::LeftArm, 0.85),
    b(RIGHT_FOREARM,       57.0,  -46.0,   6.0, Group::RightArm, 0.85),
    b(LEFT_WRIST,         -60.0,  -14.0,   8.0, Group::LeftArm, 1.0),
    b(RIGHT_WRIST,         60.0,  -14.0,   8.0, Group::RightArm, 1.0),
    b(LEFT_PALM,          -62.0,    4.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_THUMB_BASE,    -53.0,   10.0,  12.0, Group::LeftArm, 1.0),
    b(LEFT_THUMB_MID,     -50.0,   18.0,  12.0, Group::LeftArm, 1.0),
    b(LEFT_THUMB_TIP,     -48.0,   24.0,  12.0, Group::LeftArm, 1.0),
    b(LEFT_INDEX_BASE,    -58.0,   20.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_INDEX_MID,     -58.0,   30.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_INDEX_TIP,     -58.0,   38.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_MIDDLE_BASE,   -62.0,   22.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_MIDDLE_MID,    -62.0,   33.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_MIDDLE_TIP,    -62.0,   42.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_RING_BASE,     -66.0,   20.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_RING_MID,      -66.0,   30.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_RING_TIP,      -66.0,   38.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_PINKY_BASE,    -69.0,   16.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_PINKY_MID,     -69.0,   24.0,   8.0, Group::LeftArm, 1.0),
    b(LEFT_PINKY_TIP,     -69.0,   30.0,   8.0, Group::LeftArm, 1.0),
    b(RIGHT_PALM,          62.0,    4.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_THUMB_BASE,    53.0,   10.0,  12.0, Group::RightArm, 1.0),
    b(RIGHT_THUMB_MID,     50.0,   18.0,  12.0, Group::RightArm, 1.0),
    b(RIGHT_THUMB_TIP,     48.0,   24.0,  12.0, Group::RightArm, 1.0),
    b(RIGHT_INDEX_BASE,    58.0,   20.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_INDEX_MID,     58.0,   30.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_INDEX_TIP,     58.0,   38.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_MIDDLE_BASE,   62.0,   22.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_MIDDLE_MID,    62.0,   33.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_MIDDLE_TIP,    62.0,   42.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_RING_BASE,     66.0,   20.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_RING_MID,      66.0,   30.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_RING_TIP,      66.0,   38.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_PINKY_BASE,    69.0,   16.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_PINKY_MID,     69.0,   24.0,   8.0, Group::RightArm, 1.0),
    b(RIGHT_PINKY_TIP,     69.0,   30.0,   8.0, Group::RightArm, 1.0),
    b(LEFT_HIP,           -27.0,  -50.0,   0.0, Group::LeftLeg, 0.1),
    b(RIGHT_HIP,           27.0,  -50.0,   0.0, Group::RightLeg, 0.1),
    b(LEFT_THIGH,         -28.0,    0.0,   2.0, Group::LeftLeg, 0.4),
    b(RIGHT_THIGH,         28.0,    0.0,   2.0, Group::RightLeg, 0.4),
    b(LEFT_KNEE,          -28.0,   52.0,   4.0, Group::LeftLeg, 0.65),
    b(RIGHT_KNEE,          28.0,   52.0,   4.0, Group::RightLeg, 0.65),
    b(LEFT_SHIN,          -27.0,  104.0,   2.0, Group::LeftLeg, 0.8),
    b(RIGHT_SHIN,          27.0,  104.0,   2.0, Group::RightLeg, 0.8),
    b(LEFT_ANKLE,         -26.0,  156.0,   0.0, Group::LeftLeg, 1.0),
    b(RIGHT_ANKLE,         26.0,  156.0,   0.0, Group::RightLeg, 1.0),
    b(LEFT_HEEL,          -28.0,  170.0, -10.0, Group::LeftLeg, 1.0),
    b(RIGHT_HEEL,          28.0,  170.0, -10.0, Group::RightLeg, 1.0),
    b(LEFT_BALL,          -26.0,  180.0,  12.0, Group::LeftLeg, 1.0),
    b(RIGHT_BALL,          26.0,  180.0,  12.0, Group::RightLeg, 1.0),
    b(LEFT_BIG_TOE,       -20.0,  188.0,  20.0, Group::LeftLeg, 1.0),
    b(RIGHT_BIG_TOE,       20.0,  188.0,  20.0, Group::RightLeg, 1.0),
    b(LEFT_LITTLE_TOE,    -33.0,  186.0,  16.0, Group::LeftLeg, 1.0),
    b(RIGHT_LITTLE_TOE,    33.0,  186.0,  16.0, Group::RightLeg, 1.0),
];

/// Phase for a limb group: contralateral limbs run half a cycle apart.
fn limb_phase(walk_phase: f64, group: Group) -> f64 {
    match group {
        Group::RightArm | Group::LeftLeg => walk_phase + PI,
        _ => walk_phase,
    }
}

/// Generate the full keypoint set for one animation frame.
///
/// Pure and deterministic: the same `layout` and `walk_phase` always
/// yield the same pose. The phase is an angle in radians; callers
/// normally obtain it from [`AnimationState::walk_phase`] but any finite
/// value is valid.
///
/// # Errors
///
/// Returns [`AnimError::NonFinitePhase`] for `NaN` or infinite phase.
///
/// # Example
///
/// ```
/// use skeleton_anim::{generate_keypoints, SkeletonLayout};
/// use skeleton_types::landmark;
///
/// let layout = SkeletonLayout::new(400.0, 500.0);
/// let pose = generate_keypoints(&layout, 0.0).unwrap();
/// assert_eq!(pose.len(), landmark::ALL.len());
/// ```
///
/// [`AnimationState::walk_phase`]: crate::AnimationState::walk_phase
pub fn generate_keypoints(layout: &SkeletonLayout, walk_phase: f64) -> Result<Pose> {
    if !walk_phase.is_finite() {
        return Err(AnimError::NonFinitePhase(walk_phase));
    }

    let bob = (walk_phase * 2.0).sin() * BODY_BOB;
    let sway = walk_phase.sin() * HIP_SWAY;

    let mut keypoints = Vec::with_capacity(BASE.len());
    for base in BASE {
        let mut x = base.x;
        let mut y = base.y + bob;
        let mut z = base.z;

        match base.group {
            Group::Head | Group::Torso => {}
            Group::Pelvis => x += sway,
            Group::LeftArm | Group::RightArm => {
                let swing = limb_phase(walk_phase, base.group).sin();
                z += swing * ARM_SWING * base.reach;
                y += swing * SHOULDER_TILT * (1.0 - base.reach);
            }
            Group::LeftLeg | Group::RightLeg => {
                let drive = limb_phase(walk_phase, base.group).sin();
                z += drive * LEG_DRIVE * base.reach;
                y -= drive.max(0.0) * LEG_LIFT * base.reach;
                x += sway * (1.0 - base.reach);
            }
        }

        let screen = layout.to_screen(x, y);
        keypoints.push(Keypoint3D::procedural(
            base.name,
            screen.x,
            screen.y,
            z * layout.scale(),
        ));
    }

    Ok(Pose::new(keypoints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use skeleton_types::landmark;

    fn layout() -> SkeletonLayout {
        // 1:1 layout-unit scale keeps expected values readable
        SkeletonLayout::new(400.0, 500.0)
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn generates_every_landmark_in_order() {
        let pose = generate_keypoints(&layout(), 1.3).unwrap();
        assert_eq!(pose.len(), landmark::ALL.len());
        for (kp, name) in pose.iter().zip(landmark::ALL) {
            assert_eq!(kp.name, *name);
            assert!((kp.score - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn deterministic_and_restartable() {
        let a = generate_keypoints(&layout(), 2.71).unwrap();
        let b = generate_keypoints(&layout(), 2.71).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn phase_zero_is_base_pose() {
        let pose = generate_keypoints(&layout(), 0.0).unwrap();
        let shoulder = pose.get(landmark::LEFT_SHOULDER).unwrap();
        // center (200, 250) at scale 1.0
        assert_relative_eq!(shoulder.x(), 200.0 - 45.0, epsilon = 1e-12);
        assert_relative_eq!(shoulder.y(), 250.0 - 146.0, epsilon = 1e-12);
        assert_relative_eq!(shoulder.z(), 0.0, epsilon = 1e-12);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn contralateral_limbs_half_cycle_apart() {
        let phase = 0.9;
        let now = generate_keypoints(&layout(), phase).unwrap();
        let opposite = generate_keypoints(&layout(), phase + PI).unwrap();

        let left_wrist = now.get(landmark::LEFT_WRIST).unwrap();
        let right_wrist = opposite.get(landmark::RIGHT_WRIST).unwrap();
        // mirrored landmark at mirrored phase swings to the same depth
        assert_relative_eq!(left_wrist.z(), right_wrist.z(), epsilon = 1e-9);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn arm_swing_grows_along_chain() {
        let pose = generate_keypoints(&layout(), std::f64::consts::FRAC_PI_2).unwrap();
        let shoulder_z = pose.get(landmark::LEFT_SHOULDER).unwrap().z();
        let wrist_z = pose.get(landmark::LEFT_WRIST).unwrap().z();
        assert!(
            (wrist_z - 8.0).abs() > (shoulder_z - 0.0).abs(),
            "wrist should swing further than shoulder"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn body_bob_moves_head() {
        let base = generate_keypoints(&layout(), 0.0).unwrap();
        let bobbed = generate_keypoints(&layout(), std::f64::consts::FRAC_PI_4).unwrap();
        let y0 = base.get(landmark::HEAD_TOP).unwrap().y();
        let y1 = bobbed.get(landmark::HEAD_TOP).unwrap().y();
        // sin(2 * π/4) = 1 → full bob amplitude
        assert_relative_eq!(y1 - y0, BODY_BOB, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_finite_phase() {
        assert!(generate_keypoints(&layout(), f64::NAN).is_err());
        assert!(generate_keypoints(&layout(), f64::INFINITY).is_err());
    }
}
