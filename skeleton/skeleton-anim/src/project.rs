//! 3D rotation and perspective projection.

use nalgebra::Point3;
use skeleton_types::{Keypoint3D, Pose};

use crate::{AnimError, Result, SkeletonLayout};

/// Perspective focal distance, screen units.
pub const FOCAL_DISTANCE: f64 = 600.0;

/// Rotate a de-centered offset about Y then X and return the rotated
/// 3D coordinates. Angles are radians.
fn rotate(dx: f64, dy: f64, dz: f64, rotation_x: f64, rotation_y: f64) -> (f64, f64, f64) {
    // Y axis first (horizontal drag), then X axis (vertical drag).
    // The order is load-bearing: the composite rotation differs if
    // reversed.
    let (sin_y, cos_y) = rotation_y.sin_cos();
    let x1 = dx * cos_y + dz * sin_y;
    let z1 = -dx * sin_y + dz * cos_y;

    let (sin_x, cos_x) = rotation_x.sin_cos();
    let y1 = dy * cos_x - z1 * sin_x;
    let z2 = dy * sin_x + z1 * cos_x;

    (x1, y1, z2)
}

fn project_point(kp: &Keypoint3D, rotation_x: f64, rotation_y: f64, layout: &SkeletonLayout) -> Keypoint3D {
    let center = layout.center();
    let (x, y, z) = rotate(
        kp.x() - center.x,
        kp.y() - center.y,
        kp.z(),
        rotation_x,
        rotation_y,
    );
    let scale = FOCAL_DISTANCE / (FOCAL_DISTANCE + z);
    kp.at(Point3::new(center.x + x * scale, center.y + y * scale, z))
}

/// Rotate a keypoint about the container center and perspective-project
/// it back to screen coordinates.
///
/// Rotation is applied about the Y axis first, then the X axis; angles
/// are radians. `name` and `score` pass through unchanged; only the
/// position is recomputed.
///
/// # Errors
///
/// Returns [`AnimError::NonFiniteRotation`] for `NaN`/infinite angles.
///
/// # Example
///
/// ```
/// use skeleton_anim::{transform, SkeletonLayout};
/// use skeleton_types::Keypoint3D;
///
/// let layout = SkeletonLayout::new(400.0, 500.0);
/// let kp = Keypoint3D::procedural("nose", 200.0, 100.0, 0.0);
///
/// // identity rotation leaves a zero-depth point in place
/// let same = transform(&kp, 0.0, 0.0, &layout).unwrap();
/// assert!((same.x() - 200.0).abs() < 1e-12);
/// assert!((same.y() - 100.0).abs() < 1e-12);
/// ```
pub fn transform(
    kp: &Keypoint3D,
    rotation_x: f64,
    rotation_y: f64,
    layout: &SkeletonLayout,
) -> Result<Keypoint3D> {
    for angle in [rotation_x, rotation_y] {
        if !angle.is_finite() {
            return Err(AnimError::NonFiniteRotation(angle));
        }
    }
    Ok(project_point(kp, rotation_x, rotation_y, layout))
}

/// Project a whole pose through the current rotation in one pass.
///
/// # Errors
///
/// Returns [`AnimError::NonFiniteRotation`] for `NaN`/infinite angles.
pub fn project_pose(
    pose: &Pose,
    rotation_x: f64,
    rotation_y: f64,
    layout: &SkeletonLayout,
) -> Result<Pose> {
    for angle in [rotation_x, rotation_y] {
        if !angle.is_finite() {
            return Err(AnimError::NonFiniteRotation(angle));
        }
    }
    Ok(pose.map(|kp| project_point(kp, rotation_x, rotation_y, layout)))
}

/// Render-facing opacity for a projected depth.
///
/// Nearer points (negative `z`) are more opaque; the ramp is linear in
/// depth and clamped to `[0.3, 1.0]` so distant joints stay visible.
#[must_use]
pub fn depth_opacity(z: f64) -> f64 {
    (0.9 - z / FOCAL_DISTANCE).clamp(0.3, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Vector3};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn layout() -> SkeletonLayout {
        SkeletonLayout::new(400.0, 500.0)
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn identity_rotation_is_noop() {
        let kp = Keypoint3D::procedural("nose", 163.0, 84.5, 0.0);
        let once = transform(&kp, 0.0, 0.0, &layout()).unwrap();
        let twice = transform(&once, 0.0, 0.0, &layout()).unwrap();
        assert_relative_eq!(twice.x(), kp.x(), epsilon = 1e-10);
        assert_relative_eq!(twice.y(), kp.y(), epsilon = 1e-10);
        assert_relative_eq!(twice.z(), kp.z(), epsilon = 1e-10);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn preserves_name_and_score() {
        let kp = Keypoint3D::procedural("left_ear", 150.0, 100.0, 12.0);
        let rotated = transform(&kp, 0.4, 1.2, &layout()).unwrap();
        assert_eq!(rotated.name, "left_ear");
        assert!((rotated.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn quarter_turn_about_y_moves_x_into_depth() {
        // point 50 units right of center, zero depth
        let kp = Keypoint3D::procedural("p", 250.0, 250.0, 0.0);
        let rotated = transform(&kp, 0.0, FRAC_PI_2, &layout()).unwrap();
        // x offset becomes depth: z = -50, x collapses to center
        assert_relative_eq!(rotated.z(), -50.0, epsilon = 1e-10);
        assert_relative_eq!(rotated.x(), 200.0, epsilon = 1e-8);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn rotation_order_is_y_then_x() {
        let kp = Keypoint3D::procedural("p", 260.0, 220.0, 15.0);
        let rotated = transform(&kp, FRAC_PI_4, FRAC_PI_4, &layout()).unwrap();

        // reference composite: Rx * (Ry * v)
        let center = layout().center();
        let v = Vector3::new(kp.x() - center.x, kp.y() - center.y, kp.z());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_4);
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), FRAC_PI_4);
        let expected = rx * (ry * v);

        assert_relative_eq!(rotated.z(), expected.z, epsilon = 1e-10);
        let scale = FOCAL_DISTANCE / (FOCAL_DISTANCE + expected.z);
        assert_relative_eq!(rotated.x(), center.x + expected.x * scale, epsilon = 1e-10);
        assert_relative_eq!(rotated.y(), center.y + expected.y * scale, epsilon = 1e-10);
    }

    #[test]
    fn rejects_non_finite_angles() {
        let kp = Keypoint3D::procedural("p", 0.0, 0.0, 0.0);
        assert!(transform(&kp, f64::NAN, 0.0, &layout()).is_err());
        assert!(transform(&kp, 0.0, f64::INFINITY, &layout()).is_err());
    }

    #[test]
    fn depth_opacity_ramp() {
        assert_relative_eq!(depth_opacity(0.0), 0.9, epsilon = 1e-12);
        assert!(depth_opacity(-100.0) > depth_opacity(100.0));
        // clamped at both ends
        assert_relative_eq!(depth_opacity(10_000.0), 0.3, epsilon = 1e-12);
        assert_relative_eq!(depth_opacity(-10_000.0), 1.0, epsilon = 1e-12);
    }
}
