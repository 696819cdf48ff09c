//! Reconciled region queries.

use nalgebra::Point2;
use skeleton_types::Pose;

use crate::{point_in_polygon, LayerFrame};

/// Names of the keypoints whose projected positions fall inside a drawn
/// polygon.
///
/// The polygon is in full-viewport coordinates; `pose` keypoints are
/// container-local. Each polygon vertex is translated into the
/// container frame before testing; skipping that shift silently
/// mismatches regions, which is why it lives here and not at call
/// sites.
///
/// Degenerate polygons produce an empty result; an empty result means
/// "no region matched", not failure.
///
/// # Example
///
/// ```
/// use annotate_hit::{nodes_in_region, LayerFrame};
/// use nalgebra::Point2;
/// use skeleton_types::{Keypoint3D, Pose};
///
/// let pose = Pose::new(vec![
///     Keypoint3D::procedural("nose", 50.0, 50.0, 0.0),
///     Keypoint3D::procedural("chin", 50.0, 300.0, 0.0),
/// ]);
/// let polygon = vec![
///     Point2::new(40.0, 40.0),
///     Point2::new(60.0, 40.0),
///     Point2::new(60.0, 60.0),
///     Point2::new(40.0, 60.0),
/// ];
/// let hits = nodes_in_region(&polygon, &pose, &LayerFrame::identity());
/// assert_eq!(hits, vec!["nose"]);
/// ```
#[must_use]
pub fn nodes_in_region(
    polygon: &[Point2<f64>],
    pose: &Pose,
    frame: &LayerFrame,
) -> Vec<String> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let local: Vec<Point2<f64>> = polygon.iter().map(|&p| frame.to_container(p)).collect();

    pose.iter()
        .filter(|kp| point_in_polygon(Point2::new(kp.x(), kp.y()), &local))
        .map(|kp| kp.name.clone())
        .collect()
}
