//! Per-frame styling handed to the renderer.

use nalgebra::Point2;

use annotate_store::{pain_color, PainAnnotationStore, PainLevel};
use skeleton_anim::depth_opacity;
use skeleton_types::{SkeletonConnection, CONNECTIONS, Pose};

/// One drawable skeleton segment with its derived styling.
///
/// `color` is `Some` only when at least one endpoint carries a pain
/// entry; `None` segments keep the host's default stroke color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionStyle {
    /// The anatomical pair this segment draws.
    pub connection: SkeletonConnection,
    /// Projected screen position of the first endpoint.
    pub from: Point2<f64>,
    /// Projected screen position of the second endpoint.
    pub to: Point2<f64>,
    /// Pain color for the segment, if either endpoint is annotated.
    pub color: Option<[u8; 3]>,
    /// Stroke opacity derived from the segment's mean depth.
    pub opacity: f64,
}

/// Resolve every drawable connection of a projected pose against the
/// pain store.
///
/// Connections whose endpoints are missing from the pose are skipped.
/// When both endpoints carry an entry the more severe level wins, so a
/// segment bridging a painful and a pain-free keypoint still reads as
/// painful.
///
/// # Example
///
/// ```
/// use annotate_session::connection_styles;
/// use annotate_store::{MemoryBackend, PainAnnotationStore, PainLevel};
/// use skeleton_anim::{generate_keypoints, SkeletonLayout};
///
/// let layout = SkeletonLayout::new(400.0, 640.0);
/// let pose = generate_keypoints(&layout, 0.0).unwrap();
///
/// let mut store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
/// store.assign(["left_knee"], PainLevel::try_from(8).unwrap());
///
/// let styles = connection_styles(&pose, &store);
/// let painful = styles.iter().filter(|s| s.color.is_some()).count();
/// assert!(painful >= 2); // left thigh-knee and knee-shin segments
/// ```
#[must_use]
pub fn connection_styles(pose: &Pose, store: &PainAnnotationStore) -> Vec<ConnectionStyle> {
    CONNECTIONS
        .iter()
        .filter_map(|conn| {
            let a = pose.get(conn.a)?;
            let b = pose.get(conn.b)?;
            let level = match (store.get(conn.a), store.get(conn.b)) {
                (Some(x), Some(y)) => Some(x.max(y)),
                (Some(x), None) | (None, Some(x)) => Some(x),
                (None, None) => None,
            };
            Some(ConnectionStyle {
                connection: *conn,
                from: Point2::new(a.x(), a.y()),
                to: Point2::new(b.x(), b.y()),
                color: level.map(pain_color),
                opacity: depth_opacity((a.z() + b.z()) / 2.0),
            })
        })
        .collect()
}

/// Fill color for a single keypoint node, if it carries a pain entry.
#[must_use]
pub fn node_color(store: &PainAnnotationStore, name: &str) -> Option<[u8; 3]> {
    store.get(name).map(pain_color)
}

/// The color and opacity pair for a standalone annotated keypoint.
#[must_use]
pub fn node_style(level: PainLevel, z: f64) -> ([u8; 3], f64) {
    (pain_color(level), depth_opacity(z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotate_store::MemoryBackend;
    use skeleton_types::{landmark, Keypoint3D};

    #[allow(clippy::unwrap_used)]
    fn store_with(entries: &[(&str, u8)]) -> PainAnnotationStore {
        let mut store = PainAnnotationStore::new(Box::new(MemoryBackend::new()));
        for &(name, level) in entries {
            store.assign([name], PainLevel::new(level).unwrap());
        }
        store
    }

    #[test]
    fn unannotated_pose_has_no_colors() {
        let pose = Pose::new(vec![
            Keypoint3D::procedural(landmark::LEFT_HIP, 0.0, 0.0, 0.0),
            Keypoint3D::procedural(landmark::LEFT_KNEE, 0.0, 50.0, 0.0),
            Keypoint3D::procedural(landmark::LEFT_THIGH, 0.0, 25.0, 0.0),
        ]);
        let styles = connection_styles(&pose, &store_with(&[]));

        // only the hip-thigh-knee chain is present in this pose
        assert_eq!(styles.len(), 2);
        assert!(styles.iter().all(|s| s.color.is_none()));
    }

    #[test]
    fn severer_endpoint_wins() {
        let pose = Pose::new(vec![
            Keypoint3D::procedural(landmark::LEFT_THIGH, 0.0, 25.0, 0.0),
            Keypoint3D::procedural(landmark::LEFT_KNEE, 0.0, 50.0, 0.0),
        ]);
        let store = store_with(&[(landmark::LEFT_THIGH, 2), (landmark::LEFT_KNEE, 9)]);

        let styles = connection_styles(&pose, &store);
        assert_eq!(styles.len(), 1);
        #[allow(clippy::unwrap_used)]
        let nine = PainLevel::new(9).unwrap();
        assert_eq!(styles[0].color, Some(pain_color(nine)));
    }

    #[test]
    fn single_annotated_endpoint_colors_segment() {
        let pose = Pose::new(vec![
            Keypoint3D::procedural(landmark::LEFT_THIGH, 0.0, 25.0, 0.0),
            Keypoint3D::procedural(landmark::LEFT_KNEE, 0.0, 50.0, 0.0),
        ]);
        let store = store_with(&[(landmark::LEFT_KNEE, 5)]);

        let styles = connection_styles(&pose, &store);
        assert!(styles[0].color.is_some());
        assert_eq!(node_color(&store, landmark::LEFT_KNEE), Some([150, 130, 0]));
        assert_eq!(node_color(&store, landmark::LEFT_THIGH), None);
    }

    #[test]
    fn opacity_tracks_mean_depth() {
        let pose = Pose::new(vec![
            Keypoint3D::procedural(landmark::LEFT_THIGH, 0.0, 25.0, -60.0),
            Keypoint3D::procedural(landmark::LEFT_KNEE, 0.0, 50.0, -60.0),
        ]);
        let styles = connection_styles(&pose, &store_with(&[]));
        assert_eq!(styles[0].opacity, depth_opacity(-60.0));
    }
}
