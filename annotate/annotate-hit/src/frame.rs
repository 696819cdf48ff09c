//! Coordinate reconciliation between drawing and skeleton layers.

use nalgebra::{Point2, Vector2};

/// The relationship between the full-viewport drawing layer and the
/// skeleton container's local frame.
///
/// The drawing layer spans the whole viewport; the skeleton renders
/// inside a smaller container (in the original layout, 80% of viewport
/// height, centered). Keypoints are container-local while drawn
/// polygons are viewport coordinates, so every hit test first shifts
/// the polygon by the container's origin. Making the container rect an
/// explicit parameter keeps that shift out of call sites and lets the
/// host vary its layout freely.
///
/// # Example
///
/// ```
/// use annotate_hit::LayerFrame;
/// use nalgebra::Point2;
///
/// let frame = LayerFrame::centered(400.0, 800.0, 400.0, 640.0);
/// let local = frame.to_container(Point2::new(50.0, 180.0));
/// assert!((local.y - 100.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFrame {
    /// Container origin in viewport coordinates.
    origin: Vector2<f64>,
}

impl LayerFrame {
    /// A frame whose container is centered inside the viewport.
    ///
    /// The container origin becomes half the size difference on each
    /// axis; for the original layout (full-width container, 80%
    /// height) that is `(0, (viewport_height - container_height) / 2)`.
    #[must_use]
    pub fn centered(
        viewport_width: f64,
        viewport_height: f64,
        container_width: f64,
        container_height: f64,
    ) -> Self {
        Self {
            origin: Vector2::new(
                (viewport_width - container_width) / 2.0,
                (viewport_height - container_height) / 2.0,
            ),
        }
    }

    /// A frame with an explicit container origin in viewport coordinates.
    #[must_use]
    pub const fn with_origin(origin: Vector2<f64>) -> Self {
        Self { origin }
    }

    /// The identity frame: drawing layer and container coincide.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            origin: Vector2::new(0.0, 0.0),
        }
    }

    /// Container origin in viewport coordinates.
    #[must_use]
    pub fn origin(&self) -> Vector2<f64> {
        self.origin
    }

    /// Translate a viewport-space point into container-local space.
    #[must_use]
    pub fn to_container(&self, point: Point2<f64>) -> Point2<f64> {
        point - self.origin
    }

    /// Translate a container-local point into viewport space.
    #[must_use]
    pub fn to_viewport(&self, point: Point2<f64>) -> Point2<f64> {
        point + self.origin
    }
}

impl Default for LayerFrame {
    fn default() -> Self {
        Self::identity()
    }
}
