//! Viewport layout for the procedural figure.

use nalgebra::Point2;

use crate::{AnimError, Result};

/// Height of the base figure in layout units (head top to toe).
///
/// Base landmark offsets in [`crate::walk`] are expressed in this unit
/// system, centered on the origin; [`SkeletonLayout`] maps them into
/// screen coordinates.
pub(crate) const FIGURE_UNITS: f64 = 500.0;

/// Viewport geometry and figure scale for skeleton generation.
///
/// The base figure is defined in a fixed unit system centered on the
/// origin; the layout scales it to fill the container and centers it on
/// the container's midpoint. The container here is the skeleton's own
/// view, not the full device viewport; reconciling the two frames is
/// the hit tester's job.
///
/// # Example
///
/// ```
/// use skeleton_anim::SkeletonLayout;
///
/// let layout = SkeletonLayout::new(400.0, 640.0);
/// assert!((layout.center().x - 200.0).abs() < 1e-10);
/// assert!((layout.center().y - 320.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonLayout {
    width: f64,
    height: f64,
    scale: f64,
}

impl SkeletonLayout {
    /// Create a layout for a container of the given size.
    ///
    /// The figure is scaled so its full height occupies the container
    /// height.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is non-positive or non-finite.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(width: f64, height: f64) -> Self {
        Self::try_new(width, height).expect("viewport dimensions must be positive and finite")
    }

    /// Try to create a layout, returning an error for bad dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(AnimError::invalid_viewport(width, height));
        }
        Ok(Self {
            width,
            height,
            scale: height / FIGURE_UNITS,
        })
    }

    /// Container width in screen units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Container height in screen units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Screen-space center of the container.
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Layout-unit to screen-unit scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a layout-unit offset from the figure origin to screen space.
    #[must_use]
    pub fn to_screen(&self, x_units: f64, y_units: f64) -> Point2<f64> {
        let center = self.center();
        Point2::new(center.x + x_units * self.scale, center.y + y_units * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn layout_centers_figure() {
        let layout = SkeletonLayout::new(400.0, 500.0);
        // 1:1 scale at FIGURE_UNITS height
        assert_relative_eq!(layout.scale(), 1.0, epsilon = 1e-12);

        let origin = layout.to_screen(0.0, 0.0);
        assert_relative_eq!(origin.x, 200.0, epsilon = 1e-12);
        assert_relative_eq!(origin.y, 250.0, epsilon = 1e-12);
    }

    #[test]
    fn layout_scales_offsets() {
        let layout = SkeletonLayout::new(400.0, 250.0);
        let p = layout.to_screen(100.0, -100.0);
        assert_relative_eq!(p.x, 200.0 + 50.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 125.0 - 50.0, epsilon = 1e-12);
    }

    #[test]
    fn layout_rejects_bad_dimensions() {
        assert!(SkeletonLayout::try_new(0.0, 100.0).is_err());
        assert!(SkeletonLayout::try_new(100.0, -5.0).is_err());
        assert!(SkeletonLayout::try_new(f64::NAN, 100.0).is_err());
    }
}
