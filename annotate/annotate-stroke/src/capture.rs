//! Touch-gesture point capture.

use nalgebra::Point2;

use crate::DrawingPath;

/// Minimum distance between recorded points, screen units.
///
/// Points closer than this to the previous recorded point are dropped.
/// This decimation bounds path length and per-event cost; it is policy,
/// not smoothing.
pub const MIN_POINT_DISTANCE: f64 = 5.0;

/// A gesture must accumulate more than this many decimated points to be
/// promoted to a [`DrawingPath`].
pub const MIN_PROMOTION_POINTS: usize = 3;

/// Accumulates a touch-drag gesture into a down-sampled point list.
///
/// The state machine is two-state: idle or capturing. [`begin`] always
/// starts fresh (silently abandoning any capture in progress; input is
/// assumed single-touch), [`end`] always returns to idle whether or not
/// a path was produced, and [`cancel`] discards in-progress state when
/// a competing gesture recognizer claims the touch.
///
/// [`begin`]: Self::begin
/// [`end`]: Self::end
/// [`cancel`]: Self::cancel
///
/// # Example
///
/// ```
/// use annotate_stroke::FreehandPathCapture;
/// use nalgebra::Point2;
///
/// let mut capture = FreehandPathCapture::new();
/// capture.begin(Point2::new(0.0, 0.0));
/// capture.extend(Point2::new(2.0, 0.0)); // < 5 units → dropped
/// capture.extend(Point2::new(8.0, 0.0));
/// assert_eq!(capture.points().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FreehandPathCapture {
    points: Vec<Point2<f64>>,
    capturing: bool,
}

impl FreehandPathCapture {
    /// Create an idle capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Points recorded so far, for live stroke preview.
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Start a new path at `point`, discarding any capture in progress.
    pub fn begin(&mut self, point: Point2<f64>) {
        self.points.clear();
        self.points.push(point);
        self.capturing = true;
    }

    /// Append `point` if it is at least [`MIN_POINT_DISTANCE`] from the
    /// last recorded point; otherwise drop it.
    ///
    /// Ignored while idle (a stray move event with no preceding begin).
    pub fn extend(&mut self, point: Point2<f64>) {
        if !self.capturing {
            return;
        }
        // begin() guarantees at least one point while capturing
        if let Some(last) = self.points.last() {
            if (point - last).norm() > MIN_POINT_DISTANCE {
                self.points.push(point);
            }
        }
    }

    /// Finalize the gesture.
    ///
    /// Returns `None` if the accumulated point count is too small to
    /// form a region (≤ [`MIN_PROMOTION_POINTS`]); otherwise transfers
    /// ownership of the points into a new [`DrawingPath`]. Either way
    /// the capture returns to idle.
    pub fn end(&mut self) -> Option<DrawingPath> {
        self.capturing = false;
        if self.points.len() <= MIN_PROMOTION_POINTS {
            self.points.clear();
            return None;
        }
        Some(DrawingPath::from_raw(std::mem::take(&mut self.points)))
    }

    /// Discard the in-progress gesture without emitting a path.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.capturing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn decimates_close_points() {
        let mut capture = FreehandPathCapture::new();
        capture.begin(p(0.0, 0.0));
        capture.extend(p(3.0, 0.0)); // dropped
        capture.extend(p(4.9, 0.0)); // dropped
        capture.extend(p(6.0, 0.0)); // kept
        capture.extend(p(7.0, 0.0)); // dropped (1 unit from last kept)
        capture.extend(p(12.0, 0.0)); // kept
        assert_eq!(capture.points().len(), 3);
    }

    #[test]
    fn short_gesture_yields_no_path() {
        let mut capture = FreehandPathCapture::new();
        capture.begin(p(0.0, 0.0));
        capture.extend(p(10.0, 0.0));
        capture.extend(p(20.0, 0.0));
        // exactly 3 points: not enough
        assert!(capture.end().is_none());
        assert!(!capture.is_capturing());
        assert!(capture.points().is_empty());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn long_gesture_yields_path() {
        let mut capture = FreehandPathCapture::new();
        capture.begin(p(0.0, 0.0));
        for i in 1..6 {
            capture.extend(p(f64::from(i) * 10.0, 0.0));
        }
        let path = capture.end().unwrap();
        assert_eq!(path.points.len(), 6);
        assert!(!capture.is_capturing());
    }

    #[test]
    fn begin_abandons_in_progress_capture() {
        let mut capture = FreehandPathCapture::new();
        capture.begin(p(0.0, 0.0));
        capture.extend(p(10.0, 0.0));
        capture.begin(p(100.0, 100.0));
        assert_eq!(capture.points(), &[p(100.0, 100.0)]);
    }

    #[test]
    fn cancel_discards_state() {
        let mut capture = FreehandPathCapture::new();
        capture.begin(p(0.0, 0.0));
        for i in 1..10 {
            capture.extend(p(f64::from(i) * 10.0, 0.0));
        }
        capture.cancel();
        assert!(!capture.is_capturing());
        assert!(capture.end().is_none());
    }

    #[test]
    fn extend_while_idle_is_ignored() {
        let mut capture = FreehandPathCapture::new();
        capture.extend(p(10.0, 10.0));
        assert!(capture.points().is_empty());
    }
}
