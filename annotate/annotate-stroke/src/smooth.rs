//! Catmull-Rom smoothing and loop closing.
//!
//! A raw captured stroke is jagged (decimation keeps points ≥ 5 units
//! apart) and almost never ends where it started. [`smooth`] rounds it
//! with Catmull-Rom interpolation; [`close_loop`] then forces a polygon
//! loop using a two-tier policy:
//!
//! - a gap of ≤ 20 units closes directly by appending the first point;
//! - a larger gap is bridged by `ceil(gap / 10)` evenly spaced points,
//!   so the closing run reads as a drawn segment rather than a teleport.
//!
//! Both tiers end exactly on the first point, so the output is always a
//! closed polygon ring.

use nalgebra::Point2;

/// Endpoint gap above which closing points are synthesized, screen units.
pub const CLOSE_GAP_THRESHOLD: f64 = 20.0;

/// Approximate spacing of synthesized closing points, screen units.
pub const CLOSE_STEP_LENGTH: f64 = 10.0;

/// Parametric step between interpolated points; four samples are
/// inserted between each pair of originals.
const SMOOTH_STEP: f64 = 0.2;

/// Catmull-Rom interpolation of one axis pair at parameter `t`.
fn catmull_rom(p0: Point2<f64>, p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>, t: f64) -> Point2<f64> {
    let t2 = t * t;
    let t3 = t2 * t;
    let axis = |p0: f64, p1: f64, p2: f64, p3: f64| {
        0.5 * ((2.0 * p1)
            + (-p0 + p2) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
            + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
    };
    Point2::new(
        axis(p0.x, p1.x, p2.x, p3.x),
        axis(p0.y, p1.y, p2.y, p3.y),
    )
}

/// Smooth a raw point sequence with Catmull-Rom interpolation.
///
/// Every original point is preserved exactly; four interpolated points
/// are inserted between each consecutive pair, using clamped boundary
/// indices for the first and last windows. Sequences shorter than three
/// points are returned unchanged.
///
/// # Example
///
/// ```
/// use annotate_stroke::smooth;
/// use nalgebra::Point2;
///
/// let raw = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(20.0, 0.0),
/// ];
/// let smoothed = smooth(&raw);
/// // 3 originals + 4 inserted per gap
/// assert_eq!(smoothed.len(), 3 + 4 * 2);
/// assert_eq!(smoothed[0], raw[0]);
/// assert_eq!(*smoothed.last().unwrap(), raw[2]);
/// ```
#[must_use]
pub fn smooth(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let n = points.len();
    let mut out = Vec::with_capacity(n + 4 * (n - 1));
    for i in 0..n - 1 {
        // clamped 4-point window around segment (i, i+1)
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[(i + 1).min(n - 1)];
        let p3 = points[(i + 2).min(n - 1)];

        out.push(p1);
        for step in 1..=4 {
            let t = f64::from(step) * SMOOTH_STEP;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
    out.push(points[n - 1]);
    out
}

/// Smooth a stroke and force it into a closed polygon.
///
/// After smoothing, the gap between the last and first points decides
/// the closing tier: direct append for ≤ [`CLOSE_GAP_THRESHOLD`], a
/// synthesized linear run of `ceil(gap / CLOSE_STEP_LENGTH)` points for
/// anything wider. The final point always coincides with the first.
///
/// # Example
///
/// ```
/// use annotate_stroke::close_loop;
/// use nalgebra::Point2;
///
/// let raw = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(30.0, 0.0),
///     Point2::new(30.0, 30.0),
///     Point2::new(0.0, 30.0), // 30 units from the start → synthesized run
/// ];
/// let polygon = close_loop(&raw);
/// assert_eq!(*polygon.last().unwrap(), raw[0]);
/// ```
#[must_use]
pub fn close_loop(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut out = smooth(points);
    if out.is_empty() {
        return out;
    }
    let first = out[0];
    let last = out[out.len() - 1];

    let gap = (first - last).norm();
    if gap <= CLOSE_GAP_THRESHOLD {
        out.push(first);
        return out;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (gap / CLOSE_STEP_LENGTH).ceil() as usize;
    for step in 1..=steps {
        let t = step as f64 / steps as f64;
        out.push(last + (first - last) * t);
    }
    out
}
