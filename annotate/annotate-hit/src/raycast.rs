//! Ray-casting point-in-polygon test.

use nalgebra::Point2;

/// Test whether `point` lies inside `polygon`.
///
/// Standard even-odd ray casting: a horizontal ray from the point
/// toggles an inside flag at every edge crossing. Edges are taken as
/// `(i, j = i-1 mod n)`, so the wraparound edge from the last vertex
/// back to the first is included whether or not the polygon repeats its
/// first vertex. Concave and self-intersecting polygons follow the
/// even-odd rule.
///
/// Points exactly on an edge may land on either side; callers must not
/// rely on boundary behavior. Fewer than three vertices never contain
/// anything.
///
/// # Example
///
/// ```
/// use annotate_hit::point_in_polygon;
/// use nalgebra::Point2;
///
/// let square = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
/// assert!(point_in_polygon(Point2::new(5.0, 5.0), &square));
/// assert!(!point_in_polygon(Point2::new(15.0, 15.0), &square));
/// ```
#[must_use]
pub fn point_in_polygon(point: Point2<f64>, polygon: &[Point2<f64>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        // strict inequality on both ends keeps vertices from double-counting
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2<f64>> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    #[test]
    fn square_interior_and_exterior() {
        let square = unit_square();
        assert!(point_in_polygon(p(5.0, 5.0), &square));
        assert!(!point_in_polygon(p(15.0, 15.0), &square));
        assert!(!point_in_polygon(p(-1.0, 5.0), &square));
        assert!(!point_in_polygon(p(5.0, -1.0), &square));
    }

    #[test]
    fn closed_ring_equivalent_to_open_ring() {
        // repeating the first vertex must not change the result
        let mut ring = unit_square();
        ring.push(ring[0]);
        assert!(point_in_polygon(p(5.0, 5.0), &ring));
        assert!(!point_in_polygon(p(15.0, 5.0), &ring));
    }

    #[test]
    fn concave_polygon() {
        // U shape: the notch between the arms is outside
        let u = vec![
            p(0.0, 0.0),
            p(30.0, 0.0),
            p(30.0, 30.0),
            p(20.0, 30.0),
            p(20.0, 10.0),
            p(10.0, 10.0),
            p(10.0, 30.0),
            p(0.0, 30.0),
        ];
        assert!(point_in_polygon(p(5.0, 20.0), &u)); // left arm
        assert!(point_in_polygon(p(25.0, 20.0), &u)); // right arm
        assert!(point_in_polygon(p(15.0, 5.0), &u)); // bridge
        assert!(!point_in_polygon(p(15.0, 20.0), &u)); // notch
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        assert!(!point_in_polygon(p(0.0, 0.0), &[]));
        assert!(!point_in_polygon(p(0.0, 0.0), &[p(0.0, 0.0)]));
        assert!(!point_in_polygon(p(1.0, 1.0), &[p(0.0, 0.0), p(2.0, 2.0)]));
        // collinear "polygon" encloses no area
        let line = vec![p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)];
        assert!(!point_in_polygon(p(5.0, 1.0), &line));
    }

    #[test]
    fn triangle() {
        let tri = vec![p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0)];
        assert!(point_in_polygon(p(5.0, 3.0), &tri));
        assert!(!point_in_polygon(p(1.0, 8.0), &tri));
    }
}
