use super::segment_2d::orthogonal_projection;
use super::{distance, Point2};

/// Area of a right triangle with the given base and height.
///
/// The sign of either input is ignored; degenerate inputs give 0.
#[must_use]
pub fn right_triangle_area(base: f64, height: f64) -> f64 {
    (base * height).abs() / 2.0
}

/// Area of the quadrilateral `a0 a1 b1 b0`, split along the diagonal
/// `(a0, b1)` into two right triangles.
///
/// `a0` and `b1` must be opposite vertices. Passing two adjacent vertices
/// as the pair splits along an edge and yields the wrong area.
#[must_use]
pub fn quadrilateral_area(a0: Point2, a1: Point2, b0: Point2, b1: Point2) -> f64 {
    let base = distance(a0, b1);
    let h1 = distance(a1, orthogonal_projection(a0, b1, a1));
    let h2 = distance(b0, orthogonal_projection(a0, b1, b0));
    right_triangle_area(base, h1) + right_triangle_area(base, h2)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::TOLERANCE;
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── right_triangle_area ──

    #[test]
    fn flat_triangles_have_zero_area() {
        assert!(right_triangle_area(0.0, 3.0).abs() < TOLERANCE);
        assert!(right_triangle_area(3.0, 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn three_by_five_triangle() {
        assert!((right_triangle_area(3.0, 5.0) - 7.5).abs() < TOLERANCE);
    }

    #[test]
    fn sign_of_inputs_is_ignored() {
        assert!((right_triangle_area(-3.0, 5.0) - 7.5).abs() < TOLERANCE);
        assert!((right_triangle_area(3.0, -5.0) - 7.5).abs() < TOLERANCE);
    }

    // ── quadrilateral_area ──

    #[test]
    fn collapsed_quadrilateral_has_zero_area() {
        let a = quadrilateral_area(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 0.0), p(2.0, 2.0));
        assert!(a.abs() < TOLERANCE);
    }

    #[test]
    fn unit_square() {
        let a = quadrilateral_area(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0));
        assert!((a - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn slanted_trapezium() {
        let a = quadrilateral_area(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(2.0, 1.0));
        assert!((a - 1.5).abs() < 1e-9, "a={a}");
    }

    #[test]
    fn slanted_trapezium_mirrored() {
        let a = quadrilateral_area(p(0.0, 0.0), p(0.0, -1.0), p(-1.0, 0.0), p(-2.0, -1.0));
        assert!((a - 1.5).abs() < 1e-9, "a={a}");
    }

    #[test]
    fn trapezium_with_one_obtuse_angle() {
        let a = quadrilateral_area(p(0.0, 0.0), p(2.0, 0.0), p(-1.0, 1.0), p(2.0, 1.0));
        assert!((a - 2.5).abs() < 1e-9, "a={a}");

        let a = quadrilateral_area(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 1.0), p(3.0, 1.0));
        assert!((a - 2.5).abs() < 1e-9, "a={a}");
    }

    #[test]
    fn trapezium_with_two_obtuse_angles() {
        let a = quadrilateral_area(p(0.0, 0.0), p(2.0, 0.0), p(-1.0, 1.0), p(3.0, 1.0));
        assert!((a - 3.0).abs() < 1e-9, "a={a}");
    }
}
