use super::{distance, Point2, TOLERANCE};

/// Tests whether `p` lies on the segment from `a0` to `a1`.
///
/// The point must be colinear with the segment within [`TOLERANCE`], and its
/// dot product along the segment must fall in `[0, length²]`, endpoints
/// included. A zero-length segment reports `true` for every query point.
#[must_use]
pub fn point_on_segment(a0: Point2, a1: Point2, p: Point2) -> bool {
    let dir = a1 - a0;
    let rel = p - a0;
    if dir.perp(&rel).abs() > TOLERANCE {
        return false;
    }
    let along = rel.dot(&dir);
    if along < 0.0 {
        return false;
    }
    along <= distance(a0, a1).powi(2)
}

/// Intersection point of the supporting lines of segments `a` and `b`.
///
/// Returns `None` when both lines are vertical, when their slopes are
/// exactly equal, or when the computed point lies on neither segment. A
/// point on just one of the two segments is accepted, so a crossing on the
/// extension of the other segment is still reported.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_intersection(a0: Point2, a1: Point2, b0: Point2, b1: Point2) -> Option<Point2> {
    let a_vertical = a0.x == a1.x;
    let b_vertical = b0.x == b1.x;

    let p = if a_vertical && b_vertical {
        return None;
    } else if a_vertical {
        let (slope, intercept) = slope_intercept(b1, b0);
        Point2::new(a0.x, slope * a0.x + intercept)
    } else if b_vertical {
        let (slope, intercept) = slope_intercept(a1, a0);
        Point2::new(b0.x, slope * b0.x + intercept)
    } else {
        let (slope_a, intercept_a) = slope_intercept(a0, a1);
        let (slope_b, intercept_b) = slope_intercept(b0, b1);
        if slope_a == slope_b {
            return None;
        }
        let denom = slope_a - slope_b;
        Point2::new(
            (intercept_b - intercept_a) / denom,
            (intercept_b * slope_a - intercept_a * slope_b) / denom,
        )
    };

    if point_on_segment(a0, a1, p) || point_on_segment(b0, b1, p) {
        Some(p)
    } else {
        None
    }
}

/// Orthogonal projection of `p` onto the line through `a0` and `a1`.
///
/// A point already on the segment is returned unchanged. For a vertical
/// line the foot is `(a0.x, p.y)`; otherwise the normal equations of the
/// line are solved in closed form by Cramer's rule.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn orthogonal_projection(a0: Point2, a1: Point2, p: Point2) -> Point2 {
    if point_on_segment(a0, a1, p) {
        return p;
    }
    if a0.x == a1.x {
        return Point2::new(a0.x, p.y);
    }
    // The line is y = slope * x + intercept; the normal through p gives
    // x + slope * y = c. The system's determinant is slope² + 1, never zero.
    let (slope, intercept) = slope_intercept(a0, a1);
    let c = p.x + slope * p.y;
    let denom = slope * slope + 1.0;
    Point2::new(
        (c - slope * intercept) / denom,
        (slope * c + intercept) / denom,
    )
}

/// Slope and intercept of the non-vertical line through `anchor` and
/// `other`, with the intercept evaluated at `anchor`.
fn slope_intercept(anchor: Point2, other: Point2) -> (f64, f64) {
    let slope = (other.y - anchor.y) / (other.x - anchor.x);
    let intercept = anchor.y - slope * anchor.x;
    (slope, intercept)
}
