use crate::error::{GeometryError, Result};
use crate::math::{distance, Point2};

use super::Segment;

/// An ordered sequence of points describing a piecewise-linear trajectory.
///
/// Consecutive points may coincide; the zero-length segment between them
/// contributes nothing to the path length.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point2>,
}

impl Path {
    /// Creates a path from its points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of points in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of segments in this path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the segment from point `i` to point `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i + 1` is out of bounds.
    #[must_use]
    pub fn segment(&self, i: usize) -> Segment {
        Segment::new(self.points[i], self.points[i + 1])
    }

    /// Returns the total length of the path, summed segment by segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] if the path has fewer
    /// than two points.
    pub fn length(&self) -> Result<f64> {
        if self.points.len() < 2 {
            return Err(GeometryError::DegenerateInput(format!(
                "path length needs at least 2 points, got {}",
                self.points.len()
            ))
            .into());
        }
        let mut length = 0.0;
        for pair in self.points.windows(2) {
            length += distance(pair[0], pair[1]);
        }
        Ok(length)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path(coords: &[(f64, f64)]) -> Path {
        Path::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[test]
    fn length_of_l_shaped_path() {
        let d = path(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).length().unwrap();
        assert!((d - 2.0).abs() < 1e-12, "d={d}");
    }

    #[test]
    fn length_is_direction_independent() {
        let d = path(&[(0.0, 0.0), (0.0, -1.0), (-1.0, -1.0)])
            .length()
            .unwrap();
        assert!((d - 2.0).abs() < 1e-12, "d={d}");
    }

    #[test]
    fn single_point_path_has_no_length() {
        assert!(path(&[(0.0, 0.0)]).length().is_err());
        assert!(path(&[]).length().is_err());
    }

    #[test]
    fn coincident_points_give_zero_length() {
        let d = path(&[(5.0, 5.0), (5.0, 5.0)]).length().unwrap();
        assert!(d.abs() < 1e-12, "d={d}");
    }

    #[test]
    fn segments_are_indexed_in_order() {
        let p = path(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0)]);
        assert_eq!(p.segment_count(), 2);
        let s = p.segment(1);
        assert!((s.from.x - 1.0).abs() < 1e-12);
        assert!((s.to.y - 2.0).abs() < 1e-12);
    }
}
