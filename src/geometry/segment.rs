use crate::math::segment_2d::{orthogonal_projection, point_on_segment, segment_intersection};
use crate::math::{distance, Point2};

/// A directed straight segment between two path points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
}

impl Segment {
    /// Creates a new segment from `from` to `to`.
    #[must_use]
    pub fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(self.from, self.to)
    }

    /// Tests whether `p` lies on this segment.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        point_on_segment(self.from, self.to, p)
    }

    /// Returns the point where this segment's supporting line meets
    /// `other`'s, if it lies on at least one of the two segments.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point2> {
        segment_intersection(self.from, self.to, other.from, other.to)
    }

    /// Projects `p` orthogonally onto this segment's supporting line.
    #[must_use]
    pub fn project(&self, p: Point2) -> Point2 {
        orthogonal_projection(self.from, self.to, p)
    }
}
