pub mod area_2d;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).norm()
}
