pub mod angle_2d;

/// Integer 2D point, the coordinate type of every suture endpoint.
pub type Point = nalgebra::Point2<i64>;

/// Integer 2D displacement between two [`Point`]s.
pub type Offset = nalgebra::Vector2<i64>;

/// Real-valued 2D point, used where division leaves the integer grid.
pub type Point2f = nalgebra::Point2<f64>;

/// Lifts an integer point onto the real plane.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_real(p: &Point) -> Point2f {
    Point2f::new(p.x as f64, p.y as f64)
}
