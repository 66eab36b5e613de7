pub mod int_point;
pub mod intersect_2d;
pub mod polygon_2d;

pub use int_point::IntPoint;

/// 2D point type for floating-point coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// Largest absolute value accepted for an input coordinate.
///
/// Every exact predicate in the engine (cross products, crossing numerators,
/// sweep comparisons) stays inside `i128` for coordinates in this range.
pub const MAX_COORD: i64 = (1 << 38) - 1;
