use std::fmt;

use super::{Point2, MAX_COORD};
use crate::error::GeometryError;

/// Integer 2D point.
///
/// Points order lexicographically by `x`, then `y`. That order is the sweep
/// order used throughout the clipping engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rounds a floating-point point, multiplied by `scale`, to the integer grid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Unrepresentable` if a scaled coordinate is not
    /// finite or exceeds [`MAX_COORD`].
    pub fn from_f64(point: &Point2, scale: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(
            scale_coordinate(point.x, scale)?,
            scale_coordinate(point.y, scale)?,
        ))
    }

    /// Maps this point back to floating-point space, dividing by `scale`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self, scale: f64) -> Point2 {
        Point2::new(self.x as f64 / scale, self.y as f64 / scale)
    }

    /// Checks that both coordinates lie within `[-MAX_COORD, MAX_COORD]`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoordinateOutOfRange` for the first offending coordinate.
    pub fn check_range(self) -> Result<(), GeometryError> {
        for value in [self.x, self.y] {
            if !(-MAX_COORD..=MAX_COORD).contains(&value) {
                return Err(GeometryError::CoordinateOutOfRange {
                    value,
                    max: MAX_COORD,
                });
            }
        }
        Ok(())
    }
}

impl From<(i64, i64)> for IntPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scale_coordinate(value: f64, scale: f64) -> Result<i64, GeometryError> {
    let scaled = (value * scale).round();
    if !scaled.is_finite() || scaled.abs() > MAX_COORD as f64 {
        return Err(GeometryError::Unrepresentable { value: value * scale });
    }
    Ok(scaled as i64)
}
