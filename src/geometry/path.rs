use std::fmt;

use crate::error::GeometryError;
use crate::math::polygon_2d::{
    dedup_closed, is_collinear, rotate_to_canonical_start, signed_area, signed_area2,
};
use crate::math::{IntPoint, Point2};

use super::IntRect;

/// Winding direction of a closed path (y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

/// A closed polygon boundary.
///
/// The last point connects back to the first; the closing point is not
/// repeated. Point order defines orientation: counter-clockwise paths have
/// positive signed area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    pub points: Vec<IntPoint>,
}

impl Path {
    /// Creates a path from its points.
    #[must_use]
    pub fn new(points: Vec<IntPoint>) -> Self {
        Self { points }
    }

    /// Creates a path from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(i64, i64)]) -> Self {
        coords.iter().copied().map(IntPoint::from).collect()
    }

    /// Creates a path from floating-point points, multiplying each coordinate
    /// by `scale` and rounding to the integer grid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Unrepresentable` if a scaled coordinate is not
    /// finite or out of range.
    pub fn from_f64(points: &[Point2], scale: f64) -> Result<Self, GeometryError> {
        points
            .iter()
            .map(|pt| IntPoint::from_f64(pt, scale))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Maps the path back to floating-point space, dividing by `scale`.
    #[must_use]
    pub fn to_f64(&self, scale: f64) -> Vec<Point2> {
        self.points.iter().map(|pt| pt.to_f64(scale)).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the closed edges `(from, to)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (IntPoint, IntPoint)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area; positive for counter-clockwise paths.
    ///
    /// Self-intersecting paths report the sum of their lobes' signed areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Twice the signed area, computed exactly.
    #[must_use]
    pub fn area2(&self) -> i128 {
        signed_area2(&self.points)
    }

    /// Orientation by signed area, or `None` when the signed area is zero.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        match self.area2().signum() {
            1 => Some(Orientation::CounterClockwise),
            -1 => Some(Orientation::Clockwise),
            _ => None,
        }
    }

    /// Returns the path with its points in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }

    /// Integer bounding rectangle, or `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<IntRect> {
        IntRect::from_points(self.points.iter().copied())
    }

    /// Checks that every coordinate is within the engine's range.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoordinateOutOfRange` for the first offending coordinate.
    pub fn check_range(&self) -> Result<(), GeometryError> {
        self.points.iter().try_for_each(|pt| pt.check_range())
    }

    /// Drops repeated points and returns `None` for paths that enclose no
    /// region: fewer than 3 distinct points, or all points on one line.
    ///
    /// A self-intersecting path whose lobes cancel in signed area still
    /// encloses a region and is kept.
    #[must_use]
    pub fn sanitized(&self) -> Option<Self> {
        let points = dedup_closed(&self.points);
        if points.len() < 3 || is_collinear(&points) {
            return None;
        }
        Some(Self::new(points))
    }

    /// Returns the path rotated to start at its lowest-leftmost point.
    #[must_use]
    pub fn canonical(&self) -> Self {
        Self::new(rotate_to_canonical_start(&self.points))
    }
}

impl From<Vec<IntPoint>> for Path {
    fn from(points: Vec<IntPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<IntPoint> for Path {
    fn from_iter<I: IntoIterator<Item = IntPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Formats as a parenthesized group: `(x0 y0 x1 y1 ...)`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, pt) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{pt}")?;
        }
        f.write_str(")")
    }
}
