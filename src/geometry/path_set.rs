use std::fmt;

use crate::error::GeometryError;
use crate::math::IntPoint;

use super::{IntRect, Path};

/// An unordered collection of paths forming one clip operand or result.
///
/// Paths may nest, touch or cross one another; what they enclose is decided
/// by a fill rule applied to winding numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathSet {
    pub paths: Vec<Path>,
}

impl PathSet {
    /// Creates an empty path set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path.
    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Returns the path set with one more path appended.
    #[must_use]
    pub fn with_path(mut self, path: Path) -> Self {
        self.paths.push(path);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Total number of points over all paths.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Iterates over every closed edge of every path.
    pub fn edges(&self) -> impl Iterator<Item = (IntPoint, IntPoint)> + '_ {
        self.paths.iter().flat_map(Path::edges)
    }

    /// Integer bounding rectangle of all points, or `None` if there are none.
    #[must_use]
    pub fn bounds(&self) -> Option<IntRect> {
        IntRect::from_points(self.paths.iter().flat_map(|p| p.points.iter().copied()))
    }

    /// Sum of the paths' signed areas.
    ///
    /// For a clip result (counter-clockwise outers, clockwise holes) this is
    /// the area of the filled region. For arbitrary input use
    /// [`crate::operations::query::Area`], which applies a fill rule.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.paths.iter().map(Path::area).sum()
    }

    /// Returns the set with every path reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.paths.iter().map(Path::reversed).collect()
    }

    /// Checks every coordinate of every path.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoordinateOutOfRange` for the first offending coordinate.
    pub fn check_range(&self) -> Result<(), GeometryError> {
        self.paths.iter().try_for_each(Path::check_range)
    }
}

impl From<Vec<Path>> for PathSet {
    fn from(paths: Vec<Path>) -> Self {
        Self { paths }
    }
}

impl From<Path> for PathSet {
    fn from(path: Path) -> Self {
        Self { paths: vec![path] }
    }
}

impl FromIterator<Path> for PathSet {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PathSet {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// One path per line.
impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.paths {
            writeln!(f, "{path}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two_squares() -> PathSet {
        PathSet::new()
            .with_path(Path::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)]))
            .with_path(Path::from_coords(&[(10, -2), (12, -2), (12, 1), (10, 1)]))
    }

    #[test]
    fn bounds_cover_all_paths() {
        let rect = two_squares().bounds().unwrap();
        assert_eq!(rect.min, IntPoint::new(0, -2));
        assert_eq!(rect.max, IntPoint::new(12, 4));
        assert_eq!(PathSet::new().bounds(), None);
    }

    #[test]
    fn counts_and_edges() {
        let set = two_squares();
        assert_eq!(set.len(), 2);
        assert_eq!(set.point_count(), 8);
        assert_eq!(set.edges().count(), 8);
    }

    #[test]
    fn signed_area_sums_paths() {
        let set = two_squares();
        assert!((set.signed_area() - 22.0).abs() < f64::EPSILON);
        assert!((set.reversed().signed_area() + 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_one_group_per_line() {
        let set = PathSet::from(Path::from_coords(&[(0, 0), (1, 0), (0, 1)]));
        assert_eq!(set.to_string(), "(0 0 1 0 0 1)\n");
    }
}
