use crate::math::IntPoint;

/// An axis-aligned integer rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Minimum corner of the rectangle.
    pub min: IntPoint,
    /// Maximum corner of the rectangle.
    pub max: IntPoint,
}

impl IntRect {
    /// Creates the smallest rectangle containing both corners.
    #[must_use]
    pub fn new(a: IntPoint, b: IntPoint) -> Self {
        Self {
            min: IntPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: IntPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Computes the bounding rectangle of a set of points.
    #[must_use]
    pub fn from_points<I: IntoIterator<Item = IntPoint>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |rect, pt| rect.expanded_to(pt)))
    }

    /// Returns the rectangle grown to contain `pt`.
    #[must_use]
    pub fn expanded_to(self, pt: IntPoint) -> Self {
        Self {
            min: IntPoint::new(self.min.x.min(pt.x), self.min.y.min(pt.y)),
            max: IntPoint::new(self.max.x.max(pt.x), self.max.y.max(pt.y)),
        }
    }

    /// Returns the smallest rectangle containing both rectangles.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.expanded_to(other.min).expanded_to(other.max)
    }

    /// Width along x.
    #[must_use]
    pub fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    /// Height along y.
    #[must_use]
    pub fn height(&self) -> i64 {
        self.max.y - self.min.y
    }

    /// Returns `true` if the rectangles share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns `true` if `pt` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, pt: IntPoint) -> bool {
        (self.min.x..=self.max.x).contains(&pt.x) && (self.min.y..=self.max.y).contains(&pt.y)
    }
}
