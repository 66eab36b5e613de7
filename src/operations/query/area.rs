use crate::error::Result;
use crate::geometry::PathSet;
use crate::operations::boolean::{FillRule, Simplify};

/// Computes the area of the region a path set fills.
///
/// Overlaps and self-intersections are resolved under the fill rule first,
/// so a region covered twice counts once and a figure-eight's lobes both
/// count as positive area.
pub struct Area<'a> {
    paths: &'a PathSet,
    fill_rule: FillRule,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query using the even-odd rule.
    #[must_use]
    pub fn new(paths: &'a PathSet) -> Self {
        Self {
            paths,
            fill_rule: FillRule::default(),
        }
    }

    /// Sets the fill rule used to decide what is inside.
    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Executes the query, returning the filled area.
    ///
    /// # Errors
    ///
    /// Returns an error if the paths cannot be simplified.
    pub fn execute(&self) -> Result<f64> {
        let simplified = Simplify::new(self.paths)
            .with_fill_rule(self.fill_rule)
            .execute()?;
        Ok(simplified.signed_area())
    }
}
