use crate::error::Result;
use crate::geometry::PathSet;

use super::clip::ClipOptions;
use super::engine::boolean_execute;
use super::select::{ClipOperation, FillRule};

/// Resolves self-intersections and overlaps of a single path set.
///
/// The result describes the set's filled region under the chosen fill rule
/// as simple, non-crossing paths with counter-clockwise outers and clockwise
/// holes.
pub struct Simplify<'a> {
    paths: &'a PathSet,
    fill_rule: FillRule,
    preserve_collinear: bool,
}

impl<'a> Simplify<'a> {
    /// Creates a new `Simplify` operation using the even-odd rule.
    #[must_use]
    pub fn new(paths: &'a PathSet) -> Self {
        Self {
            paths,
            fill_rule: FillRule::default(),
            preserve_collinear: false,
        }
    }

    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    #[must_use]
    pub fn with_preserve_collinear(mut self, preserve: bool) -> Self {
        self.preserve_collinear = preserve;
        self
    }

    /// Executes the simplification.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is out of range or noding fails.
    pub fn execute(&self) -> Result<PathSet> {
        let options = ClipOptions {
            subject_fill: self.fill_rule,
            preserve_collinear: self.preserve_collinear,
            ..ClipOptions::default()
        };
        boolean_execute(self.paths, &PathSet::new(), ClipOperation::Union, &options)
    }
}
