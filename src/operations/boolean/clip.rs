use crate::error::Result;
use crate::geometry::PathSet;

use super::engine::boolean_execute;
use super::select::{ClipOperation, FillRule};

/// Settings for a clip operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipOptions {
    /// Fill rule applied to the subject paths.
    pub subject_fill: FillRule,
    /// Fill rule applied to the clip paths.
    pub clip_fill: FillRule,
    /// Keep vertices where the result boundary runs straight on.
    pub preserve_collinear: bool,
    /// Emit outer boundaries clockwise and holes counter-clockwise.
    pub reverse_solution: bool,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            subject_fill: FillRule::EvenOdd,
            clip_fill: FillRule::EvenOdd,
            preserve_collinear: false,
            reverse_solution: false,
        }
    }
}

/// Computes a boolean combination of two path sets.
///
/// The result consists of simple closed paths that do not cross each other
/// (they may touch at vertices). Outer boundaries are counter-clockwise and
/// holes clockwise unless `reverse_solution` is set. Each path starts at its
/// lowest-leftmost point and paths are sorted, so equal inputs give equal
/// outputs.
pub struct Clip<'a> {
    subject: &'a PathSet,
    clip: &'a PathSet,
    operation: ClipOperation,
    options: ClipOptions,
}

impl<'a> Clip<'a> {
    /// Creates a new `Clip` operation with default options.
    #[must_use]
    pub fn new(subject: &'a PathSet, clip: &'a PathSet, operation: ClipOperation) -> Self {
        Self {
            subject,
            clip,
            operation,
            options: ClipOptions::default(),
        }
    }

    /// Sets the fill rules of the subject and the clip.
    #[must_use]
    pub fn with_fill_rules(mut self, subject_fill: FillRule, clip_fill: FillRule) -> Self {
        self.options.subject_fill = subject_fill;
        self.options.clip_fill = clip_fill;
        self
    }

    /// Replaces all options.
    #[must_use]
    pub fn with_options(mut self, options: ClipOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the clip.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoordinateOutOfRange` if any input coordinate
    /// exceeds [`crate::math::MAX_COORD`], or an `OperationError` if noding
    /// does not converge.
    pub fn execute(&self) -> Result<PathSet> {
        boolean_execute(self.subject, self.clip, self.operation, &self.options)
    }
}

/// Clips `subject` against `clip` with the given operation and fill rules.
///
/// # Errors
///
/// See [`Clip::execute`].
pub fn clip(
    subject: &PathSet,
    clip: &PathSet,
    operation: ClipOperation,
    subject_fill: FillRule,
    clip_fill: FillRule,
) -> Result<PathSet> {
    Clip::new(subject, clip, operation)
        .with_fill_rules(subject_fill, clip_fill)
        .execute()
}
