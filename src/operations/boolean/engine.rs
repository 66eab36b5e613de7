use tracing::debug;

use crate::error::Result;
use crate::geometry::{Path, PathSet};
use crate::math::IntPoint;

use super::assemble::assemble_paths;
use super::clip::ClipOptions;
use super::merge::{merge_fragments, Edge};
use super::noding::{collect_segments, node_segments};
use super::select::{ClipOperation, FillSelector, Side, Winding};
use super::winding::compute_windings;

/// Executes a boolean operation on two path sets.
///
/// Orchestrates the full pipeline: sanitizing, noding, edge merging, the
/// winding sweep, boundary selection and loop assembly.
pub(super) fn boolean_execute(
    subject: &PathSet,
    clip: &PathSet,
    operation: ClipOperation,
    options: &ClipOptions,
) -> Result<PathSet> {
    // Step 1: Validate and sanitize
    subject.check_range()?;
    clip.check_range()?;
    let subject_paths = sanitize(subject);
    let clip_paths = sanitize(clip);
    debug!(
        %operation,
        subject = subject_paths.len(),
        clip = clip_paths.len(),
        "starting clip"
    );

    if is_trivially_empty(&subject_paths, &clip_paths, operation) {
        return Ok(PathSet::new());
    }

    // Step 2: Collect directed segments
    let mut segments = Vec::new();
    collect_segments(&subject_paths, Side::Subject, &mut segments);
    collect_segments(&clip_paths, Side::Clip, &mut segments);
    debug!(segments = segments.len(), "collected segments");

    // Step 3: Node by snap rounding
    let fragments = node_segments(segments)?;

    // Step 4: Merge coincident fragments
    let edges = merge_fragments(&fragments);
    debug!(
        fragments = fragments.len(),
        edges = edges.len(),
        "merged fragments"
    );

    // Step 5: Winding sweep
    let right = compute_windings(&edges);

    // Step 6: Select boundary edges
    let selector = FillSelector {
        operation,
        subject_fill: options.subject_fill,
        clip_fill: options.clip_fill,
    };
    let boundary = select_boundary(&edges, &right, &selector);

    // Step 7: Assemble loops
    let result = assemble_paths(&boundary, options)?;
    debug!(
        boundary = boundary.len(),
        paths = result.len(),
        "clip finished"
    );
    Ok(result)
}

/// Keeps paths that enclose a region, with repeated points removed.
fn sanitize(paths: &PathSet) -> Vec<Path> {
    paths.iter().filter_map(Path::sanitized).collect()
}

/// Operations whose result is empty whenever one operand is.
fn is_trivially_empty(subject: &[Path], clip: &[Path], operation: ClipOperation) -> bool {
    match operation {
        ClipOperation::Intersection => subject.is_empty() || clip.is_empty(),
        ClipOperation::Difference => subject.is_empty(),
        ClipOperation::Union | ClipOperation::Xor => subject.is_empty() && clip.is_empty(),
    }
}

/// Emits every edge where the result's filled state differs across it,
/// directed with the filled side on its left.
fn select_boundary(
    edges: &[Edge],
    right: &[Winding],
    selector: &FillSelector,
) -> Vec<(IntPoint, IntPoint)> {
    edges
        .iter()
        .zip(right)
        .filter_map(|(edge, &below)| {
            let filled_right = selector.is_filled(below);
            let filled_left = selector.is_filled(below + edge.delta);
            match (filled_left, filled_right) {
                (true, false) => Some((edge.lo, edge.hi)),
                (false, true) => Some((edge.hi, edge.lo)),
                _ => None,
            }
        })
        .collect()
}
