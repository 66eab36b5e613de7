use crate::error::Result;
use crate::geometry::PathSet;
use crate::math::intersect_2d::on_segment;
use crate::math::polygon_2d::winding_number;
use crate::math::IntPoint;
use crate::operations::boolean::{FillRule, Simplify};

/// Classification of a point relative to a filled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies a point as inside, outside, or on the boundary of the region
/// `paths` fills under `fill_rule`.
///
/// The boundary is taken from the simplified paths, so edges buried inside
/// the filled region (shared edges, overlaps) are not boundary. Inside and
/// outside are decided from the exact winding numbers of the input paths;
/// only a point lying on a buried input edge falls back to the winding of
/// the simplified boundary.
///
/// # Errors
///
/// Returns an error if the paths cannot be simplified.
pub fn classify_point(
    point: IntPoint,
    paths: &PathSet,
    fill_rule: FillRule,
) -> Result<PointClassification> {
    let region = Simplify::new(paths).with_fill_rule(fill_rule).execute()?;

    if region.edges().any(|(a, b)| on_segment(point, a, b)) {
        return Ok(PointClassification::OnBoundary);
    }

    let filled = if paths.edges().any(|(a, b)| on_segment(point, a, b)) {
        winding_at(point, &region) != 0
    } else {
        fill_rule.is_filled(winding_at(point, paths))
    };
    Ok(if filled {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    })
}

fn winding_at(point: IntPoint, paths: &PathSet) -> i32 {
    paths
        .iter()
        .map(|path| winding_number(point, &path.points))
        .sum()
}
