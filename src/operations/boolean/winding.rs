use std::cmp::Ordering;

use super::merge::Edge;
use super::select::Winding;

/// Computes, for every edge, the winding on the right of `lo -> hi`.
///
/// For non-vertical edges the right side is below; for vertical edges it is
/// east. The winding on the left is the right winding plus `edge.delta`.
///
/// `edges` must be noded (no crossings, no vertex inside an edge) and sorted
/// by `lo`, as produced by `merge_fragments`.
pub(super) fn compute_windings(edges: &[Edge]) -> Vec<Winding> {
    let mut right = vec![Winding::default(); edges.len()];

    let mut xs: Vec<i64> = edges.iter().flat_map(|e| [e.lo.x, e.hi.x]).collect();
    xs.sort_unstable();
    xs.dedup();

    // Active non-vertical edges ordered bottom to top.
    let mut active: Vec<usize> = Vec::new();
    let mut starting: Vec<usize> = Vec::new();
    let mut vertical: Vec<usize> = Vec::new();
    let mut cursor = 0;

    for (k, &x) in xs.iter().enumerate() {
        active.retain(|&i| edges[i].hi.x != x);

        starting.clear();
        vertical.clear();
        while cursor < edges.len() && edges[cursor].lo.x == x {
            if edges[cursor].is_vertical() {
                vertical.push(cursor);
            } else {
                starting.push(cursor);
            }
            cursor += 1;
        }

        if !starting.is_empty() {
            // Every non-vertical edge starting here ends further right.
            let next = xs.get(k + 1).copied().unwrap_or(x);
            starting.sort_by(|&i, &j| compare_in_slab(&edges[i], &edges[j], x, next));
            for &i in &starting {
                let pos = active.partition_point(|&j| {
                    compare_in_slab(&edges[j], &edges[i], x, next) == Ordering::Less
                });
                right[i] = winding_above(edges, &right, &active, pos);
                active.insert(pos, i);
            }
        }

        for &i in &vertical {
            let y0 = edges[i].lo.y;
            let pos = active.partition_point(|&j| at_or_below(&edges[j], x, y0));
            right[i] = winding_above(edges, &right, &active, pos);
        }
    }
    right
}

/// Winding just above the `pos`-th lowest active edge's predecessor.
fn winding_above(edges: &[Edge], right: &[Winding], active: &[usize], pos: usize) -> Winding {
    match pos.checked_sub(1) {
        Some(below) => {
            let j = active[below];
            right[j] + edges[j].delta
        }
        None => Winding::default(),
    }
}

/// Height of a non-vertical edge at the slab midpoint `(x + next) / 2`,
/// as the exact fraction `num / den` with `den > 0`.
fn height_at_midpoint(edge: &Edge, x: i64, next: i64) -> (i128, i128) {
    let dx = i128::from(edge.hi.x - edge.lo.x);
    let dy = i128::from(edge.hi.y - edge.lo.y);
    let num = 2 * i128::from(edge.lo.y) * dx
        + dy * (i128::from(x) + i128::from(next) - 2 * i128::from(edge.lo.x));
    (num, 2 * dx)
}

/// Orders two non-vertical edges by height in the slab starting at `x`.
fn compare_in_slab(a: &Edge, b: &Edge, x: i64, next: i64) -> Ordering {
    let (na, da) = height_at_midpoint(a, x, next);
    let (nb, db) = height_at_midpoint(b, x, next);
    (na * db).cmp(&(nb * da))
}

/// Returns `true` if a non-vertical edge's height at `x` is at most `y`.
fn at_or_below(edge: &Edge, x: i64, y: i64) -> bool {
    let dx = i128::from(edge.hi.x - edge.lo.x);
    let dy = i128::from(edge.hi.y - edge.lo.y);
    i128::from(edge.lo.y) * dx + dy * i128::from(x - edge.lo.x) <= i128::from(y) * dx
}
