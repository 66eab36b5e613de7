use std::collections::BTreeMap;

use crate::math::IntPoint;

use super::noding::Segment;
use super::select::Winding;

/// An undirected edge between two noded vertices.
///
/// `lo < hi` in sweep order. `delta` is the winding to the left of the
/// directed edge `lo -> hi` minus the winding to its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Edge {
    pub lo: IntPoint,
    pub hi: IntPoint,
    pub delta: Winding,
}

impl Edge {
    pub fn is_vertical(&self) -> bool {
        self.lo.x == self.hi.x
    }
}

/// Merges coincident fragments into single edges, summing their winding
/// contributions per side.
///
/// Edges whose contributions cancel on both sides carry no boundary and are
/// dropped. The result is sorted by `(lo, hi)`.
pub(super) fn merge_fragments(fragments: &[Segment]) -> Vec<Edge> {
    let mut merged: BTreeMap<(IntPoint, IntPoint), Winding> = BTreeMap::new();
    for frag in fragments {
        let (key, sign) = if frag.a < frag.b {
            ((frag.a, frag.b), 1)
        } else {
            ((frag.b, frag.a), -1)
        };
        *merged.entry(key).or_default() += Winding::of(frag.side, sign);
    }
    merged
        .into_iter()
        .filter(|(_, delta)| !delta.is_zero())
        .map(|((lo, hi), delta)| Edge { lo, hi, delta })
        .collect()
}
