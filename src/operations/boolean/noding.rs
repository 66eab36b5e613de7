use tracing::{debug, warn};

use crate::error::OperationError;
use crate::geometry::{IntRect, Path};
use crate::math::intersect_2d::{
    in_segment_interior, projection, segment_crossing, segment_touches_pixel,
};
use crate::math::IntPoint;

use super::select::Side;

/// Snap-rounding passes attempted before giving up.
pub(super) const MAX_NODING_PASSES: usize = 8;

/// A directed input segment tagged with its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Segment {
    pub a: IntPoint,
    pub b: IntPoint,
    pub side: Side,
}

impl Segment {
    fn bounds(&self) -> IntRect {
        IntRect::new(self.a, self.b)
    }
}

/// Turns every edge of every path into a directed segment.
pub(super) fn collect_segments(paths: &[Path], side: Side, out: &mut Vec<Segment>) {
    for path in paths {
        out.extend(path.edges().map(|(a, b)| Segment { a, b, side }));
    }
}

/// A proper crossing between two segments, rounded to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Crossing {
    first: usize,
    second: usize,
    point: IntPoint,
}

/// Splits segments until no two of them cross and no vertex lies inside a
/// segment.
///
/// Hot pixels are every endpoint plus every crossing rounded to the grid.
/// Each input segment is routed once through the centres of all hot pixels
/// it touches, then the fragments are split exactly wherever a vertex lands
/// on another fragment. Should two rounded fragments still cross, their
/// rounded crossing becomes a hot pixel and a forced stop on both input
/// segments, and routing starts over from the inputs.
pub(super) fn node_segments(segments: Vec<Segment>) -> Result<Vec<Segment>, OperationError> {
    let crossings = find_crossings(&segments);
    let mut pixels = hot_pixels(&segments, crossings.iter().map(|c| c.point));
    let mut forced: Vec<Vec<IntPoint>> = vec![Vec::new(); segments.len()];

    for pass in 0..MAX_NODING_PASSES {
        let (fragments, origins) = split_at_vertices(snap_round(&segments, &pixels, &forced));
        let crossings = find_crossings(&fragments);
        if crossings.is_empty() {
            debug!(
                pass,
                pixels = pixels.len(),
                fragments = fragments.len(),
                "noding converged"
            );
            return Ok(fragments);
        }
        warn!(
            pass,
            crossings = crossings.len(),
            "rounded fragments still cross, forcing their crossing pixels"
        );

        let mut grew = false;
        for crossing in crossings {
            if let Err(at) = pixels.binary_search(&crossing.point) {
                pixels.insert(at, crossing.point);
                grew = true;
            }
            for origin in [origins[crossing.first], origins[crossing.second]] {
                if !forced[origin].contains(&crossing.point) {
                    forced[origin].push(crossing.point);
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }
    Err(OperationError::NodingFailed {
        iterations: MAX_NODING_PASSES,
    })
}

/// Sweeps segment bounding boxes in x order and reports every proper
/// crossing between two segments.
fn find_crossings(segments: &[Segment]) -> Vec<Crossing> {
    let mut order: Vec<(IntRect, usize)> = segments
        .iter()
        .enumerate()
        .map(|(i, s)| (s.bounds(), i))
        .collect();
    order.sort_by_key(|(rect, i)| (rect.min.x, *i));

    let mut crossings = Vec::new();
    for (k, (rect, i)) in order.iter().enumerate() {
        let s = &segments[*i];
        for (other_rect, j) in &order[k + 1..] {
            if other_rect.min.x > rect.max.x {
                break;
            }
            if !rect.overlaps(other_rect) {
                continue;
            }
            let t = &segments[*j];
            if let Some(point) = segment_crossing(s.a, s.b, t.a, t.b) {
                crossings.push(Crossing {
                    first: *i,
                    second: *j,
                    point,
                });
            }
        }
    }
    crossings
}

/// All segment endpoints plus the given crossings, sorted and deduplicated.
fn hot_pixels(segments: &[Segment], crossings: impl Iterator<Item = IntPoint>) -> Vec<IntPoint> {
    let mut pixels: Vec<IntPoint> = crossings.collect();
    pixels.reserve(segments.len() * 2);
    for s in segments {
        pixels.push(s.a);
        pixels.push(s.b);
    }
    pixels.sort_unstable();
    pixels.dedup();
    pixels
}

/// Points in `sorted` whose x lies within `rect`'s x extent.
fn x_window<'p>(sorted: &'p [IntPoint], rect: &IntRect) -> &'p [IntPoint] {
    let start = sorted.partition_point(|p| p.x < rect.min.x);
    let end = sorted.partition_point(|p| p.x <= rect.max.x);
    &sorted[start..end]
}

/// Reroutes each segment through every hot pixel it touches plus its forced
/// stops, ordered along the segment. Each fragment is paired with the index
/// of the segment it came from.
fn snap_round(
    segments: &[Segment],
    pixels: &[IntPoint],
    forced: &[Vec<IntPoint>],
) -> Vec<(usize, Segment)> {
    let mut fragments = Vec::with_capacity(segments.len());
    let mut stops: Vec<IntPoint> = Vec::new();
    for (origin, s) in segments.iter().enumerate() {
        let rect = s.bounds();
        stops.clear();
        stops.extend(x_window(pixels, &rect).iter().copied().filter(|&p| {
            (rect.min.y..=rect.max.y).contains(&p.y) && segment_touches_pixel(s.a, s.b, p)
        }));
        stops.extend_from_slice(&forced[origin]);
        stops.retain(|&p| p != s.a && p != s.b);
        stops.sort_by(|&p, &q| {
            projection(p, s.a, s.b)
                .cmp(&projection(q, s.a, s.b))
                .then_with(|| p.cmp(&q))
        });
        stops.dedup();

        let mut from = s.a;
        for &to in stops.iter().chain(std::iter::once(&s.b)) {
            if to != from {
                fragments.push((
                    origin,
                    Segment {
                        a: from,
                        b: to,
                        side: s.side,
                    },
                ));
                from = to;
            }
        }
    }
    fragments
}

/// Splits every fragment at the vertices lying strictly inside it.
///
/// The pieces cover exactly the same points, so no new contacts appear.
/// Returns the pieces and, in parallel, the input segment each came from.
fn split_at_vertices(routed: Vec<(usize, Segment)>) -> (Vec<Segment>, Vec<usize>) {
    let mut vertices: Vec<IntPoint> = routed.iter().flat_map(|(_, s)| [s.a, s.b]).collect();
    vertices.sort_unstable();
    vertices.dedup();

    let mut pieces = Vec::with_capacity(routed.len());
    let mut origins = Vec::with_capacity(routed.len());
    let mut inner: Vec<IntPoint> = Vec::new();
    for (origin, s) in routed {
        inner.clear();
        inner.extend(
            x_window(&vertices, &s.bounds())
                .iter()
                .copied()
                .filter(|&p| in_segment_interior(p, s.a, s.b)),
        );
        inner.sort_by_key(|&p| projection(p, s.a, s.b));

        let mut from = s.a;
        for &to in inner.iter().chain(std::iter::once(&s.b)) {
            pieces.push(Segment {
                a: from,
                b: to,
                side: s.side,
            });
            origins.push(origin);
            from = to;
        }
    }
    (pieces, origins)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seg(a: (i64, i64), b: (i64, i64), side: Side) -> Segment {
        Segment {
            a: a.into(),
            b: b.into(),
            side,
        }
    }

    fn has_fragment(fragments: &[Segment], a: (i64, i64), b: (i64, i64)) -> bool {
        let (a, b) = (IntPoint::from(a), IntPoint::from(b));
        fragments.iter().any(|f| f.a == a && f.b == b)
    }

    #[test]
    fn clean_input_is_unchanged() {
        let segments = vec![
            seg((0, 0), (4, 0), Side::Subject),
            seg((4, 0), (4, 4), Side::Subject),
            seg((4, 4), (0, 0), Side::Subject),
        ];
        assert!(find_crossings(&segments).is_empty());
        assert_eq!(node_segments(segments.clone()).unwrap(), segments);
    }

    #[test]
    fn crossing_splits_both_segments() {
        let segments = vec![
            seg((0, 2), (4, 2), Side::Subject),
            seg((2, 0), (2, 4), Side::Clip),
        ];
        let noded = node_segments(segments).unwrap();
        assert_eq!(noded.len(), 4);
        assert!(has_fragment(&noded, (0, 2), (2, 2)));
        assert!(has_fragment(&noded, (2, 2), (4, 2)));
        assert!(has_fragment(&noded, (2, 0), (2, 2)));
        assert!(has_fragment(&noded, (2, 2), (2, 4)));
        assert!(noded
            .iter()
            .filter(|f| f.a.x == 2 && f.b.x == 2)
            .all(|f| f.side == Side::Clip));
    }

    #[test]
    fn t_junction_splits_the_touched_segment() {
        let segments = vec![
            seg((0, 0), (6, 0), Side::Subject),
            seg((3, 0), (3, 5), Side::Subject),
        ];
        let noded = node_segments(segments).unwrap();
        assert!(has_fragment(&noded, (0, 0), (3, 0)));
        assert!(has_fragment(&noded, (3, 0), (6, 0)));
        assert!(has_fragment(&noded, (3, 0), (3, 5)));
        assert_eq!(noded.len(), 3);
    }

    #[test]
    fn collinear_overlap_is_split_at_shared_endpoints() {
        let segments = vec![
            seg((0, 0), (4, 0), Side::Subject),
            seg((6, 0), (2, 0), Side::Clip),
        ];
        let noded = node_segments(segments).unwrap();
        assert!(has_fragment(&noded, (0, 0), (2, 0)));
        assert!(has_fragment(&noded, (2, 0), (4, 0)));
        assert!(has_fragment(&noded, (6, 0), (4, 0)));
        assert!(has_fragment(&noded, (4, 0), (2, 0)));
        assert_eq!(noded.len(), 4);
    }

    #[test]
    fn rounded_crossing_snaps_nearby_segments() {
        // Crossing at (1.5, 1.5) snaps to (2, 2).
        let segments = vec![
            seg((0, 0), (3, 3), Side::Subject),
            seg((0, 3), (3, 0), Side::Clip),
        ];
        let noded = node_segments(segments).unwrap();
        assert!(find_crossings(&noded).is_empty());
        assert!(has_fragment(&noded, (0, 0), (2, 2)));
        assert!(has_fragment(&noded, (2, 2), (3, 3)));
        assert!(has_fragment(&noded, (0, 3), (2, 2)));
        assert!(has_fragment(&noded, (2, 2), (3, 0)));
    }

    #[test]
    fn fragments_keep_direction() {
        let segments = vec![
            seg((4, 2), (0, 2), Side::Subject),
            seg((2, 4), (2, 0), Side::Subject),
        ];
        let noded = node_segments(segments).unwrap();
        assert!(has_fragment(&noded, (4, 2), (2, 2)));
        assert!(has_fragment(&noded, (2, 2), (0, 2)));
    }

    fn path_segments(coords: &[(i64, i64)], side: Side) -> Vec<Segment> {
        let mut out = Vec::new();
        collect_segments(&[Path::from_coords(coords)], side, &mut out);
        out
    }

    fn assert_fully_noded(fragments: &[Segment]) {
        assert!(find_crossings(fragments).is_empty());
        for f in fragments {
            for g in fragments {
                assert!(
                    !in_segment_interior(g.a, f.a, f.b),
                    "{} lies inside {} -> {}",
                    g.a,
                    f.a,
                    f.b
                );
            }
        }
    }

    #[test]
    fn crossing_on_pixel_corner_converges_in_one_pass() {
        // The edge (9,11)->(4,8) crosses (7,9)->(5,11) at (6.5, 9.5), a corner
        // shared by four hot pixels. Only the pixel of (7, 10) owns it.
        let segments = path_segments(
            &[(7, 9), (5, 11), (6, 10), (9, 11), (4, 8), (1, 10)],
            Side::Subject,
        );
        let noded = node_segments(segments).unwrap();
        assert_fully_noded(&noded);
        assert_eq!(noded.len(), 12);
        assert!(has_fragment(&noded, (7, 9), (7, 10)));
        assert!(has_fragment(&noded, (9, 11), (7, 10)));
        assert!(has_fragment(&noded, (7, 10), (6, 9)));
        assert!(has_fragment(&noded, (6, 9), (4, 8)));
        assert!(has_fragment(&noded, (1, 10), (6, 9)));
        assert!(has_fragment(&noded, (6, 9), (7, 9)));
        assert!(!has_fragment(&noded, (7, 9), (6, 9)));
    }

    #[test]
    fn vertices_split_fragments_exactly() {
        let routed = vec![
            (0, seg((0, 0), (6, 0), Side::Subject)),
            (1, seg((4, 0), (2, 0), Side::Clip)),
            (2, seg((3, 0), (3, 3), Side::Clip)),
        ];
        let (pieces, origins) = split_at_vertices(routed);
        assert_eq!(
            pieces,
            vec![
                seg((0, 0), (2, 0), Side::Subject),
                seg((2, 0), (3, 0), Side::Subject),
                seg((3, 0), (4, 0), Side::Subject),
                seg((4, 0), (6, 0), Side::Subject),
                seg((4, 0), (3, 0), Side::Clip),
                seg((3, 0), (2, 0), Side::Clip),
                seg((3, 0), (3, 3), Side::Clip),
            ]
        );
        assert_eq!(origins, vec![0, 0, 0, 0, 1, 1, 2]);
    }

    #[test]
    fn forced_stop_reroutes_a_segment() {
        let segments = vec![seg((0, 0), (6, 0), Side::Subject)];
        let forced = vec![vec![IntPoint::new(3, 1)]];
        let routed = snap_round(&segments, &[], &forced);
        let fragments: Vec<Segment> = routed.into_iter().map(|(_, f)| f).collect();
        assert_eq!(
            fragments,
            vec![
                seg((0, 0), (3, 1), Side::Subject),
                seg((3, 1), (6, 0), Side::Subject),
            ]
        );
    }

    #[test]
    fn dense_star_nodes_cleanly() {
        // Pentagram: five edges crossing pairwise at off-grid points.
        let segments = path_segments(
            &[(0, 0), (10, 30), (20, 0), (-6, 19), (26, 19)],
            Side::Subject,
        );
        assert_fully_noded(&node_segments(segments).unwrap());
    }
}
