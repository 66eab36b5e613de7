use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use slotmap::SlotMap;

use crate::error::OperationError;
use crate::geometry::{Path, PathSet};
use crate::math::intersect_2d::cross;
use crate::math::polygon_2d::{rotate_to_canonical_start, signed_area2, strip_collinear};
use crate::math::IntPoint;

use super::clip::ClipOptions;

slotmap::new_key_type! {
    struct NodeId;
    struct LinkId;
}

#[derive(Debug)]
struct Node {
    point: IntPoint,
    outgoing: Vec<LinkId>,
}

#[derive(Debug)]
struct Link {
    from: NodeId,
    to: NodeId,
    used: bool,
}

/// Directed graph of result boundary edges.
#[derive(Debug, Default)]
struct BoundaryGraph {
    nodes: SlotMap<NodeId, Node>,
    links: SlotMap<LinkId, Link>,
    by_point: BTreeMap<IntPoint, NodeId>,
    order: Vec<LinkId>,
}

impl BoundaryGraph {
    fn node_at(&mut self, point: IntPoint) -> NodeId {
        if let Some(&id) = self.by_point.get(&point) {
            return id;
        }
        let id = self.nodes.insert(Node {
            point,
            outgoing: Vec::new(),
        });
        self.by_point.insert(point, id);
        id
    }

    fn add_link(&mut self, from: IntPoint, to: IntPoint) {
        let from = self.node_at(from);
        let to = self.node_at(to);
        let link = self.links.insert(Link {
            from,
            to,
            used: false,
        });
        self.nodes[from].outgoing.push(link);
        self.order.push(link);
    }

    fn direction(&self, link: LinkId) -> (i128, i128) {
        let link = &self.links[link];
        let a = self.nodes[link.from].point;
        let b = self.nodes[link.to].point;
        (i128::from(b.x - a.x), i128::from(b.y - a.y))
    }

    /// Picks the unused outgoing link at the end of `incoming` making the
    /// smallest clockwise turn from the reversed incoming direction.
    fn next_link(&self, incoming: LinkId) -> Option<LinkId> {
        let (ix, iy) = self.direction(incoming);
        let back = (-ix, -iy);
        let node = &self.nodes[self.links[incoming].to];
        node.outgoing
            .iter()
            .copied()
            .filter(|&l| !self.links[l].used)
            .min_by(|&a, &b| compare_turns(back, self.direction(a), self.direction(b)))
    }

    /// Follows unused links from `start` until the walk returns to its first
    /// node. Returns the visited points in order.
    fn walk(&mut self, start: LinkId) -> Result<Vec<IntPoint>, OperationError> {
        let origin = self.links[start].from;
        let mut points = vec![self.nodes[origin].point];
        let mut current = start;
        self.links[current].used = true;
        loop {
            let at = self.links[current].to;
            if at == origin {
                return Ok(points);
            }
            points.push(self.nodes[at].point);
            let next = self
                .next_link(current)
                .ok_or(OperationError::OpenBoundary {
                    at: self.nodes[at].point,
                })?;
            self.links[next].used = true;
            current = next;
        }
    }
}

/// Clockwise turn class of `d` relative to `back`: strictly clockwise within
/// a half turn, straight on, counter-clockwise, then doubling back.
fn turn_class(back: (i128, i128), d: (i128, i128)) -> u8 {
    let c = cross(back.0, back.1, d.0, d.1);
    let dot = back.0 * d.0 + back.1 * d.1;
    match c.cmp(&0) {
        Ordering::Less => 0,
        Ordering::Equal if dot < 0 => 1,
        Ordering::Greater => 2,
        Ordering::Equal => 3,
    }
}

/// Orders candidate directions by clockwise angle from `back`.
fn compare_turns(back: (i128, i128), a: (i128, i128), b: (i128, i128)) -> Ordering {
    turn_class(back, a).cmp(&turn_class(back, b)).then_with(|| {
        // Within one class both lie in the same half plane.
        cross(a.0, a.1, b.0, b.1).cmp(&0)
    })
}

/// Splits a closed walk at every repeated vertex so that each returned loop
/// visits each point once.
fn split_at_repeats(walk: Vec<IntPoint>) -> Vec<Vec<IntPoint>> {
    let mut loops = Vec::new();
    let mut stack: Vec<IntPoint> = Vec::with_capacity(walk.len());
    let mut seen: HashMap<IntPoint, usize> = HashMap::new();
    for pt in walk {
        if let Some(&i) = seen.get(&pt) {
            let tail = stack.split_off(i + 1);
            for removed in &tail {
                seen.remove(removed);
            }
            let mut inner = Vec::with_capacity(tail.len() + 1);
            inner.push(pt);
            inner.extend(tail);
            loops.push(inner);
        } else {
            seen.insert(pt, stack.len());
            stack.push(pt);
        }
    }
    loops.push(stack);
    loops
}

/// Links directed boundary edges (filled side on the left) into simple
/// closed paths.
///
/// Output paths start at their lowest-leftmost vertex and are sorted.
pub(super) fn assemble_paths(
    edges: &[(IntPoint, IntPoint)],
    options: &ClipOptions,
) -> Result<PathSet, OperationError> {
    let mut graph = BoundaryGraph::default();
    for &(from, to) in edges {
        graph.add_link(from, to);
    }

    let mut paths = Vec::new();
    let order = std::mem::take(&mut graph.order);
    for start in order {
        if graph.links[start].used {
            continue;
        }
        let walk = graph.walk(start)?;
        for mut points in split_at_repeats(walk) {
            if !options.preserve_collinear {
                points = strip_collinear(&points);
            }
            if points.len() < 3 || signed_area2(&points) == 0 {
                continue;
            }
            if options.reverse_solution {
                points.reverse();
            }
            paths.push(Path::new(rotate_to_canonical_start(&points)));
        }
    }
    paths.sort_by(|a, b| a.points.cmp(&b.points));
    Ok(PathSet::from(paths))
}
