use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};
use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::geometry::{Path, PathSet};
use crate::math::intersect_2d::on_segment;
use crate::math::{IntPoint, Point2};
use crate::operations::boolean::Simplify;

use super::{TessellationParams, TriangleMesh};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the region a path set fills.
///
/// The paths are simplified under the fill rule first, so every boundary
/// loop has the filled region on its left. The loops become constraints of
/// a constrained Delaunay triangulation; the triangles left of a boundary
/// edge, and everything reachable from them without crossing a boundary,
/// make up the mesh.
pub struct TessellatePaths<'a> {
    paths: &'a PathSet,
    params: TessellationParams,
}

impl<'a> TessellatePaths<'a> {
    /// Creates a new `TessellatePaths` operation with default parameters.
    #[must_use]
    pub fn new(paths: &'a PathSet) -> Self {
        Self {
            paths,
            params: TessellationParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the tessellation, returning a triangle mesh in the
    /// floating-point space given by `params.scale`.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` for a non-positive
    /// scale, or an error if simplification or triangulation fails.
    pub fn execute(&self) -> Result<TriangleMesh> {
        if !(self.params.scale.is_finite() && self.params.scale > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "scale must be positive and finite, got {}",
                self.params.scale
            ))
            .into());
        }

        let region = Simplify::new(self.paths)
            .with_fill_rule(self.params.fill_rule)
            .execute()?;

        let mut boundary = BoundaryCdt::default();
        let loops = region
            .iter()
            .map(|path| boundary.insert_vertices(path))
            .collect::<Result<Vec<_>>>()?;
        for handles in &loops {
            boundary.constrain_loop(handles);
        }

        let filled = boundary.filled_faces(&region, &loops)?;
        let mesh = build_mesh(&boundary.cdt, &filled, self.params.scale)?;
        debug!(
            loops = region.len(),
            triangles = mesh.indices.len(),
            "tessellated paths"
        );
        Ok(mesh)
    }
}

/// A triangulation of boundary loops that remembers the exact grid point
/// behind every vertex.
#[derive(Default)]
struct BoundaryCdt {
    cdt: Cdt,
    points: HashMap<FixedVertexHandle, IntPoint>,
}

impl BoundaryCdt {
    #[allow(clippy::cast_precision_loss)]
    fn insert_vertices(&mut self, path: &Path) -> Result<Vec<FixedVertexHandle>> {
        path.points
            .iter()
            .map(|&pt| {
                let handle = self
                    .cdt
                    .insert(SpadePoint2::new(pt.x as f64, pt.y as f64))
                    .map_err(|e: InsertionError| {
                        TessellationError::Failed(format!("CDT insert at {pt}: {e}"))
                    })?;
                self.points.insert(handle, pt);
                Ok(handle)
            })
            .collect()
    }

    /// Constrains every loop edge. Spade splits an edge wherever another
    /// loop's vertex lies on it.
    fn constrain_loop(&mut self, handles: &[FixedVertexHandle]) {
        for (i, &from) in handles.iter().enumerate() {
            let to = handles[(i + 1) % handles.len()];
            self.cdt.add_constraint(from, to);
        }
    }

    /// Faces left of a boundary edge, flooded across unconstrained edges.
    fn filled_faces(
        &self,
        region: &PathSet,
        loops: &[Vec<FixedVertexHandle>],
    ) -> Result<HashSet<usize>> {
        let mut filled = HashSet::new();
        let mut queue: VecDeque<FixedFaceHandle<InnerTag>> = VecDeque::new();

        for (path, handles) in region.iter().zip(loops) {
            for (i, &start) in handles.iter().enumerate() {
                let end = handles[(i + 1) % handles.len()];
                let target = path.points[(i + 1) % path.len()];
                let mut at = start;
                while at != end {
                    let from = self.points[&at];
                    let step = self
                        .cdt
                        .vertex(at)
                        .out_edges()
                        .find(|edge| {
                            self.points
                                .get(&edge.to().fix())
                                .is_some_and(|&q| q != from && on_segment(q, from, target))
                        })
                        .ok_or_else(|| {
                            TessellationError::Failed(format!(
                                "boundary edge {from} -> {target} missing from triangulation"
                            ))
                        })?;
                    if let Some(face) = step.face().as_inner() {
                        if filled.insert(face.fix().index()) {
                            queue.push_back(face.fix());
                        }
                    }
                    at = step.to().fix();
                }
            }
        }

        while let Some(face) = queue.pop_front() {
            for edge in self.cdt.face(face).adjacent_edges() {
                if self.cdt.is_constraint_edge(edge.as_undirected().fix()) {
                    continue;
                }
                if let Some(next) = edge.rev().face().as_inner() {
                    if filled.insert(next.fix().index()) {
                        queue.push_back(next.fix());
                    }
                }
            }
        }
        Ok(filled)
    }
}

/// Collects interior faces into an indexed mesh, scaling coordinates back.
fn build_mesh(cdt: &Cdt, interior_faces: &HashSet<usize>, scale: f64) -> Result<TriangleMesh> {
    let mut mesh = TriangleMesh::default();
    let mut vertex_map: HashMap<usize, u32> = HashMap::new();

    for face_handle in cdt.inner_faces() {
        if !interior_faces.contains(&face_handle.fix().index()) {
            continue;
        }
        let mut tri = [0u32; 3];
        for (slot, vh) in tri.iter_mut().zip(face_handle.vertices()) {
            let idx = vh.fix().index();
            *slot = if let Some(&existing) = vertex_map.get(&idx) {
                existing
            } else {
                let new_idx = u32::try_from(mesh.vertices.len()).map_err(|_| {
                    TessellationError::Failed("mesh has too many vertices".into())
                })?;
                let pos = vh.position();
                mesh.vertices.push(Point2::new(pos.x / scale, pos.y / scale));
                vertex_map.insert(idx, new_idx);
                new_idx
            };
        }
        mesh.indices.push(tri);
    }
    Ok(mesh)
}
