mod tessellate_paths;

pub use tessellate_paths::TessellatePaths;

use crate::math::Point2;
use crate::operations::boolean::FillRule;

/// Parameters controlling tessellation.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Fill rule used to resolve the input before triangulating.
    pub fill_rule: FillRule,
    /// Integer coordinates are divided by this factor in the output mesh.
    pub scale: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            fill_rule: FillRule::EvenOdd,
            scale: 1.0,
        }
    }
}

/// A triangle mesh covering a filled region.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Total area covered by the triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
                let ab = b - a;
                let ac = c - a;
                (ab.x * ac.y - ab.y * ac.x).abs() * 0.5
            })
            .sum()
    }
}
