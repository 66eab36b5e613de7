pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod text;

pub use error::{GeoclipError, Result};
pub use geometry::{IntRect, Path, PathSet};
pub use math::IntPoint;
pub use operations::boolean::{clip, Clip, ClipOperation, ClipOptions, FillRule, Simplify};
