mod area;
mod classify;

pub use area::Area;
pub use classify::{classify_point, PointClassification};
