mod assemble;
mod clip;
mod engine;
mod merge;
mod noding;
mod select;
mod simplify;
mod winding;

pub use clip::{clip, Clip, ClipOptions};
pub use select::{ClipOperation, FillRule, Side, Winding};
pub use simplify::Simplify;
