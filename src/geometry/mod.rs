pub mod path;
pub mod path_set;
pub mod rect;

pub use path::{Orientation, Path};
pub use path_set::PathSet;
pub use rect::IntRect;
