//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - lower canvas-style paths (`Canvas`) into those commands

mod canvas;
mod cmd;
mod key;
mod list;
mod path;
mod z_index;

pub mod shapes;

pub use canvas::{Canvas, DrawListCanvas};
pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use path::{ArcSegment, Path, PathEl, MITER_LIMIT};
pub use shapes::Stroke;
pub use z_index::ZIndex;
