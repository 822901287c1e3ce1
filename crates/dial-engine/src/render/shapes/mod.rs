//! Shape renderer.
//!
//! Every draw command becomes one instance of a unit quad stretched over the
//! command's bounds; the fragment shader evaluates the shape's signed
//! distance. One pipeline for all shapes keeps cross-shape paint order intact
//! in a single instanced draw.

mod common;
mod instance;
mod renderer;

pub use renderer::ShapeRenderer;
