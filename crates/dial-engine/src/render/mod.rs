//! GPU rendering subsystem.
//!
//! The shape renderer consumes a `scene` draw list and issues GPU commands via
//! wgpu. It owns its GPU resources (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
