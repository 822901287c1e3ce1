//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application drawn on it, plus the per-frame context handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl, FramePacing};
pub use ctx::{FrameCtx, WindowCtx};
