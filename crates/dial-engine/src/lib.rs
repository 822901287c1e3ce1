//! Dial engine crate.
//!
//! Owns the platform + GPU runtime pieces the clock is drawn with: the window
//! loop, the wgpu device, a renderer-agnostic draw list with a canvas-style
//! path API on top, and the repeating-task ticker that paces redraws.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
