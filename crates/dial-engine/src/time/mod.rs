//! Time subsystem.
//!
//! - `FrameClock` stamps presented frames (one per window).
//! - `Ticker` is the repeating task that decides when the next frame is due,
//!   with a `StopHandle` to cancel it from anywhere.

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::{StopHandle, Ticker};
