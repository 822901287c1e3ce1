//! Analog clock face.
//!
//! Samples local wall-clock time once per tick, turns it into hand angles and
//! paints the face onto any [`dial_engine::scene::Canvas`]. [`ClockApp`] plugs
//! the whole thing into the engine runtime.

pub mod angles;
pub mod app;
pub mod face;
pub mod style;
pub mod time_source;

pub use angles::{angle_between, angles, hand_tip, to_canvas_radians, AngleTriple, TimeOfDay};
pub use app::ClockApp;
pub use face::ClockRenderer;
pub use style::{ClockStyle, HandStyle};
pub use time_source::{FixedTime, LocalTime, TimeSource};
