use std::time::Instant;

use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// When the app wants its next frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FramePacing {
    /// Redraw as fast as the surface presents.
    Continuous,
    /// Sleep until the instant, then redraw once.
    WakeAt(Instant),
    /// No further frames; the runtime shuts down.
    Stop,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Asked each time the event loop is about to sleep.
    fn pacing(&mut self, now: Instant) -> FramePacing {
        let _ = now;
        FramePacing::Continuous
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
