use std::time::Instant;

use dial_engine::core::{App, AppControl, FrameCtx, FramePacing};
use dial_engine::render::shapes::ShapeRenderer;
use dial_engine::scene::{DrawList, DrawListCanvas, ZIndex};
use dial_engine::time::{StopHandle, Ticker};

use crate::face::ClockRenderer;
use crate::style::ClockStyle;
use crate::time_source::{LocalTime, TimeSource};

const FACE_LAYER: ZIndex = ZIndex::new(0);

/// The clock as an engine [`App`]: one tick per period, repaint on demand.
///
/// Frames the OS asks for between ticks repaint the last sample; only a due
/// tick reads the time source and advances the ticker.
pub struct ClockApp<S: TimeSource = LocalTime> {
    renderer: ClockRenderer,
    source: S,
    ticker: Ticker,

    draw_list: DrawList,
    shapes: ShapeRenderer,
}

impl ClockApp<LocalTime> {
    /// Clock on local time for a `width` x `height` logical surface.
    pub fn new(width: f32, height: f32, style: ClockStyle) -> Self {
        Self::with_source(width, height, style, LocalTime)
    }
}

impl<S: TimeSource> ClockApp<S> {
    pub fn with_source(width: f32, height: f32, style: ClockStyle, source: S) -> Self {
        let ticker = Ticker::new(style.tick_period);
        Self {
            renderer: ClockRenderer::new(width, height, style),
            source,
            ticker,
            draw_list: DrawList::new(),
            shapes: ShapeRenderer::new(),
        }
    }

    /// Handle that ends the clock from any thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.ticker.stop_handle()
    }

    pub fn renderer(&self) -> &ClockRenderer {
        &self.renderer
    }

    /// Rebuilds the draw list for a frame at `now`. Returns whether this frame
    /// is a tick (the caller completes it once presented).
    fn record_frame(&mut self, now: Instant) -> bool {
        let due = self.ticker.is_due(now);

        self.draw_list.clear();
        let mut canvas = DrawListCanvas::new(&mut self.draw_list, FACE_LAYER);
        if due {
            self.renderer.tick(&self.source, &mut canvas);
        } else {
            self.renderer.draw(&mut canvas);
        }

        due
    }
}

impl<S: TimeSource> App for ClockApp<S> {
    fn pacing(&mut self, now: Instant) -> FramePacing {
        if self.ticker.is_stopped() {
            return FramePacing::Stop;
        }
        FramePacing::WakeAt(self.ticker.next_due().unwrap_or(now))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.ticker.is_stopped() {
            return AppControl::Exit;
        }

        let tick = self.record_frame(ctx.time.now);

        let background = self.renderer.style().background;
        let (shapes, draw_list) = (&mut self.shapes, &mut self.draw_list);
        let control = ctx.render(background, |rctx, target| {
            shapes.render(rctx, target, draw_list);
        });

        if tick {
            self.ticker.complete(Instant::now());
        }

        control
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::angles::TimeOfDay;
    use crate::time_source::FixedTime;

    fn app() -> ClockApp<FixedTime> {
        let t = TimeOfDay::new(13, 30, 0).unwrap();
        ClockApp::with_source(500.0, 500.0, ClockStyle::default(), FixedTime(t))
    }

    #[test]
    fn first_frame_is_due_right_away() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.pacing(now), FramePacing::WakeAt(now));
    }

    #[test]
    fn tick_samples_and_fills_the_list() {
        let mut app = app();
        assert!(app.record_frame(Instant::now()));
        assert_eq!(app.renderer().label(), "13:30:0");
        assert_eq!(app.draw_list.len(), 23);
    }

    #[test]
    fn repaint_between_ticks_keeps_the_sample() {
        let mut app = app();
        let t0 = Instant::now();
        assert!(app.record_frame(t0));
        app.ticker.complete(t0);

        assert_eq!(app.pacing(t0), FramePacing::WakeAt(t0 + Duration::from_secs(1)));

        // An exposure before the deadline redraws without ticking.
        assert!(!app.record_frame(t0 + Duration::from_millis(400)));
        assert_eq!(app.draw_list.len(), 23);
        assert_eq!(app.ticker.completed(), 1);
    }

    #[test]
    fn stop_handle_ends_pacing() {
        let mut app = app();
        app.stop_handle().stop();
        assert_eq!(app.pacing(Instant::now()), FramePacing::Stop);
        assert!(!app.record_frame(Instant::now()));
    }
}
