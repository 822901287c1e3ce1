use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken when the frame started.
    pub now: Instant,

    /// Time since the previous frame. Zero for the first one.
    pub since_last: Duration,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots for one window.
///
/// Frames here are irregular (OS exposes plus timed ticks), so no delta
/// clamping is applied; `since_last` is informational.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps a new frame at `Instant::now()`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Stamps a new frame at `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let since_last = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);

        let ft = FrameTime { now, since_last, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
