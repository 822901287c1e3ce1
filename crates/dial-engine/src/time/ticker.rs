use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cancels a [`Ticker`]. Cloneable and usable from any thread.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Self-rescheduling repeating task.
///
/// The first tick is due immediately. Completing a tick at `t` makes the
/// next one due at `t + period`, so time spent in the tick delays the
/// schedule instead of being caught up. A tick is never due again until the
/// previous one was completed, and never after [`StopHandle::stop`].
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
    completed: u64,
    stop: StopHandle,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            completed: 0,
            stop: StopHandle::default(),
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of completed ticks.
    #[inline]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Instant the next tick becomes due; `None` when due right away.
    #[inline]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.is_stopped() && self.next_due.is_none_or(|due| now >= due)
    }

    /// Marks the current tick finished at `finished_at` and schedules the next.
    pub fn complete(&mut self, finished_at: Instant) {
        self.completed += 1;
        self.next_due = Some(finished_at + self.period);
    }

    /// Drives the ticker on the calling thread, sleeping between ticks.
    ///
    /// `step` receives the index of the tick being run; returning
    /// `ControlFlow::Break` ends the loop after that tick. The loop also ends
    /// once the stop handle fires.
    pub fn run_blocking<F>(&mut self, mut step: F)
    where
        F: FnMut(u64) -> ControlFlow<()>,
    {
        while !self.is_stopped() {
            let now = Instant::now();
            if let Some(due) = self.next_due.filter(|&due| due > now) {
                std::thread::sleep(due - now);
                continue;
            }

            let flow = step(self.completed);
            self.complete(Instant::now());
            if flow.is_break() {
                break;
            }
        }
    }
}
