use chrono::Local;

use crate::angles::TimeOfDay;

/// Where the clock reads the current time from.
///
/// The app reads the host's local time; tests pin the clock with [`FixedTime`].
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// Host local time (system timezone) via chrono.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_time(&Local::now())
    }
}

/// Always reports the same time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedTime(pub TimeOfDay);

impl TimeSource for FixedTime {
    fn now(&self) -> TimeOfDay {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_is_stable() {
        let t = TimeOfDay::new(6, 30, 15).unwrap();
        let src = FixedTime(t);
        assert_eq!(src.now(), t);
        assert_eq!(src.now(), t);
    }

    #[test]
    fn local_time_is_in_range() {
        let now = LocalTime.now();
        assert!(TimeOfDay::new(now.hours(), now.minutes(), now.seconds()).is_some());
    }
}
