//! Time of day to hand angles, and hand angles to surface geometry.
//!
//! Angles are degrees clockwise from 12 o'clock unless a function says
//! otherwise.

use core::f32::consts::{FRAC_PI_2, PI};
use core::fmt;

use chrono::Timelike;
use dial_engine::coords::Vec2;

/// Wall-clock time with second resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hours: 0, minutes: 0, seconds: 0 };

    /// `None` unless `hours < 24`, `minutes < 60` and `seconds < 60`.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        (hours < 24 && minutes < 60 && seconds < 60).then_some(Self { hours, minutes, seconds })
    }

    /// Truncates any chrono time value to whole seconds.
    ///
    /// chrono keeps leap seconds in the nanosecond field, so `second()` is
    /// always below 60.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        Self {
            hours: t.hour(),
            minutes: t.minute(),
            seconds: t.second(),
        }
    }

    #[inline]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    #[inline]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

/// `H:M:S` without zero padding, e.g. `9:5:7`.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Hand angles in degrees for one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AngleTriple {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Hand angles for `time`.
///
/// The hour hand creeps half a degree per minute; seconds do not move it.
pub fn angles(time: TimeOfDay) -> AngleTriple {
    let minute = time.minutes as f32 * 6.0;
    let second = time.seconds as f32 * 6.0;
    let hour = (time.hours % 12) as f32 * 30.0 + time.minutes as f32 * 0.5;
    AngleTriple { hour, minute, second }
}

/// Smaller angular distance between two hands, in `[0, 180]`.
pub fn angle_between(a: f32, b: f32) -> f32 {
    let d = (b - a).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Clock degrees to surface radians: 12 o'clock is `-π/2`, clockwise positive.
#[inline]
pub fn to_canvas_radians(deg: f32) -> f32 {
    deg * (PI / 180.0) - FRAC_PI_2
}

/// Tip of a hand of `length` pointing at `deg`, in y-down surface space.
pub fn hand_tip(center: Vec2, length: f32, deg: f32) -> Vec2 {
    let phi = FRAC_PI_2 - deg * (PI / 180.0);
    center + Vec2::new(length * phi.cos(), -length * phi.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    fn t(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    // ── TimeOfDay ───────────────────────────────────────────────────────

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(0, 60, 0).is_none());
        assert!(TimeOfDay::new(0, 0, 60).is_none());
        assert!(TimeOfDay::new(23, 59, 59).is_some());
    }

    #[test]
    fn formats_without_padding() {
        assert_eq!(t(9, 5, 7).to_string(), "9:5:7");
        assert_eq!(t(23, 59, 59).to_string(), "23:59:59");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "0:0:0");
    }

    #[test]
    fn from_chrono_time_truncates_to_seconds() {
        let nt = chrono::NaiveTime::from_hms_milli_opt(14, 7, 9, 999).unwrap();
        assert_eq!(TimeOfDay::from_time(&nt), t(14, 7, 9));
    }

    #[test]
    fn leap_second_stays_in_range() {
        let nt = chrono::NaiveTime::from_hms_milli_opt(23, 59, 59, 1500).unwrap();
        assert_eq!(TimeOfDay::from_time(&nt).seconds(), 59);
    }

    // ── angles ──────────────────────────────────────────────────────────

    #[test]
    fn midnight_is_all_zero() {
        let a = angles(TimeOfDay::MIDNIGHT);
        assert_eq!(a, AngleTriple { hour: 0.0, minute: 0.0, second: 0.0 });
    }

    #[test]
    fn half_past_one_pm() {
        let a = angles(t(13, 30, 0));
        assert!(approx(a.hour, 45.0));
        assert!(approx(a.minute, 180.0));
        assert!(approx(a.second, 0.0));
    }

    #[test]
    fn one_second_to_midnight() {
        // 11 * 30 + 59 * 0.5: the hour hand is half a degree short of noon.
        let a = angles(t(23, 59, 59));
        assert!(approx(a.hour, 359.5));
        assert!(approx(a.minute, 354.0));
        assert!(approx(a.second, 354.0));
    }

    #[test]
    fn top_of_the_hour_has_no_creep() {
        for h in 0..24 {
            let a = angles(t(h, 0, 0));
            assert!(approx(a.hour, (h % 12) as f32 * 30.0), "hour {h}");
        }
    }

    #[test]
    fn every_time_of_day_stays_in_range() {
        for h in 0..24 {
            for m in 0..60 {
                for s in (0..60).step_by(7) {
                    let a = angles(t(h, m, s));
                    assert!((0.0..360.0).contains(&a.hour));
                    assert!((0.0..=354.0).contains(&a.minute));
                    assert!((0.0..=354.0).contains(&a.second));
                    assert!(approx(a.minute, m as f32 * 6.0));
                    assert!(approx(a.second, s as f32 * 6.0));
                }
            }
        }
    }

    #[test]
    fn am_and_pm_share_angles() {
        assert_eq!(angles(t(3, 17, 42)), angles(t(15, 17, 42)));
    }

    #[test]
    fn angles_are_deterministic() {
        let time = t(8, 41, 12);
        assert_eq!(angles(time), angles(time));
    }

    // ── geometry helpers ────────────────────────────────────────────────

    #[test]
    fn angle_between_is_symmetric_and_short() {
        assert!(approx(angle_between(10.0, 350.0), 20.0));
        assert!(approx(angle_between(350.0, 10.0), 20.0));
        assert!(approx(angle_between(0.0, 180.0), 180.0));
        assert!(approx(angle_between(45.0, 45.0), 0.0));

        for a in (0..360).step_by(13) {
            for b in (0..360).step_by(17) {
                let (a, b) = (a as f32, b as f32);
                let d = angle_between(a, b);
                assert!(approx(d, angle_between(b, a)));
                assert!((0.0..=180.0).contains(&d));
            }
        }
    }

    #[test]
    fn canvas_radians_put_noon_up() {
        assert!(approx(to_canvas_radians(0.0), -FRAC_PI_2));
        assert!(approx(to_canvas_radians(90.0), 0.0));
        assert!(approx(to_canvas_radians(180.0), FRAC_PI_2));
    }

    #[test]
    fn hand_tip_points_up_at_zero_and_right_at_ninety() {
        let c = Vec2::new(250.0, 250.0);

        let up = hand_tip(c, 200.0, 0.0);
        assert!(approx(up.x, 250.0) && approx(up.y, 50.0), "{up:?}");

        let right = hand_tip(c, 200.0, 90.0);
        assert!(approx(right.x, 450.0) && approx(right.y, 250.0), "{right:?}");

        let down = hand_tip(c, 150.0, 180.0);
        assert!(approx(down.x, 250.0) && approx(down.y, 400.0), "{down:?}");
    }

    #[test]
    fn hand_tip_agrees_with_canvas_radians() {
        let c = Vec2::new(250.0, 250.0);
        for deg in (0..360).step_by(6) {
            let deg = deg as f32;
            let tip = hand_tip(c, 100.0, deg);
            let via_canvas = c + Vec2::from_angle(to_canvas_radians(deg)) * 100.0;
            assert!(approx(tip.x, via_canvas.x) && approx(tip.y, via_canvas.y), "deg {deg}");
        }
    }
}
