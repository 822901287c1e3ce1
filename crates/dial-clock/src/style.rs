use std::time::Duration;

use dial_engine::coords::Vec2;
use dial_engine::paint::Color;

/// One hand: how long, how thick, what color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub length: f32,
    pub width: f32,
    pub color: Color,
}

impl HandStyle {
    pub const fn new(length: f32, width: f32, color: Color) -> Self {
        Self { length, width, color }
    }
}

/// Every tunable of the clock face.
///
/// Radii and lengths are logical pixels; stamp pairs are `(start, end)`
/// surface radians fed straight to `Canvas::arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    /// Surface clear color behind the face.
    pub background: Color,

    pub face_radius: f32,
    pub face_color: Color,

    /// Arc between the hour and minute hands.
    pub angle_arc_radius: f32,
    pub angle_arc_width: f32,
    pub angle_arc_color: Color,
    pub angle_shadow_offset: Vec2,

    /// Quarter-hour marks.
    pub stamp_radius: f32,
    pub stamp_width: f32,
    pub stamp_color: Color,
    pub stamps: [(f32, f32); 4],

    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,

    /// Shadows are the hand rotated this many degrees further.
    pub hand_shadow_offset_deg: f32,
    pub shadow_color: Color,
    /// Half-size of the hand base: paths run from `center - base` through the
    /// tip to `center + base`.
    pub hand_base: Vec2,

    pub cap_radius: f32,
    pub cap_color: Color,

    pub tick_period: Duration,
}

impl Default for ClockStyle {
    fn default() -> Self {
        let ink = Color::opaque_u8(0x33, 0x33, 0x33);

        Self {
            background: Color::WHITE,

            face_radius: 210.0,
            face_color: Color::opaque_u8(0xf5, 0xf5, 0xf5),

            angle_arc_radius: 120.0,
            angle_arc_width: 3.0,
            angle_arc_color: Color::opaque_u8(0xff, 0xa1, 0x63),
            angle_shadow_offset: Vec2::new(0.0, 3.0),

            stamp_radius: 110.0,
            stamp_width: 15.0,
            stamp_color: Color::GRAY,
            stamps: [(6.26, 0.02), (1.55, 1.59), (3.12, 3.16), (4.69, 4.73)],

            hour_hand: HandStyle::new(150.0, 8.0, ink),
            minute_hand: HandStyle::new(200.0, 5.0, ink),
            second_hand: HandStyle::new(200.0, 3.0, Color::GRAY),

            hand_shadow_offset_deg: 2.0,
            shadow_color: Color::opaque_u8(0xe5, 0xe4, 0xe4),
            hand_base: Vec2::new(3.0, 3.0),

            cap_radius: 10.0,
            cap_color: Color::opaque_u8(0xff, 0x66, 0x00),

            tick_period: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_match_their_hex_literals() {
        let s = ClockStyle::default();
        assert_eq!(Some(s.face_color), Color::from_hex("#f5f5f5"));
        assert_eq!(Some(s.angle_arc_color), Color::from_hex("#ffa163"));
        assert_eq!(Some(s.shadow_color), Color::from_hex("#e5e4e4"));
        assert_eq!(Some(s.minute_hand.color), Color::from_hex("#333333"));
        assert_eq!(Some(s.cap_color), Color::from_hex("#ff6600"));
        assert_eq!(Some(s.stamp_color), Color::from_hex("#808080"));
    }

    #[test]
    fn stamps_sit_on_the_quarter_hours() {
        use core::f32::consts::{FRAC_PI_2, PI, TAU};

        let s = ClockStyle::default();
        let quarters = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
        for ((start, end), q) in s.stamps.iter().zip(quarters) {
            // Midpoint of the clockwise sweep, wrapped into [0, TAU).
            let sweep = (end - start).rem_euclid(TAU);
            let mid = (start + sweep / 2.0).rem_euclid(TAU);
            let off = (mid - q).abs().min(TAU - (mid - q).abs());
            assert!(off < 0.02, "stamp ({start}, {end}) off by {off}");
            assert!(sweep > 0.0 && sweep < 0.05);
        }
    }

    #[test]
    fn ticks_once_per_second() {
        assert_eq!(ClockStyle::default().tick_period, Duration::from_secs(1));
    }
}
