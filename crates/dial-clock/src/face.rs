use core::f32::consts::TAU;

use dial_engine::coords::Vec2;
use dial_engine::paint::Color;
use dial_engine::scene::Canvas;

use crate::angles::{angles, hand_tip, to_canvas_radians, AngleTriple, TimeOfDay};
use crate::style::{ClockStyle, HandStyle};
use crate::time_source::TimeSource;

/// Paints the clock face for the last sampled time.
///
/// The center is fixed at construction; the canvas is borrowed per frame.
#[derive(Debug, Clone)]
pub struct ClockRenderer {
    center: Vec2,
    time: TimeOfDay,
    label: String,
    style: ClockStyle,
}

impl ClockRenderer {
    /// Renderer for a `width` x `height` surface. Shows midnight until the
    /// first [`sample`](Self::sample).
    pub fn new(width: f32, height: f32, style: ClockStyle) -> Self {
        let time = TimeOfDay::MIDNIGHT;
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            time,
            label: time.to_string(),
            style,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Last sampled time as `H:M:S`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Reads the current time from `source` and returns its hand angles.
    pub fn sample(&mut self, source: &impl TimeSource) -> AngleTriple {
        self.time = source.now();
        self.label = self.time.to_string();

        let a = angles(self.time);
        log::debug!(
            "tick {}: hour {:.1} minute {:.1} second {:.1}",
            self.label,
            a.hour,
            a.minute,
            a.second
        );
        a
    }

    /// Sample, then draw.
    pub fn tick(&mut self, source: &impl TimeSource, canvas: &mut impl Canvas) -> AngleTriple {
        let a = self.sample(source);
        self.draw(canvas);
        a
    }

    /// Issues the whole face, back to front.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let a = angles(self.time);
        let s = &self.style;

        self.draw_disk(canvas, s.face_radius, s.face_color);
        self.draw_angle(canvas, a.hour, a.minute);
        self.draw_time_stamps(canvas);

        let shadow = |hand: HandStyle| HandStyle { color: s.shadow_color, ..hand };
        self.draw_arrow(canvas, a.minute + s.hand_shadow_offset_deg, shadow(s.minute_hand));
        self.draw_arrow(canvas, a.hour + s.hand_shadow_offset_deg, shadow(s.hour_hand));

        self.draw_arrow(canvas, a.minute, s.minute_hand);
        self.draw_arrow(canvas, a.hour, s.hour_hand);
        self.draw_arrow(canvas, a.second, s.second_hand);

        self.draw_disk(canvas, s.cap_radius, s.cap_color);
    }

    fn draw_disk(&self, canvas: &mut impl Canvas, radius: f32, color: Color) {
        canvas.begin_path();
        canvas.set_fill_color(color);
        canvas.arc(self.center, radius, 0.0, TAU);
        canvas.fill();
    }

    /// Arc from hand `from` clockwise to hand `to`, shadow first.
    fn draw_angle(&self, canvas: &mut impl Canvas, from: f32, to: f32) {
        let s = &self.style;
        let (start, end) = (to_canvas_radians(from), to_canvas_radians(to));

        for (center, color) in [
            (self.center + s.angle_shadow_offset, s.shadow_color),
            (self.center, s.angle_arc_color),
        ] {
            canvas.begin_path();
            canvas.set_stroke_color(color);
            canvas.arc(center, s.angle_arc_radius, start, end);
            canvas.set_line_width(s.angle_arc_width);
            canvas.stroke();
        }
    }

    fn draw_time_stamps(&self, canvas: &mut impl Canvas) {
        let s = &self.style;
        for &(start, end) in &s.stamps {
            canvas.begin_path();
            canvas.set_stroke_color(s.stamp_color);
            canvas.arc(self.center, s.stamp_radius, start, end);
            canvas.set_line_width(s.stamp_width);
            canvas.stroke();
        }
    }

    /// Thin wedge: base corner, tip, opposite base corner.
    fn draw_arrow(&self, canvas: &mut impl Canvas, deg: f32, hand: HandStyle) {
        let base = self.style.hand_base;

        canvas.begin_path();
        canvas.set_stroke_color(hand.color);
        canvas.set_line_width(hand.width);
        canvas.move_to(self.center - base);
        canvas.line_to(hand_tip(self.center, hand.length, deg));
        canvas.line_to(self.center + base);
        canvas.stroke();
        canvas.close_path();
    }
}
