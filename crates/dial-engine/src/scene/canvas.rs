use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawList, Path, Stroke, ZIndex};

/// Immediate-mode 2D drawing surface with HTML-canvas path semantics.
///
/// A drawing step opens a path with [`begin_path`](Canvas::begin_path), builds
/// it with `move_to` / `line_to` / `arc`, and commits it with `fill` or
/// `stroke` using the style set at commit time. Later commits paint over
/// earlier ones.
///
/// Angles are radians, clockwise from +X in the surface's y-down space.
pub trait Canvas {
    fn begin_path(&mut self);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    /// Clockwise arc from `start` to `end`.
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// [`Canvas`] that records into a [`DrawList`] on a single z layer.
///
/// Acquire one per frame and pass it to the drawing code; commits become
/// draw commands in call order.
pub struct DrawListCanvas<'a> {
    list: &'a mut DrawList,
    z: ZIndex,
    path: Path,
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
    warned_fill: bool,
}

impl<'a> DrawListCanvas<'a> {
    /// Canvas defaults: black fill and stroke, line width 1.
    pub fn new(list: &'a mut DrawList, z: ZIndex) -> Self {
        Self {
            list,
            z,
            path: Path::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            warned_fill: false,
        }
    }
}

impl Canvas for DrawListCanvas<'_> {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores zero, negative and non-finite widths.
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
        }
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Vec2) {
        self.path.line_to(p);
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.path.arc(center, radius, start, end);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        let supported = self.path.fill_into(self.list, self.z, self.fill_color);
        if !supported && !self.warned_fill {
            log::debug!("canvas: only full circles can be filled; other geometry skipped");
            self.warned_fill = true;
        }
    }

    fn stroke(&mut self) {
        let stroke = Stroke::new(self.line_width, self.stroke_color);
        self.path.stroke_into(self.list, self.z, stroke);
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::TAU;

    use super::*;
    use crate::scene::DrawCmd;

    #[test]
    fn style_is_sampled_at_commit_time() {
        let mut list = DrawList::new();
        {
            let mut canvas = DrawListCanvas::new(&mut list, ZIndex::new(0));
            canvas.begin_path();
            canvas.set_stroke_color(Color::WHITE);
            canvas.arc(Vec2::new(0.0, 0.0), 10.0, 0.0, 1.0);
            canvas.set_line_width(3.0);
            canvas.stroke();
        }
        match &list.items()[0].cmd {
            DrawCmd::Arc(a) => {
                assert_eq!(a.stroke, Stroke::new(3.0, Color::WHITE));
                assert_eq!(a.radius, 10.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn begin_path_discards_previous_geometry() {
        let mut list = DrawList::new();
        {
            let mut canvas = DrawListCanvas::new(&mut list, ZIndex::new(0));
            canvas.begin_path();
            canvas.arc(Vec2::zero(), 5.0, 0.0, TAU);
            canvas.fill();
            canvas.begin_path();
            canvas.arc(Vec2::zero(), 1.0, 0.0, TAU);
            canvas.fill();
        }
        let radii: Vec<f32> = list
            .items()
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::Circle(c) => c.radius,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(radii, vec![5.0, 1.0]);
    }

    #[test]
    fn invalid_line_width_keeps_previous_value() {
        let mut list = DrawList::new();
        {
            let mut canvas = DrawListCanvas::new(&mut list, ZIndex::new(0));
            canvas.set_line_width(4.0);
            canvas.set_line_width(0.0);
            canvas.set_line_width(f32::NAN);
            canvas.begin_path();
            canvas.move_to(Vec2::zero());
            canvas.line_to(Vec2::new(0.0, 10.0));
            canvas.stroke();
        }
        match &list.items()[0].cmd {
            DrawCmd::Segment(s) => assert_eq!(s.stroke.width, 4.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn commits_land_on_the_canvas_layer() {
        let mut list = DrawList::new();
        {
            let mut canvas = DrawListCanvas::new(&mut list, ZIndex::new(7));
            canvas.begin_path();
            canvas.arc(Vec2::zero(), 5.0, 0.0, TAU);
            canvas.fill();
        }
        assert_eq!(list.items()[0].key.z, ZIndex::new(7));
    }
}
