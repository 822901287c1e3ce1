use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawList, Stroke, ZIndex};

/// Canvas default `miterLimit`.
pub const MITER_LIMIT: f32 = 10.0;

/// Arc piece of a path: clockwise from `start` over `sweep` radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub sweep: f32,
}

impl ArcSegment {
    /// Builds an arc from canvas-style `start`/`end` angles.
    ///
    /// Clockwise canvas semantics: a difference of at least a full turn is a
    /// closed circle, anything else wraps into `[0, TAU)`.
    pub fn from_angles(center: Vec2, radius: f32, start: f32, end: f32) -> Self {
        let delta = end - start;
        let sweep = if delta >= TAU { TAU } else { delta.rem_euclid(TAU) };
        Self { center, radius, start, sweep }
    }

    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start + self.sweep)
    }

    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep >= TAU
    }
}

/// Path element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc(ArcSegment),
    Close,
}

/// A canvas-style path under construction.
///
/// Non-finite input is dropped at the call site, so everything stored here is
/// finite.
#[derive(Debug, Clone, Default)]
pub struct Path {
    els: Vec<PathEl>,
    subpath_start: Option<Vec2>,
    current: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.els.clear();
        self.subpath_start = None;
        self.current = None;
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    pub fn move_to(&mut self, p: Vec2) {
        if !p.is_finite() {
            return;
        }
        self.els.push(PathEl::MoveTo(p));
        self.subpath_start = Some(p);
        self.current = Some(p);
    }

    /// Adds a line from the current point. Without one, starts a subpath at `p`.
    pub fn line_to(&mut self, p: Vec2) {
        if !p.is_finite() {
            return;
        }
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.els.push(PathEl::LineTo(p));
        self.current = Some(p);
    }

    /// Adds a clockwise arc, connected to the current point by a straight line.
    pub fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        if !(center.is_finite() && radius.is_finite() && start.is_finite() && end.is_finite()) {
            return;
        }
        if radius < 0.0 {
            log::debug!("path: negative arc radius {radius} ignored");
            return;
        }

        let arc = ArcSegment::from_angles(center, radius, start, end);
        let begin = arc.start_point();
        match self.current {
            None => self.move_to(begin),
            Some(p) if p != begin => self.line_to(begin),
            Some(_) => {}
        }

        self.els.push(PathEl::Arc(arc));
        self.current = Some(arc.end_point());
    }

    /// Closes the current subpath back to its first point.
    pub fn close(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.els.push(PathEl::Close);
        self.current = self.subpath_start;
    }

    /// Lowers the outline into arc, segment and join commands on `list`.
    ///
    /// Lines carry butt caps. Where two lines meet, the outer corner gets a
    /// canvas miter join (limit [`MITER_LIMIT`]), falling back to a bevel.
    /// Joins touching an arc are not drawn.
    pub fn stroke_into(&self, list: &mut DrawList, z: ZIndex, stroke: Stroke) {
        if stroke.width <= 0.0 || !stroke.width.is_finite() {
            return;
        }

        let mut pen: Option<Vec2> = None;
        let mut start: Option<Vec2> = None;
        // Direction of the line ending at `pen`, and of the subpath's first piece
        // (`None` inside `Some` when that piece is an arc).
        let mut last_dir: Option<Vec2> = None;
        let mut first_dir: Option<Option<Vec2>> = None;

        for el in &self.els {
            match *el {
                PathEl::MoveTo(p) => {
                    pen = Some(p);
                    start = Some(p);
                    last_dir = None;
                    first_dir = None;
                }
                PathEl::LineTo(p) => {
                    if let Some(from) = pen {
                        if let Some(dir) = push_line(list, z, from, p, last_dir, stroke) {
                            last_dir = Some(dir);
                            first_dir.get_or_insert(Some(dir));
                        }
                    }
                    pen = Some(p);
                }
                PathEl::Arc(arc) => {
                    if arc.sweep > 0.0 && arc.radius > 0.0 {
                        list.push_arc(z, arc.center, arc.radius, arc.start, arc.sweep, stroke);
                    }
                    pen = Some(arc.end_point());
                    last_dir = None;
                    first_dir.get_or_insert(None);
                }
                PathEl::Close => {
                    if let (Some(from), Some(to)) = (pen, start) {
                        if let Some(dir) = push_line(list, z, from, to, last_dir, stroke) {
                            last_dir = Some(dir);
                        }
                        if let (Some(d0), Some(Some(d1))) = (last_dir, first_dir) {
                            push_join(list, z, to, d0, d1, stroke);
                        }
                    }
                    pen = start;
                    last_dir = None;
                    first_dir = None;
                }
            }
        }
    }

    /// Lowers the interior into draw commands on `list`.
    ///
    /// Only closed circles can be filled. Returns `false` when the path held
    /// other geometry, which is then left unpainted.
    pub fn fill_into(&self, list: &mut DrawList, z: ZIndex, color: Color) -> bool {
        let mut supported = true;

        for el in &self.els {
            match el {
                PathEl::Arc(arc) if arc.is_full_circle() => {
                    if arc.radius > 0.0 {
                        list.push_circle(z, arc.center, arc.radius, color);
                    }
                }
                PathEl::MoveTo(_) | PathEl::Close => {}
                PathEl::LineTo(_) | PathEl::Arc(_) => supported = false,
            }
        }

        supported
    }
}

/// Strokes `from`-`to`, joining it to the previous line if there was one.
/// Returns the line's unit direction, or `None` for a zero-length line.
fn push_line(
    list: &mut DrawList,
    z: ZIndex,
    from: Vec2,
    to: Vec2,
    prev_dir: Option<Vec2>,
    stroke: Stroke,
) -> Option<Vec2> {
    let len = from.distance(to);
    if len <= 0.0 {
        return None;
    }
    let dir = (to - from) / len;
    if let Some(d0) = prev_dir {
        push_join(list, z, from, d0, dir, stroke);
    }
    list.push_segment(z, from, to, stroke);
    Some(dir)
}

/// Fills the outer corner between two butt-capped lines meeting at `at`.
fn push_join(list: &mut DrawList, z: ZIndex, at: Vec2, d0: Vec2, d1: Vec2, stroke: Stroke) {
    let cross = d0.x * d1.y - d0.y * d1.x;
    if cross.abs() <= 1e-6 {
        // Straight on, or a full reversal: nothing sticks out.
        return;
    }

    let half = stroke.width * 0.5;
    let side = if cross > 0.0 { -1.0 } else { 1.0 };
    let (n0, n1) = (perp(d0) * side, perp(d1) * side);
    let a = at + n0 * half;
    let b = at + n1 * half;

    // Miter length over line width is 1 / sin(interior / 2).
    let ratio = 1.0 / ((1.0 + d0.dot(d1)) * 0.5).sqrt();
    if ratio <= MITER_LIMIT {
        let bisector = n0 + n1;
        let tip = at + bisector / bisector.length() * (half * ratio);
        list.push_triangle(z, at, a, tip, stroke.color);
        list.push_triangle(z, at, tip, b, stroke.color);
    } else {
        list.push_triangle(z, at, a, b, stroke.color);
    }
}

#[inline]
fn perp(d: Vec2) -> Vec2 {
    Vec2::new(-d.y, d.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    const EPS: f32 = 1e-4;

    #[test]
    fn sweep_wraps_across_zero() {
        // A short tick at 12 o'clock written as [6.26, 0.02].
        let arc = ArcSegment::from_angles(Vec2::zero(), 1.0, 6.26, 0.02);
        assert!((arc.sweep - (0.02 - 6.26 + TAU)).abs() < EPS);
        assert!(arc.sweep < 0.05);
    }

    #[test]
    fn sweep_of_a_full_turn_is_closed() {
        let arc = ArcSegment::from_angles(Vec2::zero(), 1.0, 0.0, TAU);
        assert!(arc.is_full_circle());
        let more = ArcSegment::from_angles(Vec2::zero(), 1.0, 1.0, 1.0 + 3.0 * TAU);
        assert_eq!(more.sweep, TAU);
    }

    #[test]
    fn equal_angles_give_an_empty_sweep() {
        let arc = ArcSegment::from_angles(Vec2::zero(), 1.0, 2.0, 2.0);
        assert_eq!(arc.sweep, 0.0);
    }

    #[test]
    fn backwards_angles_take_the_long_way_round() {
        let arc = ArcSegment::from_angles(Vec2::zero(), 1.0, 1.0, 0.5);
        assert!((arc.sweep - (TAU - 0.5)).abs() < EPS);
    }

    #[test]
    fn arc_after_move_to_is_joined_by_a_line() {
        let mut path = Path::new();
        path.move_to(Vec2::zero());
        path.arc(Vec2::new(10.0, 0.0), 5.0, 0.0, 1.0);

        assert!(matches!(path.elements()[1], PathEl::LineTo(p) if (p.x - 15.0).abs() < EPS));
        assert!(matches!(path.elements()[2], PathEl::Arc(_)));
    }

    #[test]
    fn arc_on_empty_path_starts_a_subpath() {
        let mut path = Path::new();
        path.arc(Vec2::zero(), 5.0, 0.0, TAU);
        assert_eq!(path.elements().len(), 2);
        assert!(matches!(path.elements()[0], PathEl::MoveTo(_)));
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut path = Path::new();
        path.arc(Vec2::zero(), 5.0, f32::NAN, 1.0);
        path.move_to(Vec2::new(f32::INFINITY, 0.0));
        path.line_to(Vec2::new(0.0, f32::NAN));
        assert!(path.is_empty());
    }

    fn stroked(path: &Path, width: f32) -> DrawList {
        let mut list = DrawList::new();
        path.stroke_into(&mut list, ZIndex::new(0), Stroke::new(width, Color::BLACK));
        list
    }

    fn triangles(list: &DrawList) -> Vec<[Vec2; 3]> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Triangle(t) => Some([t.a, t.b, t.c]),
                _ => None,
            })
            .collect()
    }

    fn near(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < EPS
    }

    #[test]
    fn stroke_lowers_polyline_into_segments() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 0.0));
        path.line_to(Vec2::new(0.0, 10.0));
        path.line_to(Vec2::new(5.0, 5.0));
        path.close();

        let list = stroked(&path, 2.0);
        let ends: Vec<(Vec2, Vec2)> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Segment(s) => Some((s.from, s.to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            ends,
            vec![
                (Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)),
                (Vec2::new(0.0, 10.0), Vec2::new(5.0, 5.0)),
                (Vec2::new(5.0, 5.0), Vec2::new(0.0, 0.0)),
            ]
        );
        // Three corners, all within the miter limit: two triangles each.
        assert_eq!(triangles(&list).len(), 6);
    }

    // ── joins ─────────────────────────────────────────────────────────────

    #[test]
    fn right_angle_gets_a_miter() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 0.0));
        path.line_to(Vec2::new(10.0, 0.0));
        path.line_to(Vec2::new(10.0, 10.0));

        let list = stroked(&path, 2.0);
        let kinds: Vec<&str> = list
            .items()
            .iter()
            .map(|i| match i.cmd {
                DrawCmd::Segment(_) => "seg",
                DrawCmd::Triangle(_) => "tri",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["seg", "tri", "tri", "seg"]);

        // Outer corner of a right-then-down turn is the top right.
        let tris = triangles(&list);
        let corner = Vec2::new(10.0, 0.0);
        assert!(near(tris[0][0], corner));
        assert!(near(tris[0][1], Vec2::new(10.0, -1.0)));
        assert!(near(tris[0][2], Vec2::new(11.0, -1.0)));
        assert!(near(tris[1][2], Vec2::new(11.0, 0.0)));
    }

    #[test]
    fn sharp_tip_falls_back_to_a_bevel() {
        // Hand-shaped wedge: base corner, far tip, opposite base corner.
        let mut path = Path::new();
        path.move_to(Vec2::new(247.0, 247.0));
        path.line_to(Vec2::new(250.0, 50.0));
        path.line_to(Vec2::new(253.0, 253.0));

        let list = stroked(&path, 5.0);
        assert_eq!(list.len(), 3);
        let tris = triangles(&list);
        assert_eq!(tris.len(), 1);

        let [at, a, b] = tris[0];
        assert!(near(at, Vec2::new(250.0, 50.0)));
        // Bevel corners sit half a line width out, above the tip.
        assert!((at.distance(a) - 2.5).abs() < EPS);
        assert!((at.distance(b) - 2.5).abs() < EPS);
        assert!(a.y < 50.0 && b.y < 50.0);
    }

    #[test]
    fn straight_continuation_needs_no_join() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 0.0));
        path.line_to(Vec2::new(5.0, 0.0));
        path.line_to(Vec2::new(10.0, 0.0));
        assert!(triangles(&stroked(&path, 3.0)).is_empty());
    }

    #[test]
    fn lines_next_to_arcs_are_not_joined() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 0.0));
        path.arc(Vec2::new(10.0, 0.0), 5.0, 0.0, 1.0);
        path.line_to(Vec2::new(0.0, 20.0));
        assert!(triangles(&stroked(&path, 3.0)).is_empty());
    }

    #[test]
    fn stroke_skips_empty_arcs_and_zero_width() {
        let mut path = Path::new();
        path.arc(Vec2::zero(), 5.0, 1.0, 1.0);

        let mut list = DrawList::new();
        path.stroke_into(&mut list, ZIndex::new(0), Stroke::new(3.0, Color::BLACK));
        assert!(list.is_empty());

        path.clear();
        path.arc(Vec2::zero(), 5.0, 0.0, 1.0);
        path.stroke_into(&mut list, ZIndex::new(0), Stroke::new(0.0, Color::BLACK));
        assert!(list.is_empty());
    }

    #[test]
    fn fill_turns_full_circle_into_disk() {
        let mut path = Path::new();
        path.arc(Vec2::new(250.0, 250.0), 210.0, 0.0, TAU);

        let mut list = DrawList::new();
        assert!(path.fill_into(&mut list, ZIndex::new(0), Color::WHITE));
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(250.0, 250.0));
                assert_eq!(c.radius, 210.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fill_reports_unsupported_geometry() {
        let mut path = Path::new();
        path.move_to(Vec2::zero());
        path.line_to(Vec2::new(1.0, 1.0));

        let mut list = DrawList::new();
        assert!(!path.fill_into(&mut list, ZIndex::new(0), Color::WHITE));
        assert!(list.is_empty());
    }
}
