use crate::coords::Rect;
use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::segment::SegmentCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and its bounds below
/// - implement push helpers inside that shape module
/// - teach `render::shapes` to build an instance for it
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Arc(ArcCmd),
    Segment(SegmentCmd),
    Triangle(TriangleCmd),
}

impl DrawCmd {
    /// Conservative logical-pixel bounds of the painted area (no AA margin).
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCmd::Circle(c) => Rect::around(c.center, c.radius),
            // The full ring is a safe superset of any sweep.
            DrawCmd::Arc(a) => Rect::around(a.center, a.radius + a.stroke.width * 0.5),
            DrawCmd::Segment(s) => Rect::from_corners(s.from, s.to).inflate(s.stroke.width * 0.5),
            DrawCmd::Triangle(t) => Rect::from_corners(t.a.min(t.b).min(t.c), t.a.max(t.b).max(t.c)),
        }
    }
}
