use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled triangle payload. Strokes use it for line joins.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, c: Vec2, color: Color) -> Self {
        Self { a, b, c, color }
    }

    /// Signed area; positive when `a`, `b`, `c` turn clockwise in y-down space.
    #[inline]
    pub fn signed_area(&self) -> f32 {
        let (ab, ac) = (self.b - self.a, self.c - self.a);
        0.5 * (ab.x * ac.y - ab.y * ac.x)
    }
}

impl DrawList {
    /// Records a filled triangle.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(a, b, c, color)));
    }
}
