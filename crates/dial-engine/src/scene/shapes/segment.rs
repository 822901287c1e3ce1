use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, Stroke, ZIndex};

/// Stroked straight line payload with butt caps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl SegmentCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_segment(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Segment(SegmentCmd::new(from, to, stroke)));
    }
}
