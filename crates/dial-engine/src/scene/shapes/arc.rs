use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, Stroke, ZIndex};

/// Stroked circular arc payload.
///
/// The arc runs clockwise (y-down) from `start` over `sweep` radians.
/// `sweep` is in `[0, TAU]`; `TAU` means a closed ring. Ends are butt caps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcCmd {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub sweep: f32,
    pub stroke: Stroke,
}

impl ArcCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, start: f32, sweep: f32, stroke: Stroke) -> Self {
        Self { center, radius, start, sweep, stroke }
    }

    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep >= TAU
    }
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        start: f32,
        sweep: f32,
        stroke: Stroke,
    ) {
        self.push(z, DrawCmd::Arc(ArcCmd::new(center, radius, start, sweep, stroke)));
    }
}
