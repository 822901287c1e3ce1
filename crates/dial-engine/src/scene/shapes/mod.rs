pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod segment;
pub(crate) mod triangle;

pub use arc::ArcCmd;
pub use circle::CircleCmd;
pub use segment::SegmentCmd;
pub use triangle::TriangleCmd;

use crate::paint::Color;

/// Stroke style for outlined geometry (arcs, segments).
///
/// `width` is the full line width in logical pixels, centered on the geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
