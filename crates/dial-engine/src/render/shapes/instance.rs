//! CPU-side instance building: draw commands → packed GPU instances.

use bytemuck::{Pod, Zeroable};

use crate::scene::DrawCmd;

/// Antialiasing margin added around every shape's bounds, in logical pixels.
const AA_MARGIN: f32 = 1.0;

pub(super) const KIND_CIRCLE: u32 = 0;
pub(super) const KIND_ARC: u32 = 1;
pub(super) const KIND_SEGMENT: u32 = 2;
pub(super) const KIND_TRIANGLE: u32 = 3;

/// Instance data layout (80 bytes):
///
///  offset  0  bounds_min  [f32; 2]   loc 1
///  offset  8  bounds_max  [f32; 2]   loc 2
///  offset 16  p0          [f32; 2]   loc 3  (center / segment start / corner a)
///  offset 24  p1          [f32; 2]   loc 4  (segment end / corner b)
///  offset 32  params      [f32; 4]   loc 5  (see `from_cmd`)
///  offset 48  color       [f32; 4]   loc 6  (premultiplied)
///  offset 64  kind        u32        loc 7
///  offset 68  _pad        [u32; 3]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ShapeInstance {
    pub bounds_min: [f32; 2],
    pub bounds_max: [f32; 2],
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub params: [f32; 4],
    pub color: [f32; 4],
    pub kind: u32,
    pub _pad: [u32; 3],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        1 => Float32x2, // bounds_min
        2 => Float32x2, // bounds_max
        3 => Float32x2, // p0
        4 => Float32x2, // p1
        5 => Float32x4, // params
        6 => Float32x4, // color
        7 => Uint32     // kind
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Packs a draw command, or returns `None` when it would paint nothing.
    ///
    /// `params` per kind:
    /// - circle:  `(radius, 0, 0, 0)`
    /// - arc:     `(radius, start, sweep, half_width)`
    /// - segment: `(half_width, 0, 0, 0)`
    /// - triangle: `(c.x, c.y, 0, 0)`
    pub(super) fn from_cmd(cmd: &DrawCmd) -> Option<Self> {
        let bounds = cmd.bounds();
        if !bounds.is_finite() {
            return None;
        }

        let (kind, p0, p1, params, color) = match cmd {
            DrawCmd::Circle(c) => {
                if c.radius <= 0.0 {
                    return None;
                }
                (KIND_CIRCLE, c.center, c.center, [c.radius, 0.0, 0.0, 0.0], c.color)
            }
            DrawCmd::Arc(a) => {
                if a.radius <= 0.0 || a.sweep <= 0.0 || a.stroke.width <= 0.0 {
                    return None;
                }
                let params = [a.radius, a.start, a.sweep, a.stroke.width * 0.5];
                (KIND_ARC, a.center, a.center, params, a.stroke.color)
            }
            DrawCmd::Segment(s) => {
                if s.length() <= 0.0 || s.stroke.width <= 0.0 {
                    return None;
                }
                (KIND_SEGMENT, s.from, s.to, [s.stroke.width * 0.5, 0.0, 0.0, 0.0], s.stroke.color)
            }
            DrawCmd::Triangle(t) => {
                if t.signed_area().abs() <= 1e-6 {
                    return None;
                }
                (KIND_TRIANGLE, t.a, t.b, [t.c.x, t.c.y, 0.0, 0.0], t.color)
            }
        };

        if !color.is_finite() || color.a <= 0.0 || params.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let bounds = bounds.inflate(AA_MARGIN);
        Some(Self {
            bounds_min: [bounds.min().x, bounds.min().y],
            bounds_max: [bounds.max().x, bounds.max().y],
            p0: [p0.x, p0.y],
            p1: [p1.x, p1.y],
            params,
            color: color.to_array(),
            kind,
            _pad: [0; 3],
        })
    }
}
