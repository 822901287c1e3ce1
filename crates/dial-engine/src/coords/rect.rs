use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Smallest rect spanning both corners, in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self { origin: min, size: max - min }
    }

    /// Square of half-extent `radius` around `center`.
    #[inline]
    pub fn around(center: Vec2, radius: f32) -> Self {
        let r = Vec2::new(radius, radius);
        Self::from_corners(center - r, center + r)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Grows the rect by `by` on every side.
    #[inline]
    pub fn inflate(self, by: f32) -> Self {
        let d = Vec2::new(by, by);
        Self { origin: self.origin - d, size: self.size + d * 2.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn from_corners_orders_points() {
        let rect = Rect::from_corners(Vec2::new(10.0, 2.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect, r(4.0, 2.0, 6.0, 6.0));
    }

    #[test]
    fn around_center() {
        let rect = Rect::around(Vec2::new(250.0, 250.0), 10.0);
        assert_eq!(rect.min(), Vec2::new(240.0, 240.0));
        assert_eq!(rect.max(), Vec2::new(260.0, 260.0));
    }

    // ── inflate ───────────────────────────────────────────────────────────

    #[test]
    fn inflate_grows_every_side() {
        assert_eq!(r(5.0, 5.0, 10.0, 4.0).inflate(1.0), r(4.0, 4.0, 12.0, 6.0));
    }

    #[test]
    fn inflate_makes_degenerate_rect_non_empty() {
        let line = Rect::from_corners(Vec2::new(0.0, 3.0), Vec2::new(10.0, 3.0));
        assert!(line.is_empty());
        assert!(!line.inflate(0.5).is_empty());
    }

    // ── is_empty / is_finite ──────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn is_finite_rejects_nan() {
        assert!(!r(f32::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(r(0.0, 0.0, 1.0, 1.0).is_finite());
    }
}
