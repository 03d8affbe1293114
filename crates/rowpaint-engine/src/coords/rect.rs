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

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `amount` on every edge.
    ///
    /// The min corner moves inward by `amount` and the size loses `2 * amount`
    /// on each axis, so the result stays centred inside `self`. A border ring
    /// of thickness `amount` is what remains between the two rectangles.
    ///
    /// No clamping: an inset larger than half the size yields a rect with a
    /// negative extent, which [`is_empty`](Self::is_empty) reports.
    #[inline]
    pub fn inset(self, amount: f32) -> Self {
        let d = Vec2::splat(amount);
        Self {
            origin: self.origin + d,
            size: self.size - d - d,
        }
    }
}
