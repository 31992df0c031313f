//! Widget geometry: [`Region`] in device pixels.

/// An axis-aligned rectangle: origin plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge. Saturates at the `i32` range.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge. Saturates at the `i32` range.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Grow outward by `amount` on every side, saturating instead of
    /// wrapping.
    #[inline]
    pub const fn inflate(self, amount: i32) -> Region {
        let twice = amount.saturating_mul(2);
        Region {
            x: self.x.saturating_sub(amount),
            y: self.y.saturating_sub(amount),
            width: self.width.saturating_add(twice),
            height: self.height.saturating_add(twice),
        }
    }
}
