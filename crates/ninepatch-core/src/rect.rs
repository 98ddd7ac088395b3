//! Rect - Rectangle regions
//!
//! Unsigned, half-open rectangles addressing pixels inside a bitmap.
//! Cells of the nine-region partition are expressed as `Rect`s on both
//! the source and the destination side.

/// A rectangle region
///
/// A small `Copy` type. `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle covering a whole `width` x `height` image
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Get the right x coordinate (exclusive)
    ///
    /// Computed in `u64` so a rectangle near `u32::MAX` cannot wrap.
    #[inline]
    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if this rectangle contains another one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rectangle lies inside a `width` x `height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        Rect::from_size(width, height).contains_rect(self)
    }
}
