//! Patch geometry and content padding
//!
//! All values are measured in content pixels, i.e. with the one-pixel
//! marker border already removed.

use crate::error::{MalformedPatch, PatchResult};
use crate::partition::Axis;

/// Fixed sizes of a nine-patch, measured inward from each content edge.
///
/// `stretch_left` is the width of the left column, `stretch_right` the
/// width of the right column, and likewise for rows. Whatever lies between
/// them is the stretchable band. Once built, a geometry never changes; it
/// can be reused for every render of the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatchGeometry {
    stretch_left: u32,
    stretch_right: u32,
    stretch_top: u32,
    stretch_bottom: u32,
}

impl PatchGeometry {
    /// Create a geometry from the four fixed sizes.
    ///
    /// The sizes are only checked against a content size by
    /// [`PatchGeometry::validate`], which every render performs.
    pub const fn new(
        stretch_left: u32,
        stretch_right: u32,
        stretch_top: u32,
        stretch_bottom: u32,
    ) -> Self {
        Self {
            stretch_left,
            stretch_right,
            stretch_top,
            stretch_bottom,
        }
    }

    /// Geometry of a source with no fixed sizes: the whole content stretches.
    pub const fn uniform() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Width of the fixed left column.
    #[inline]
    pub fn stretch_left(&self) -> u32 {
        self.stretch_left
    }

    /// Width of the fixed right column.
    #[inline]
    pub fn stretch_right(&self) -> u32 {
        self.stretch_right
    }

    /// Height of the fixed top row.
    #[inline]
    pub fn stretch_top(&self) -> u32 {
        self.stretch_top
    }

    /// Height of the fixed bottom row.
    #[inline]
    pub fn stretch_bottom(&self) -> u32 {
        self.stretch_bottom
    }

    /// Fixed `(low, high)` sizes on `axis`.
    pub fn fixed(&self, axis: Axis) -> (u32, u32) {
        match axis {
            Axis::Horizontal => (self.stretch_left, self.stretch_right),
            Axis::Vertical => (self.stretch_top, self.stretch_bottom),
        }
    }

    /// Sum of the two fixed sizes on `axis`, in `u64` so it cannot wrap.
    pub fn fixed_total(&self, axis: Axis) -> u64 {
        let (low, high) = self.fixed(axis);
        low as u64 + high as u64
    }

    /// Smallest render size, `(width, height)`, that keeps every corner.
    ///
    /// Never below 1 on either axis.
    pub fn min_size(&self) -> (u32, u32) {
        let min = |axis| self.fixed_total(axis).clamp(1, u32::MAX as u64) as u32;
        (min(Axis::Horizontal), min(Axis::Vertical))
    }

    /// Check the geometry against a content size.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPatch::GeometryExceedsContent`] if the fixed
    /// sizes on either axis add up to more than the content dimension.
    pub fn validate(&self, content_width: u32, content_height: u32) -> PatchResult<()> {
        for (axis, content) in [
            (Axis::Horizontal, content_width),
            (Axis::Vertical, content_height),
        ] {
            if self.fixed_total(axis) > content as u64 {
                let (low, high) = self.fixed(axis);
                return Err(MalformedPatch::GeometryExceedsContent {
                    axis,
                    low,
                    high,
                    content,
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Insets of the content area, read from the bottom and right markers.
///
/// The content area of a rendered image is where a caller lays out text
/// or child widgets. An edge without markers leaves zero padding on its
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContentPadding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// Everything the analyzer reads from a source border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatchInfo {
    /// Stretch geometry from the top row and left column
    pub geometry: PatchGeometry,
    /// Content padding from the bottom row and right column
    pub padding: ContentPadding,
    /// Source width minus the border
    pub content_width: u32,
    /// Source height minus the border
    pub content_height: u32,
}
