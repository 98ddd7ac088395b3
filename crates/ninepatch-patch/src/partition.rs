//! Nine-region partition
//!
//! Each axis of an image splits into three bands: a fixed `low` band, a
//! stretchable `middle` band and a fixed `high` band. The cross product of
//! the horizontal and vertical bands gives the nine cells.
//!
//! The source partition comes straight from the geometry and the content
//! size. The target partition copies the two fixed sizes and gives the
//! middle band whatever remains of the requested size. Both are checked
//! so that the three bands of an axis always sum exactly to its size.

use crate::error::{PatchError, PatchResult};
use crate::geometry::PatchGeometry;
use ninepatch_core::Rect;
use ninepatch_core::check::ensure_three_sum;
use std::fmt;

/// Image axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along x (widths)
    Horizontal,
    /// Along y (heights)
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// One of the three bands of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Fixed band at the left or top
    Low,
    /// Stretchable band
    Middle,
    /// Fixed band at the right or bottom
    High,
}

/// Band lengths along one axis
///
/// Only built by [`Partition`], which checks that the three lengths sum
/// to the axis size, so `total` never exceeds `u32::MAX`. Read the bands
/// with [`Span::len`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub(crate) low: u32,
    pub(crate) middle: u32,
    pub(crate) high: u32,
}

impl Span {
    pub(crate) const fn new(low: u32, middle: u32, high: u32) -> Self {
        Self { low, middle, high }
    }

    /// Total length of the axis.
    #[inline]
    pub fn total(&self) -> u32 {
        self.low + self.middle + self.high
    }

    /// Length of `band`.
    #[inline]
    pub fn len(&self, band: Band) -> u32 {
        match band {
            Band::Low => self.low,
            Band::Middle => self.middle,
            Band::High => self.high,
        }
    }

    /// Offset of the first pixel of `band`.
    #[inline]
    pub fn offset(&self, band: Band) -> u32 {
        match band {
            Band::Low => 0,
            Band::Middle => self.low,
            Band::High => self.low + self.middle,
        }
    }

    fn checked(axis: Axis, master: u32, low: u32, middle: u32, high: u32) -> PatchResult<Self> {
        ensure_three_sum(&axis.to_string(), master, [low, middle, high])?;
        Ok(Self::new(low, middle, high))
    }
}

/// A cell of the 3×3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Region {
    /// All nine cells in row-major order.
    pub const ALL: [Region; 9] = [
        Region::TopLeft,
        Region::Top,
        Region::TopRight,
        Region::Left,
        Region::Center,
        Region::Right,
        Region::BottomLeft,
        Region::Bottom,
        Region::BottomRight,
    ];

    /// `(column band, row band)` of this cell.
    pub fn bands(self) -> (Band, Band) {
        use Band::*;
        match self {
            Region::TopLeft => (Low, Low),
            Region::Top => (Middle, Low),
            Region::TopRight => (High, Low),
            Region::Left => (Low, Middle),
            Region::Center => (Middle, Middle),
            Region::Right => (High, Middle),
            Region::BottomLeft => (Low, High),
            Region::Bottom => (Middle, High),
            Region::BottomRight => (High, High),
        }
    }

    /// Fixed on both axes: copied without scaling.
    pub fn is_corner(self) -> bool {
        let (col, row) = self.bands();
        col != Band::Middle && row != Band::Middle
    }

    /// Stretched along exactly one axis.
    pub fn is_edge(self) -> bool {
        let (col, row) = self.bands();
        (col == Band::Middle) != (row == Band::Middle)
    }
}

/// Band lengths on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Partition {
    pub x: Span,
    pub y: Span,
}

impl Partition {
    /// Partition of a `content_width` x `content_height` source.
    ///
    /// # Errors
    ///
    /// Returns a malformed-geometry error if the fixed sizes exceed the
    /// content on either axis.
    pub fn source(
        geometry: &PatchGeometry,
        content_width: u32,
        content_height: u32,
    ) -> PatchResult<Self> {
        geometry.validate(content_width, content_height)?;
        let axis_span = |axis: Axis, content: u32| {
            let (low, high) = geometry.fixed(axis);
            Span::checked(axis, content, low, content - low - high, high)
        };
        Ok(Self {
            x: axis_span(Axis::Horizontal, content_width)?,
            y: axis_span(Axis::Vertical, content_height)?,
        })
    }

    /// Partition of a `width` x `height` render.
    ///
    /// The fixed sizes are kept and the middle band absorbs the rest, so
    /// the three bands sum exactly to the requested size.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidTargetSize`] if either dimension is
    /// zero or smaller than the two fixed sizes on its axis.
    pub fn target(geometry: &PatchGeometry, width: u32, height: u32) -> PatchResult<Self> {
        let axis_span = |axis: Axis, requested: u32| {
            let (low, high) = geometry.fixed(axis);
            let fixed = geometry.fixed_total(axis);
            if requested == 0 || (requested as u64) < fixed {
                return Err(PatchError::InvalidTargetSize {
                    axis,
                    requested,
                    minimum: fixed.clamp(1, u32::MAX as u64) as u32,
                });
            }
            Span::checked(axis, requested, low, requested - low - high, high)
        };
        Ok(Self {
            x: axis_span(Axis::Horizontal, width)?,
            y: axis_span(Axis::Vertical, height)?,
        })
    }

    /// Total `(width, height)` covered by the partition.
    pub fn size(&self) -> (u32, u32) {
        (self.x.total(), self.y.total())
    }

    /// Rectangle of `region`.
    pub fn cell(&self, region: Region) -> Rect {
        let (col, row) = region.bands();
        Rect::new(
            self.x.offset(col),
            self.y.offset(row),
            self.x.len(col),
            self.y.len(row),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_kinds() {
        let corners: Vec<_> = Region::ALL.iter().filter(|r| r.is_corner()).collect();
        let edges: Vec<_> = Region::ALL.iter().filter(|r| r.is_edge()).collect();
        assert_eq!(corners.len(), 4);
        assert_eq!(edges.len(), 4);
        assert!(!Region::Center.is_corner());
        assert!(!Region::Center.is_edge());
    }

    #[test]
    fn test_source_partition() {
        let g = PatchGeometry::new(1, 1, 0, 0);
        let p = Partition::source(&g, 5, 5).unwrap();
        assert_eq!(p.x, Span::new(1, 3, 1));
        assert_eq!(p.y, Span::new(0, 5, 0));
    }

    #[test]
    fn test_target_partition_sums() {
        let g = PatchGeometry::new(3, 4, 2, 6);
        for w in 7..40 {
            for h in 8..30 {
                let p = Partition::target(&g, w, h).unwrap();
                assert_eq!(p.size(), (w, h));
                assert_eq!(p.x.low, 3);
                assert_eq!(p.x.high, 4);
                assert_eq!(p.y.low, 2);
                assert_eq!(p.y.high, 6);
            }
        }
    }

    #[test]
    fn test_target_minimum_boundary() {
        let g = PatchGeometry::new(2, 3, 1, 1);
        let p = Partition::target(&g, 5, 2).unwrap();
        assert_eq!(p.x.middle, 0);
        assert_eq!(p.y.middle, 0);

        let err = Partition::target(&g, 4, 2).unwrap_err();
        assert!(matches!(
            err,
            PatchError::InvalidTargetSize {
                axis: Axis::Horizontal,
                requested: 4,
                minimum: 5
            }
        ));
        let err = Partition::target(&g, 5, 1).unwrap_err();
        assert!(matches!(
            err,
            PatchError::InvalidTargetSize {
                axis: Axis::Vertical,
                requested: 1,
                minimum: 2
            }
        ));
    }

    #[test]
    fn test_full_range_spans_do_not_overflow() {
        let g = PatchGeometry::new(u32::MAX - 1, 1, 0, u32::MAX);
        let p = Partition::target(&g, u32::MAX, u32::MAX).unwrap();
        assert_eq!(p.size(), (u32::MAX, u32::MAX));
        assert_eq!(p.x.offset(Band::High), u32::MAX - 1);
        assert_eq!(p.y.len(Band::Middle), 0);
        assert!(Partition::target(&g, u32::MAX - 1, u32::MAX).is_err());
    }

    #[test]
    fn test_target_zero_rejected() {
        let g = PatchGeometry::uniform();
        assert!(matches!(
            Partition::target(&g, 0, 4),
            Err(PatchError::InvalidTargetSize { minimum: 1, .. })
        ));
    }

    #[test]
    fn test_cells_tile_the_image() {
        let g = PatchGeometry::new(1, 2, 3, 1);
        let p = Partition::target(&g, 10, 9).unwrap();
        let area: u64 = Region::ALL.iter().map(|&r| p.cell(r).area()).sum();
        assert_eq!(area, 90);
        assert_eq!(p.cell(Region::BottomRight), Rect::new(8, 8, 2, 1));
        assert_eq!(p.cell(Region::Center), Rect::new(1, 3, 7, 5));
    }
}
