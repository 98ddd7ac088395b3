//! Bitmap - The RGBA8 image container
//!
//! # Pixel layout
//!
//! - Four bytes per pixel, in R, G, B, A order
//! - Rows are tightly packed: stride is `width * 4` bytes
//! - Row 0 is the top of the image
//!
//! # Ownership model
//!
//! `Bitmap` uses `Arc` for cheap cloning (shared, read-only ownership), so
//! one decoded source can feed any number of renders, including renders on
//! other threads. To modify pixel data, convert to `BitmapMut` via
//! [`Bitmap::try_into_mut`] or [`Bitmap::to_mut`], then convert back with
//! `Into<Bitmap>`.

mod access;
mod clip;

use crate::error::{Error, Result};
use crate::rgba::{BYTES_PER_PIXEL, Rgba};
use std::sync::Arc;

/// Internal bitmap data
#[derive(Debug, Clone, PartialEq, Eq)]
struct BitmapData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGBA8 bytes, `width * height * 4` long
    data: Vec<u8>,
}

impl BitmapData {
    fn filled(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        let len = buffer_len(width, height)?;
        let data = if fill == Rgba::TRANSPARENT {
            vec![0u8; len]
        } else {
            fill.to_bytes().repeat(len / BYTES_PER_PIXEL)
        };
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Number of bytes needed for a `width` x `height` RGBA8 buffer.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if the size overflows `usize`.
pub fn buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::InvalidDimension { width, height })
}

/// Bitmap - immutable RGBA8 image
///
/// Cloning a `Bitmap` only bumps a reference count.
///
/// # Examples
///
/// ```
/// use ninepatch_core::{Bitmap, Rgba};
///
/// let bmp = Bitmap::new(4, 3).unwrap();
/// assert_eq!(bmp.width(), 4);
/// assert_eq!(bmp.height(), 3);
/// assert_eq!(bmp.pixel(0, 0), Some(Rgba::TRANSPARENT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    inner: Arc<BitmapData>,
}

impl Bitmap {
    /// Create a transparent bitmap.
    ///
    /// Zero-area bitmaps are allowed; they stand for empty cells of a
    /// partition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the buffer size overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(BitmapData::filled(width, height, Rgba::TRANSPARENT)?),
        })
    }

    /// Wrap a raw RGBA8 byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] unless
    /// `data.len() == width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            inner: Arc::new(BitmapData {
                width,
                height,
                data,
            }),
        })
    }

    /// Build a bitmap by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgba,
    {
        let mut bmp = BitmapMut::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                bmp.set_pixel_unchecked(x, y, f(x, y));
            }
        }
        Ok(bmp.into())
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.width as usize * BYTES_PER_PIXEL
    }

    /// Raw RGBA8 bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Take the raw bytes, copying only if the buffer is shared.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(shared) => shared.data.clone(),
        }
    }

    /// Whether the bitmap has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Number of `Bitmap` handles sharing this buffer.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get exclusive mutable access without copying.
    ///
    /// Returns `Err(self)` if the buffer is shared.
    pub fn try_into_mut(self) -> std::result::Result<BitmapMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(BitmapMut { inner }),
            Err(inner) => Err(Self { inner }),
        }
    }

    /// Get a mutable copy of this bitmap.
    pub fn to_mut(&self) -> BitmapMut {
        BitmapMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// BitmapMut - exclusively owned, mutable RGBA8 image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapMut {
    inner: BitmapData,
}

impl BitmapMut {
    /// Create a transparent mutable bitmap.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: BitmapData::filled(width, height, Rgba::TRANSPARENT)?,
        })
    }

    /// Create a mutable bitmap with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Result<Self> {
        Ok(Self {
            inner: BitmapData::filled(width, height, fill)?,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.width as usize * BYTES_PER_PIXEL
    }

    /// Raw RGBA8 bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Mutable raw RGBA8 bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for px in self.inner.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }
}

impl From<BitmapMut> for Bitmap {
    fn from(bmp: BitmapMut) -> Self {
        Self {
            inner: Arc::new(bmp.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let bmp = Bitmap::new(3, 2).unwrap();
        assert_eq!(bmp.data().len(), 3 * 2 * 4);
        assert!(bmp.data().iter().all(|&b| b == 0));
        assert_eq!(bmp.stride(), 12);
    }

    #[test]
    fn test_zero_area_allowed() {
        let bmp = Bitmap::new(0, 5).unwrap();
        assert!(bmp.is_empty());
        assert!(bmp.data().is_empty());
    }

    #[test]
    fn test_from_raw_size_mismatch() {
        let err = Bitmap::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_clone_shares_buffer() {
        let bmp = Bitmap::new(2, 2).unwrap();
        let other = bmp.clone();
        assert_eq!(bmp.ref_count(), 2);
        // Shared: cannot take unique ownership
        let bmp = bmp.try_into_mut().unwrap_err();
        drop(other);
        assert!(bmp.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_copies() {
        let bmp = Bitmap::new(2, 2).unwrap();
        let mut copy = bmp.to_mut();
        copy.fill(Rgba::WHITE);
        assert_eq!(bmp.pixel(0, 0), Some(Rgba::TRANSPARENT));
        let copy: Bitmap = copy.into();
        assert_eq!(copy.pixel(1, 1), Some(Rgba::WHITE));
    }

    #[test]
    fn test_filled() {
        let bmp: Bitmap = BitmapMut::filled(2, 3, Rgba::rgb(1, 2, 3)).unwrap().into();
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(bmp.pixel(x, y), Some(Rgba::rgb(1, 2, 3)));
            }
        }
    }

    #[test]
    fn test_into_raw_roundtrip() {
        let raw: Vec<u8> = (0..16).collect();
        let bmp = Bitmap::from_raw(2, 2, raw.clone()).unwrap();
        assert_eq!(bmp.into_raw(), raw);
    }
}
