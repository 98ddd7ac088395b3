//! Pixel access functions
//!
//! Bounds-checked reads and writes of single pixels and whole rows. The
//! `_unchecked` variants skip the coordinate check but are still backed
//! by slice indexing, so a bad coordinate panics instead of reading
//! foreign memory.

use super::{Bitmap, BitmapMut};
use crate::error::{Error, Result};
use crate::rgba::{ALPHA, BLUE, BYTES_PER_PIXEL, GREEN, RED, Rgba};

#[inline]
fn offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL
}

#[inline]
fn read(data: &[u8], i: usize) -> Rgba {
    let px = &data[i..i + BYTES_PER_PIXEL];
    Rgba::new(px[RED], px[GREEN], px[BLUE], px[ALPHA])
}

impl Bitmap {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the buffer.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        read(self.data(), offset(self.width(), x, y))
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data()
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| read(px, 0))
    }

    /// Bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height(), "row index out of bounds");
        let start = y as usize * self.stride();
        &self.data()[start..start + self.stride()]
    }
}

impl BitmapMut {
    /// Get the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(read(self.data(), offset(self.width(), x, y)))
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, color);
        Ok(())
    }

    /// Set the pixel at (x, y) without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: Rgba) {
        let i = offset(self.width(), x, y);
        self.data_mut()[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
    }

    /// Mutable bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height(), "row index out of bounds");
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data_mut()[start..start + stride]
    }
}
