//! Rectangle extraction and rectangle copies
//!
//! Every operation here checks the rectangles against both buffers before
//! touching a single byte, and copies whole row slices at a time.

use super::{Bitmap, BitmapMut};
use crate::Rect;
use crate::check::ensure_rect_fits as ensure_fits;
use crate::error::Result;
use crate::rgba::BYTES_PER_PIXEL;

impl Bitmap {
    /// Extract a rectangular sub-region as a new bitmap.
    ///
    /// Unlike a clipping crop, the rectangle must lie entirely inside the
    /// image. Zero-area rectangles yield a zero-area bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `rect` exceeds the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninepatch_core::{Bitmap, Rect};
    ///
    /// let bmp = Bitmap::new(10, 8).unwrap();
    /// let sub = bmp.clip_rect(&Rect::new(2, 3, 5, 4)).unwrap();
    /// assert_eq!(sub.size(), (5, 4));
    /// assert!(bmp.clip_rect(&Rect::new(8, 0, 3, 1)).is_err());
    /// ```
    pub fn clip_rect(&self, rect: &Rect) -> Result<Bitmap> {
        ensure_fits(rect, self.width(), self.height())?;
        let mut out = BitmapMut::new(rect.w, rect.h)?;
        out.copy_rect(0, 0, self, rect)?;
        Ok(out.into())
    }
}

impl BitmapMut {
    /// Copy `src_rect` of `src` 1:1 into this bitmap with its top-left
    /// corner at `(dst_x, dst_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either rectangle exceeds its
    /// bitmap.
    pub fn copy_rect(
        &mut self,
        dst_x: u32,
        dst_y: u32,
        src: &Bitmap,
        src_rect: &Rect,
    ) -> Result<()> {
        ensure_fits(src_rect, src.width(), src.height())?;
        let dst_rect = Rect::new(dst_x, dst_y, src_rect.w, src_rect.h);
        ensure_fits(&dst_rect, self.width(), self.height())?;
        if src_rect.is_empty() {
            return Ok(());
        }

        let run = src_rect.w as usize * BYTES_PER_PIXEL;
        let src_off = src_rect.x as usize * BYTES_PER_PIXEL;
        let dst_off = dst_x as usize * BYTES_PER_PIXEL;
        for dy in 0..src_rect.h {
            let src_row = &src.row(src_rect.y + dy)[src_off..src_off + run];
            let dst_row = self.row_mut(dst_y + dy);
            dst_row[dst_off..dst_off + run].copy_from_slice(src_row);
        }
        Ok(())
    }
}
