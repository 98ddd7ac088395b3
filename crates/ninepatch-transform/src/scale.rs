//! Integer resampling of pixel runs and rectangles
//!
//! A run of `S` source pixels is mapped onto `T` destination pixels one
//! destination index at a time, so output is reproducible bit for bit and
//! no fractional-pixel blending ever happens:
//!
//! - [`FillMode::Stretch`]: `d -> floor(d * S / T)`, clamped to `S - 1`
//! - [`FillMode::Tile`]: `d -> d mod S`
//!
//! When `S == T` both modes are the identity, which is what keeps
//! unscaled cells byte-identical to their source.

use crate::{TransformError, TransformResult};
use ninepatch_core::check::ensure_rect_fits;
use ninepatch_core::{BYTES_PER_PIXEL, Bitmap, BitmapMut, Rect};

/// How a stretchable run fills a destination of a different length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Nearest-neighbour scaling by truncation
    #[default]
    Stretch,
    /// Repeat the source run end to end
    Tile,
}

/// Map destination index `d` of a run of length `dst_len` to a source index.
///
/// Returns `None` when `src_len == 0`, since an empty run has nothing to
/// sample.
///
/// # Examples
///
/// ```
/// use ninepatch_transform::{FillMode, map_index};
///
/// // 3 source pixels stretched over 7
/// let idx: Vec<_> = (0..7).map(|d| map_index(d, 3, 7, FillMode::Stretch).unwrap()).collect();
/// assert_eq!(idx, [0, 0, 0, 1, 1, 2, 2]);
/// assert_eq!(map_index(5, 3, 7, FillMode::Tile), Some(2));
/// assert_eq!(map_index(0, 0, 7, FillMode::Stretch), None);
/// ```
#[inline]
pub fn map_index(d: u32, src_len: u32, dst_len: u32, mode: FillMode) -> Option<u32> {
    if src_len == 0 {
        return None;
    }
    let s = match mode {
        FillMode::Stretch => {
            if dst_len == 0 {
                0
            } else {
                (d as u64 * src_len as u64 / dst_len as u64) as u32
            }
        }
        FillMode::Tile => d % src_len,
    };
    Some(s.min(src_len - 1))
}

/// Build the full destination-to-source index table for one axis.
///
/// # Errors
///
/// Returns [`TransformError::EmptySource`] if `src_len == 0` while
/// `dst_len > 0`.
pub fn index_map(src_len: u32, dst_len: u32, mode: FillMode) -> TransformResult<Vec<u32>> {
    (0..dst_len)
        .map(|d| {
            map_index(d, src_len, dst_len, mode)
                .ok_or(TransformError::EmptySource { src_len, dst_len })
        })
        .collect()
}

/// Resample `src_rect` of `src` into `dst_rect` of `dst`.
///
/// Each axis is mapped independently with [`map_index`], so a rectangle
/// whose width matches copies columns 1:1 while its rows are scaled, and
/// vice versa. A zero-area destination is a no-op.
///
/// # Errors
///
/// - [`TransformError::Core`] with an out-of-bounds error if either
///   rectangle exceeds its bitmap (checked before any write)
/// - [`TransformError::EmptySource`] if the destination is non-empty but
///   the source has zero width or height
pub fn resample_rect(
    dst: &mut BitmapMut,
    dst_rect: &Rect,
    src: &Bitmap,
    src_rect: &Rect,
    mode: FillMode,
) -> TransformResult<()> {
    ensure_rect_fits(src_rect, src.width(), src.height())?;
    ensure_rect_fits(dst_rect, dst.width(), dst.height())?;
    if dst_rect.is_empty() {
        return Ok(());
    }

    let xmap = index_map(src_rect.w, dst_rect.w, mode)?;
    let ymap = index_map(src_rect.h, dst_rect.h, mode)?;
    let same_width = src_rect.w == dst_rect.w;

    let src_off = src_rect.x as usize * BYTES_PER_PIXEL;
    let dst_off = dst_rect.x as usize * BYTES_PER_PIXEL;
    let run = dst_rect.w as usize * BYTES_PER_PIXEL;

    for (dy, &sy) in ymap.iter().enumerate() {
        let src_row = src.row(src_rect.y + sy);
        let dst_row = &mut dst.row_mut(dst_rect.y + dy as u32)[dst_off..dst_off + run];
        if same_width {
            dst_row.copy_from_slice(&src_row[src_off..src_off + run]);
            continue;
        }
        for (px, &sx) in dst_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(&xmap) {
            let s = src_off + sx as usize * BYTES_PER_PIXEL;
            px.copy_from_slice(&src_row[s..s + BYTES_PER_PIXEL]);
        }
    }
    Ok(())
}

/// Scale a whole bitmap to `width` x `height`.
///
/// # Errors
///
/// Returns [`TransformError::EmptySource`] if `bmp` has zero area and the
/// requested size does not.
pub fn scale_to_size(
    bmp: &Bitmap,
    width: u32,
    height: u32,
    mode: FillMode,
) -> TransformResult<Bitmap> {
    let mut out = BitmapMut::new(width, height)?;
    resample_rect(
        &mut out,
        &Rect::from_size(width, height),
        bmp,
        &Rect::from_size(bmp.width(), bmp.height()),
        mode,
    )?;
    Ok(out.into())
}
