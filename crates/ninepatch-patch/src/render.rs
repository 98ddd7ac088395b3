//! Nine-patch compositing
//!
//! Rendering builds the source partition from the geometry and the
//! content size, the target partition from the geometry and the requested
//! size, then fills each of the nine destination cells from its source
//! cell:
//!
//! - corners are copied 1:1 (their sizes match by construction)
//! - top/bottom edges are resampled horizontally, left/right edges
//!   vertically; the other axis copies 1:1
//! - the center is resampled on both axes
//!
//! Resampling is integer-only (see [`ninepatch_transform::map_index`]),
//! so a render is deterministic and an unscaled render is byte-identical
//! to the content image.
//!
//! A stretchable band can be empty in the source when the two fixed
//! sizes cover the whole content. If the target still gives that band a
//! non-zero length, it is filled by replicating the nearest fixed pixel
//! column or row: the first half from the low side, the rest from the
//! high side.

use crate::analyze::strip_border;
use crate::error::PatchResult;
use crate::geometry::PatchGeometry;
use crate::partition::{Band, Partition, Region, Span};
use log::{debug, trace};
use ninepatch_core::check::ensure_rect_fits;
use ninepatch_core::{Bitmap, BitmapMut, Error, Rect};
use ninepatch_transform::{FillMode, resample_rect};

/// Options for rendering a nine-patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Fill mode of the four edge cells
    pub edge_fill: FillMode,
    /// Fill mode of the center cell
    pub center_fill: FillMode,
}

impl RenderOptions {
    /// Create options using `fill` for every stretchable cell
    pub fn with_fill(fill: FillMode) -> Self {
        Self {
            edge_fill: fill,
            center_fill: fill,
        }
    }

    /// Set the fill mode of the edge cells
    pub fn edge_fill(mut self, fill: FillMode) -> Self {
        self.edge_fill = fill;
        self
    }

    /// Set the fill mode of the center cell
    pub fn center_fill(mut self, fill: FillMode) -> Self {
        self.center_fill = fill;
        self
    }

    fn fill_for(&self, region: Region) -> FillMode {
        if region == Region::Center {
            self.center_fill
        } else {
            self.edge_fill
        }
    }
}

/// Part of a destination band together with the source run that fills it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Piece {
    src_off: u32,
    src_len: u32,
    dst_off: u32,
    dst_len: u32,
}

/// Split one destination band into the pieces that fill it.
///
/// Normally a single piece. An empty source middle band facing a
/// non-empty target band becomes up to two one-pixel replication pieces.
fn band_pieces(src: &Span, dst: &Span, band: Band) -> Vec<Piece> {
    let piece = Piece {
        src_off: src.offset(band),
        src_len: src.len(band),
        dst_off: dst.offset(band),
        dst_len: dst.len(band),
    };
    if piece.dst_len == 0 {
        return Vec::new();
    }
    if piece.src_len > 0 || band != Band::Middle || (src.low == 0 && src.high == 0) {
        return vec![piece];
    }

    let low_take = match (src.low > 0, src.high > 0) {
        (true, true) => piece.dst_len.div_ceil(2),
        (true, false) => piece.dst_len,
        _ => 0,
    };
    let high_take = piece.dst_len - low_take;

    let mut pieces = Vec::with_capacity(2);
    if low_take > 0 {
        pieces.push(Piece {
            src_off: src.low - 1,
            src_len: 1,
            dst_off: piece.dst_off,
            dst_len: low_take,
        });
    }
    if high_take > 0 {
        pieces.push(Piece {
            src_off: src.offset(Band::High),
            src_len: 1,
            dst_off: piece.dst_off + low_take,
            dst_len: high_take,
        });
    }
    pieces
}

/// Fill a `target`-sized bitmap from `content` split by `source`.
pub(crate) fn compose(
    content: &Bitmap,
    source: &Partition,
    target: &Partition,
    options: &RenderOptions,
    mut hook: Option<&mut dyn FnMut(Region, &Bitmap)>,
) -> PatchResult<Bitmap> {
    if source.size() != content.size() {
        return Err(Error::DimensionMismatch {
            expected: content.size(),
            actual: source.size(),
        }
        .into());
    }
    let (width, height) = target.size();
    let mut out = BitmapMut::new(width, height)?;

    for region in Region::ALL {
        let src_rect = source.cell(region);
        let dst_rect = target.cell(region);
        ensure_rect_fits(&src_rect, content.width(), content.height())?;
        ensure_rect_fits(&dst_rect, width, height)?;

        if let Some(hook) = hook.as_deref_mut() {
            hook(region, &content.clip_rect(&src_rect)?);
        }
        if dst_rect.is_empty() {
            continue;
        }

        if region.is_corner() {
            if (src_rect.w, src_rect.h) != (dst_rect.w, dst_rect.h) {
                return Err(Error::InvariantViolation(format!(
                    "{region:?} corner changed size: {src_rect:?} -> {dst_rect:?}"
                ))
                .into());
            }
            out.copy_rect(dst_rect.x, dst_rect.y, content, &src_rect)?;
        } else {
            let fill = options.fill_for(region);
            let (col, row) = region.bands();
            let rows = band_pieces(&source.y, &target.y, row);
            for px in band_pieces(&source.x, &target.x, col) {
                for py in &rows {
                    resample_rect(
                        &mut out,
                        &Rect::new(px.dst_off, py.dst_off, px.dst_len, py.dst_len),
                        content,
                        &Rect::new(px.src_off, py.src_off, px.src_len, py.src_len),
                        fill,
                    )?;
                }
            }
        }
        trace!("{region:?}: {src_rect:?} -> {dst_rect:?}");
    }

    Ok(out.into())
}

fn render_inner(
    src: &Bitmap,
    geometry: &PatchGeometry,
    width: u32,
    height: u32,
    options: &RenderOptions,
    hook: Option<&mut dyn FnMut(Region, &Bitmap)>,
) -> PatchResult<Bitmap> {
    let content = strip_border(src)?;
    let source = Partition::source(geometry, content.width(), content.height())?;
    let target = Partition::target(geometry, width, height)?;
    debug!(
        "rendering {}x{} content to {}x{}: x {:?}, y {:?}",
        content.width(),
        content.height(),
        width,
        height,
        target.x,
        target.y
    );
    compose(&content, &source, &target, options, hook)
}

/// Render the nine-patch source `src` at `width` x `height`.
///
/// `src` is the full source image including its marker border, and
/// `geometry` is usually the result of [`analyze`](crate::analyze) on it.
///
/// # Errors
///
/// - [`PatchError::Malformed`](crate::PatchError::Malformed) if `src` is
///   smaller than 3×3 or `geometry` does not fit its content
/// - [`PatchError::InvalidTargetSize`](crate::PatchError::InvalidTargetSize)
///   if either dimension is smaller than the fixed sizes on its axis
pub fn render(
    src: &Bitmap,
    geometry: &PatchGeometry,
    width: u32,
    height: u32,
) -> PatchResult<Bitmap> {
    render_with(src, geometry, width, height, &RenderOptions::default())
}

/// Render with explicit [`RenderOptions`].
pub fn render_with(
    src: &Bitmap,
    geometry: &PatchGeometry,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> PatchResult<Bitmap> {
    render_inner(src, geometry, width, height, options, None)
}

/// Render, handing each source cell to `hook` before compositing.
///
/// The hook sees all nine cells in row-major order, including empty ones,
/// which is useful for dumping intermediate sub-images while debugging a
/// patch.
pub fn render_with_hook<F>(
    src: &Bitmap,
    geometry: &PatchGeometry,
    width: u32,
    height: u32,
    options: &RenderOptions,
    mut hook: F,
) -> PatchResult<Bitmap>
where
    F: FnMut(Region, &Bitmap),
{
    let hook: &mut dyn FnMut(Region, &Bitmap) = &mut hook;
    render_inner(src, geometry, width, height, options, Some(hook))
}

/// Render a raw RGBA8 source buffer, returning raw RGBA8 bytes of
/// `target_width` x `target_height` pixels.
pub fn render_raw(
    buffer: &[u8],
    width: u32,
    height: u32,
    geometry: &PatchGeometry,
    target_width: u32,
    target_height: u32,
) -> PatchResult<Vec<u8>> {
    let src = Bitmap::from_raw(width, height, buffer.to_vec())?;
    Ok(render(&src, geometry, target_width, target_height)?.into_raw())
}
