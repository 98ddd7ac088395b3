//! Marker border analysis
//!
//! Reads the one-pixel border of a nine-patch source and turns its marker
//! runs into a [`PatchGeometry`] and a [`ContentPadding`].
//!
//! | Edge | Meaning of its marker run |
//! |---|---|
//! | top row | horizontal stretch band |
//! | left column | vertical stretch band |
//! | bottom row | horizontal content area (optional) |
//! | right column | vertical content area (optional) |
//!
//! The four corner pixels of the border are ignored. Each edge may carry
//! at most one contiguous run; an edge without markers leaves its axis
//! with no fixed sizes (for the stretch edges) or no padding (for the
//! content edges).

use crate::error::{MalformedPatch, PatchResult};
use crate::geometry::{ContentPadding, PatchGeometry, PatchInfo};
use log::debug;
use ninepatch_core::{Bitmap, Rect};
use std::fmt;

/// Border edge of a nine-patch source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        };
        f.write_str(name)
    }
}

/// A contiguous marker run, in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: u32,
    len: u32,
}

impl Run {
    /// `(before, after)` lengths around the run on an axis of `content`.
    fn insets(self, content: u32) -> (u32, u32) {
        (self.start, content - self.start - self.len)
    }
}

/// Scan one border edge for its marker run.
fn scan_edge(src: &Bitmap, edge: Edge) -> PatchResult<Option<Run>> {
    let (w, h) = src.size();
    let content = match edge {
        Edge::Top | Edge::Bottom => w - 2,
        Edge::Left | Edge::Right => h - 2,
    };
    let at = |i: u32| {
        let (x, y) = match edge {
            Edge::Top => (i + 1, 0),
            Edge::Bottom => (i + 1, h - 1),
            Edge::Left => (0, i + 1),
            Edge::Right => (w - 1, i + 1),
        };
        src.pixel_unchecked(x, y).is_marker()
    };

    let mut run: Option<Run> = None;
    let mut i = 0;
    while i < content {
        if !at(i) {
            i += 1;
            continue;
        }
        let start = i;
        while i < content && at(i) {
            i += 1;
        }
        if let Some(first) = run {
            return Err(MalformedPatch::DisjointRuns {
                edge,
                run_end: first.start + first.len,
                next_start: start,
            }
            .into());
        }
        run = Some(Run {
            start,
            len: i - start,
        });
    }
    Ok(run)
}

/// Analyze the marker border of `src`.
///
/// # Errors
///
/// Returns a [`MalformedPatch`] error if:
/// - `src` is smaller than 3×3
/// - any edge carries two or more disjoint marker runs
/// - no edge carries a marker at all
pub fn analyze_info(src: &Bitmap) -> PatchResult<PatchInfo> {
    let (width, height) = src.size();
    if width < 3 || height < 3 {
        return Err(MalformedPatch::TooSmall { width, height }.into());
    }
    let content_width = width - 2;
    let content_height = height - 2;

    let top = scan_edge(src, Edge::Top)?;
    let left = scan_edge(src, Edge::Left)?;
    let bottom = scan_edge(src, Edge::Bottom)?;
    let right = scan_edge(src, Edge::Right)?;
    if top.is_none() && left.is_none() && bottom.is_none() && right.is_none() {
        return Err(MalformedPatch::NoMarkers.into());
    }

    let (stretch_left, stretch_right) = top.map_or((0, 0), |r| r.insets(content_width));
    let (stretch_top, stretch_bottom) = left.map_or((0, 0), |r| r.insets(content_height));
    let geometry = PatchGeometry::new(stretch_left, stretch_right, stretch_top, stretch_bottom);

    let (pad_left, pad_right) = bottom.map_or((0, 0), |r| r.insets(content_width));
    let (pad_top, pad_bottom) = right.map_or((0, 0), |r| r.insets(content_height));
    let padding = ContentPadding {
        left: pad_left,
        right: pad_right,
        top: pad_top,
        bottom: pad_bottom,
    };

    debug!(
        "analyzed {}x{} nine-patch: {:?}, {:?}",
        width, height, geometry, padding
    );

    Ok(PatchInfo {
        geometry,
        padding,
        content_width,
        content_height,
    })
}

/// Analyze the marker border of `src` and return its stretch geometry.
///
/// See [`analyze_info`] for the failure conditions.
pub fn analyze(src: &Bitmap) -> PatchResult<PatchGeometry> {
    Ok(analyze_info(src)?.geometry)
}

/// Analyze a raw RGBA8 buffer of `width` x `height` pixels.
///
/// # Errors
///
/// Besides the [`analyze_info`] conditions, fails if `buffer` is not
/// exactly `width * height * 4` bytes.
pub fn analyze_raw(buffer: &[u8], width: u32, height: u32) -> PatchResult<PatchGeometry> {
    let src = Bitmap::from_raw(width, height, buffer.to_vec())?;
    analyze(&src)
}

/// Remove the one-pixel marker border, leaving the content image.
///
/// # Errors
///
/// Returns [`MalformedPatch::TooSmall`] if `src` is smaller than 3×3.
pub fn strip_border(src: &Bitmap) -> PatchResult<Bitmap> {
    let (width, height) = src.size();
    if width < 3 || height < 3 {
        return Err(MalformedPatch::TooSmall { width, height }.into());
    }
    Ok(src.clip_rect(&Rect::new(1, 1, width - 2, height - 2))?)
}
