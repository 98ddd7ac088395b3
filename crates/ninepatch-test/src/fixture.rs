//! Synthetic nine-patch sources
//!
//! Builds bordered source images with marker runs at known offsets, so
//! tests can check the analyzer against the offsets they put in.

use ninepatch_core::{Bitmap, Rgba};

/// Default content pixel at content coordinates `(x, y)`.
///
/// Encodes the coordinates in red and green (mod 256) with a fixed blue
/// of 0x80, so it is never mistaken for a marker.
pub fn content_pixel(x: u32, y: u32) -> Rgba {
    Rgba::new(x as u8, y as u8, 0x80, 0xff)
}

/// Builder for a bordered nine-patch source
///
/// Runs are given as `(start, len)` in content coordinates.
#[derive(Debug, Clone)]
pub struct PatchBuilder {
    content_width: u32,
    content_height: u32,
    top: Vec<(u32, u32)>,
    left: Vec<(u32, u32)>,
    bottom: Vec<(u32, u32)>,
    right: Vec<(u32, u32)>,
    marker: Rgba,
    fill: Option<Rgba>,
}

impl PatchBuilder {
    /// Start a source with a `content_width` x `content_height` content area.
    pub fn new(content_width: u32, content_height: u32) -> Self {
        Self {
            content_width,
            content_height,
            top: Vec::new(),
            left: Vec::new(),
            bottom: Vec::new(),
            right: Vec::new(),
            marker: Rgba::BLACK,
            fill: None,
        }
    }

    /// Add a marker run on the top row (horizontal stretch band).
    pub fn stretch_x(mut self, start: u32, len: u32) -> Self {
        self.top.push((start, len));
        self
    }

    /// Add a marker run on the left column (vertical stretch band).
    pub fn stretch_y(mut self, start: u32, len: u32) -> Self {
        self.left.push((start, len));
        self
    }

    /// Add a marker run on the bottom row (horizontal content area).
    pub fn padding_x(mut self, start: u32, len: u32) -> Self {
        self.bottom.push((start, len));
        self
    }

    /// Add a marker run on the right column (vertical content area).
    pub fn padding_y(mut self, start: u32, len: u32) -> Self {
        self.right.push((start, len));
        self
    }

    /// Use `marker` instead of opaque black for marker pixels.
    pub fn marker_color(mut self, marker: Rgba) -> Self {
        self.marker = marker;
        self
    }

    /// Fill the content with a single color instead of [`content_pixel`].
    pub fn fill(mut self, color: Rgba) -> Self {
        self.fill = Some(color);
        self
    }

    fn in_runs(runs: &[(u32, u32)], i: u32) -> bool {
        runs.iter().any(|&(start, len)| i >= start && i < start + len)
    }

    /// Build the bordered source image.
    ///
    /// # Panics
    ///
    /// Panics if the image size overflows; fixtures are always small.
    pub fn build(&self) -> Bitmap {
        let (cw, ch) = (self.content_width, self.content_height);
        Bitmap::from_fn(cw + 2, ch + 2, |x, y| {
            let on_x_edge = (1..=cw).contains(&x);
            let on_y_edge = (1..=ch).contains(&y);
            let marked = (y == 0 && on_x_edge && Self::in_runs(&self.top, x - 1))
                || (y == ch + 1 && on_x_edge && Self::in_runs(&self.bottom, x - 1))
                || (x == 0 && on_y_edge && Self::in_runs(&self.left, y - 1))
                || (x == cw + 1 && on_y_edge && Self::in_runs(&self.right, y - 1));
            if marked {
                self.marker
            } else if on_x_edge && on_y_edge {
                self.fill.unwrap_or_else(|| content_pixel(x - 1, y - 1))
            } else {
                Rgba::TRANSPARENT
            }
        })
        .expect("fixture size")
    }

    /// The content image the source should strip down to.
    pub fn content(&self) -> Bitmap {
        Bitmap::from_fn(self.content_width, self.content_height, |x, y| {
            self.fill.unwrap_or_else(|| content_pixel(x, y))
        })
        .expect("fixture size")
    }
}
