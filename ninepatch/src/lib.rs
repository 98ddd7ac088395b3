//! ninepatch - Scalable nine-patch images for Rust
//!
//! A nine-patch is an image with a one-pixel border of black marker
//! pixels. The markers split the image into four fixed corners, four
//! edges that stretch along one axis, and a center that stretches along
//! both, so UI chrome such as buttons, bubbles and panels can be drawn at
//! any size without distorting its corners.
//!
//! - [`patch`] - border analysis and compositing
//! - [`transform`] - the integer resampling behind the stretchable cells
//! - [`io`] - PNG decode/encode (feature `io`, on by default)
//!
//! # Example
//!
//! ```
//! use ninepatch::{Bitmap, NinePatch, Rgba};
//!
//! // 3x3 content with its middle column and row stretchable
//! let src = Bitmap::from_fn(5, 5, |x, y| match (x, y) {
//!     (2, 0) | (0, 2) => Rgba::BLACK,
//!     _ => Rgba::rgb(200, 220, 240),
//! })
//! .unwrap();
//!
//! let patch = NinePatch::from_bitmap(&src).unwrap();
//! let button = patch.render(120, 32).unwrap();
//! assert_eq!(button.size(), (120, 32));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ninepatch_core::*;

pub use ninepatch_patch::{
    FillMode, NinePatch, PatchError, PatchGeometry, PatchResult, RenderCache, RenderOptions,
    analyze, render,
};

// Re-export domain crates as modules to avoid name conflicts
#[cfg(feature = "io")]
pub use ninepatch_io as io;
pub use ninepatch_patch as patch;
pub use ninepatch_transform as transform;
