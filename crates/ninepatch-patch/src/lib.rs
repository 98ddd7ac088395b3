//! ninepatch-patch - Nine-patch analysis and compositing
//!
//! A nine-patch is an RGBA image whose one-pixel border carries black
//! marker pixels. The markers on the top row and left column select the
//! stretchable band on each axis; those on the bottom row and right column
//! optionally select the content (padding) area. Stripping the border
//! leaves the content image, which splits into a 3×3 grid:
//!
//! ```text
//!  +----------+--------------+-----------+
//!  | TopLeft  |     Top      | TopRight  |   fixed height
//!  +----------+--------------+-----------+
//!  |  Left    |    Center    |   Right   |   stretched height
//!  +----------+--------------+-----------+
//!  |BottomLeft|    Bottom    |BottomRight|   fixed height
//!  +----------+--------------+-----------+
//!   fixed width  stretched    fixed width
//! ```
//!
//! Rendering keeps the four corners pixel-exact and resamples the edges
//! along one axis and the center along both.
//!
//! # Usage
//!
//! ```
//! use ninepatch_core::{Bitmap, Rgba};
//! use ninepatch_patch::NinePatch;
//!
//! // 5x5 source: 3x3 content, middle column and row stretchable
//! let src = Bitmap::from_fn(5, 5, |x, y| {
//!     if (y == 0 && x == 2) || (x == 0 && y == 2) {
//!         Rgba::BLACK
//!     } else {
//!         Rgba::WHITE
//!     }
//! })
//! .unwrap();
//!
//! let patch = NinePatch::from_bitmap(&src).unwrap();
//! assert_eq!(patch.min_size(), (2, 2));
//! let out = patch.render(40, 12).unwrap();
//! assert_eq!(out.size(), (40, 12));
//! ```

pub mod analyze;
pub mod cache;
mod error;
pub mod geometry;
pub mod ninepatch;
pub mod partition;
pub mod render;

pub use analyze::{Edge, analyze, analyze_info, analyze_raw, strip_border};
pub use cache::RenderCache;
pub use error::{MalformedPatch, PatchError, PatchResult};
pub use geometry::{ContentPadding, PatchGeometry, PatchInfo};
pub use ninepatch::NinePatch;
pub use ninepatch_transform::FillMode;
pub use partition::{Axis, Band, Partition, Region, Span};
pub use render::{RenderOptions, render, render_raw, render_with, render_with_hook};
