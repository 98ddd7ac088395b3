//! ninepatch-transform - Rectangle resampling for nine-patch rendering
//!
//! This crate provides the integer-only resampling used to fill the
//! stretchable cells of a nine-patch:
//!
//! - 1-D index mapping (nearest-neighbour stretch or tiling)
//! - Rectangle-to-rectangle resampling between bitmaps
//! - Whole-image scaling to a given size

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{FillMode, index_map, map_index, resample_rect, scale_to_size};
