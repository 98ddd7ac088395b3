//! ninepatch-core - Basic data structures for nine-patch rendering
//!
//! This crate provides the fundamental types shared by the rest of the
//! workspace:
//!
//! - [`Bitmap`] / [`BitmapMut`] - RGBA8 image container (immutable / mutable)
//! - [`Rgba`] - A single pixel and the marker test
//! - [`Rect`] - Axis-aligned rectangle used for cell bounds
//! - [`check`] - Invariant checks for size decompositions and bounds
//!
//! # Binary layout
//!
//! Pixel data is a tightly packed byte buffer, row-major, four bytes per
//! pixel in R, G, B, A order. The stride of every row is `width * 4` and
//! rows carry no padding, so pixel `(x, y)` starts at byte
//! `(y * width + x) * 4`.

pub mod bitmap;
pub mod check;
pub mod error;
pub mod rect;
pub mod rgba;

pub use bitmap::{Bitmap, BitmapMut};
pub use error::{Error, Result};
pub use rect::Rect;
pub use rgba::{BYTES_PER_PIXEL, Rgba};
