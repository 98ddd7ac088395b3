//! Error types for ninepatch-core
//!
//! Provides a unified error type for buffer construction, pixel access
//! and invariant checks. Higher-level crates wrap it with `#[from]`.

use thiserror::Error;

/// ninepatch-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw buffer length does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Rectangle does not fit inside the image it addresses
    #[error("rectangle {rect:?} exceeds image bounds {width}x{height}")]
    OutOfBounds {
        rect: crate::Rect,
        width: u32,
        height: u32,
    },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// An internal size or bounds invariant failed
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type alias for ninepatch-core operations
pub type Result<T> = std::result::Result<T, Error>;
