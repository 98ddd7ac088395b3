//! Error types for ninepatch-transform

use thiserror::Error;

/// Errors that can occur while resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ninepatch_core::Error),

    /// A non-empty destination was requested from an empty source run
    #[error("cannot resample empty source run of {src_len} into {dst_len}")]
    EmptySource { src_len: u32, dst_len: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
