//! Error types for ninepatch-patch

use crate::analyze::Edge;
use crate::partition::Axis;
use thiserror::Error;

/// Why a source image is not a usable nine-patch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPatch {
    /// Smaller than a one-pixel border around one content pixel
    #[error("image {width}x{height} is smaller than 3x3")]
    TooSmall { width: u32, height: u32 },

    /// No marker pixel on any of the four border edges
    #[error("no marker pixels on any border edge")]
    NoMarkers,

    /// An edge carries more than one run of marker pixels
    #[error("{edge} edge has disjoint marker runs: run ends at {run_end}, next starts at {next_start}")]
    DisjointRuns {
        edge: Edge,
        run_end: u32,
        next_start: u32,
    },

    /// Fixed sizes on one axis exceed the content size
    #[error("{axis} fixed sizes {low} + {high} exceed content size {content}")]
    GeometryExceedsContent {
        axis: Axis,
        low: u32,
        high: u32,
        content: u32,
    },
}

/// Errors that can occur while analyzing or rendering a nine-patch
#[derive(Debug, Error)]
pub enum PatchError {
    /// The marker border or geometry is inconsistent
    #[error("malformed nine-patch: {0}")]
    Malformed(#[from] MalformedPatch),

    /// The requested output is smaller than the fixed content
    #[error("invalid target {axis} size {requested}: minimum is {minimum}")]
    InvalidTargetSize {
        axis: Axis,
        requested: u32,
        minimum: u32,
    },

    /// Core library error (buffer construction, bounds, invariants)
    #[error("core error: {0}")]
    Core(#[from] ninepatch_core::Error),

    /// Resampling error
    #[error("transform error: {0}")]
    Transform(#[from] ninepatch_transform::TransformError),
}

/// Result type for nine-patch operations
pub type PatchResult<T> = Result<T, PatchError>;
