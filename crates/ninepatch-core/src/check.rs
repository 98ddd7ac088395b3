//! Invariant checks
//!
//! Named runtime checks for the size decompositions and bounds that the
//! partition and compositing code rely on. A failed check is reported as
//! [`Error::InvariantViolation`] or [`Error::OutOfBounds`], never a panic,
//! so a corrupted geometry cannot write outside a buffer.

use crate::Rect;
use crate::error::{Error, Result};

/// Check that the three sub-sizes of one axis sum exactly to `master`.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if the sum differs or overflows.
pub fn ensure_three_sum(axis: &str, master: u32, parts: [u32; 3]) -> Result<()> {
    let sum = parts.iter().map(|&p| p as u64).sum::<u64>();
    if sum == master as u64 {
        Ok(())
    } else {
        Err(Error::InvariantViolation(format!(
            "{axis} decomposition {} + {} + {} = {sum}, expected {master}",
            parts[0], parts[1], parts[2]
        )))
    }
}

/// Check that `rect` lies inside a `width` x `height` buffer.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] otherwise.
pub fn ensure_rect_fits(rect: &Rect, width: u32, height: u32) -> Result<()> {
    if rect.fits_within(width, height) {
        Ok(())
    } else {
        Err(Error::OutOfBounds {
            rect: *rect,
            width,
            height,
        })
    }
}
