//! ninepatch-test - Regression test framework for ninepatch
//!
//! Supports three modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! Nine-patch sources are synthesised with [`PatchBuilder`] instead of
//! being loaded from shipped image files.
//!
//! # Usage
//!
//! ```ignore
//! use ninepatch_test::{PatchBuilder, RegParams};
//!
//! let mut rp = RegParams::new("render");
//! let src = PatchBuilder::new(5, 5).stretch_x(1, 3).build();
//! rp.compare_values(7.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixture;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{PatchBuilder, content_pixel};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // ninepatch-test is at crates/ninepatch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
