//! salseg-test - Regression test framework for salseg
//!
//! Supports three modes:
//!
//! - **Generate**: Write golden files for later comparison
//! - **Compare**: Compare results with golden files when they exist
//! - **Display**: Run tests and write outputs for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use salseg_test::RegParams;
//!
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(1.0, region_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // salseg-test is at crates/salseg-test, so go up two directories
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
