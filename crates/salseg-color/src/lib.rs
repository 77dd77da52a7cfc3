//! salseg-color - Color processing for saliency and segmentation output
//!
//! - **Thresholding** ([`threshold`]): fixed threshold and Otsu's method
//! - **Color ramps** ([`colormap`]): jet and inverted jet lookup tables
//! - **Color tables** ([`color_table`]): per-region colors drawn from a caller RNG

pub mod color_table;
pub mod colormap;
pub mod error;
pub mod threshold;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use color_table::ColorTable;
pub use colormap::{Colormap, jet};
pub use threshold::{compute_otsu_threshold, threshold_otsu, threshold_to_binary};
