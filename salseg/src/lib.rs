//! salseg - Saliency maps and salient-region segmentation
//!
//! # Overview
//!
//! Two stages run on an in-memory raster:
//!
//! - Saliency extraction with the spectral residual method, giving a gray
//!   saliency map and a heat map
//! - Segmentation of the salient regions by Otsu thresholding, morphology,
//!   a distance transform and marker-controlled watershed flooding
//!
//! [`analyze`] runs both; the stage crates are re-exported as modules.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use salseg::{AnalysisOptions, Channels, Raster, analyze};
//!
//! let image = Raster::new_with_value(64, 48, Channels::Rgb, 40).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let analysis = analyze(&image, &AnalysisOptions::default(), &mut rng).unwrap();
//! assert_eq!(analysis.saliency.dimensions(), (64, 48));
//! ```

mod analysis_error;
mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use salseg_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use salseg_color as color;
pub use salseg_filter as filter;
pub use salseg_io as io;
pub use salseg_morph as morph;
pub use salseg_region as region;
pub use salseg_saliency as saliency;
pub use salseg_segment as segment;

pub use analysis_error::{AnalysisError, AnalysisResult};
pub use pipeline::{Analysis, AnalysisOptions, analyze};
