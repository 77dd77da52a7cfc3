//! salseg-saliency - Spectral-residual saliency detection
//!
//! Computes a per-pixel saliency map from an RGB or gray raster:
//! the image is blurred, its log-amplitude spectrum is compared with a
//! local average of itself, and the residual is transformed back to the
//! spatial domain. The result is rescaled to `[0, 255]` and rendered as
//! a heat map.
//!
//! # Examples
//!
//! ```
//! use salseg_core::{Channels, Raster};
//! use salseg_saliency::extract_saliency;
//!
//! let image = Raster::new_with_value(32, 24, Channels::Rgb, 90).unwrap();
//! let out = extract_saliency(&image).unwrap();
//! assert_eq!(out.saliency.dimensions(), (32, 24));
//! assert_eq!(out.heatmap.channels(), Channels::Rgb);
//! ```

mod error;
pub mod extractor;
pub mod options;
pub mod spectral;

pub use error::{SaliencyError, SaliencyResult};
pub use extractor::{SaliencyExtractor, SaliencyOutput, extract_saliency, render_heatmap};
pub use options::SaliencyOptions;
pub use spectral::spectral_residual;
