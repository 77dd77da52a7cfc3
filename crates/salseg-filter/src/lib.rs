//! salseg-filter - Image filtering operations
//!
//! This crate provides the linear filters used by saliency extraction:
//!
//! - Convolution kernels (Gaussian, box)
//! - Convolution of scalar fields and gray rasters with reflect-101 borders
//! - Bilinear resampling of scalar fields

pub mod convolve;
mod error;
pub mod kernel;
pub mod scale;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{box_blur_field, convolve_field, gaussian_blur, gaussian_blur_field, reflect_101};
pub use scale::scale_field_bilinear;
