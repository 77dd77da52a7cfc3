//! Error types for salseg-segment

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] salseg_core::Error),

    /// Thresholding or color error
    #[error("color error: {0}")]
    Color(#[from] salseg_color::ColorError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] salseg_morph::MorphError),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] salseg_region::RegionError),

    /// Input raster has the wrong channel count
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Saliency map and color image differ in size
    #[error("dimension mismatch: saliency {}x{}, image {}x{}", .saliency.0, .saliency.1, .image.0, .image.1)]
    DimensionMismatch {
        saliency: (u32, u32),
        image: (u32, u32),
    },

    /// Sure foreground has no connected component
    #[error("no salient regions found (otsu threshold {threshold})")]
    NoRegionsFound { threshold: u8 },

    /// A mask that must hold only 0 and 255 holds other values
    #[error("mask is not binary: {0}")]
    NonBinaryMask(&'static str),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
