//! Error types for salseg-saliency

use thiserror::Error;

/// Errors that can occur during saliency extraction
#[derive(Debug, Error)]
pub enum SaliencyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] salseg_core::Error),

    /// Filtering error
    #[error("filter error: {0}")]
    Filter(#[from] salseg_filter::FilterError),

    /// Color mapping error
    #[error("color error: {0}")]
    Color(#[from] salseg_color::ColorError),

    /// A frequency-domain buffer could not be allocated
    #[error("allocation failed: {0} elements")]
    AllocationFailed(usize),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for saliency operations
pub type SaliencyResult<T> = Result<T, SaliencyError>;
