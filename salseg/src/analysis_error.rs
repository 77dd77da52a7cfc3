//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors that can occur while analyzing an image
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Saliency extraction failed
    #[error("saliency error: {0}")]
    Saliency(#[from] salseg_saliency::SaliencyError),

    /// Segmentation failed for a reason other than finding no regions
    #[error("segmentation error: {0}")]
    Segment(#[from] salseg_segment::SegmentError),
}

/// Result type for the analysis pipeline
pub type AnalysisResult<T> = Result<T, AnalysisError>;
