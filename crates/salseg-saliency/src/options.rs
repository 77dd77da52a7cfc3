//! Saliency extraction options

use crate::{SaliencyError, SaliencyResult};

/// Options for [`SaliencyExtractor`](crate::SaliencyExtractor)
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyOptions {
    /// Size of the Gaussian pre-blur kernel (odd)
    pub blur_size: u32,
    /// Sigma of the pre-blur; derived from `blur_size` when `None`
    pub blur_sigma: Option<f32>,
    /// Square size the spectrum is computed at; `None` uses the full image
    pub working_size: Option<u32>,
    /// Size of the box filter averaging the log-amplitude spectrum (odd)
    pub residual_box: u32,
    /// Sigma of the 5x5 Gaussian applied to the squared magnitude
    pub final_sigma: f32,
}

impl Default for SaliencyOptions {
    fn default() -> Self {
        Self {
            blur_size: 5,
            blur_sigma: None,
            working_size: Some(64),
            residual_box: 3,
            final_sigma: 8.0,
        }
    }
}

impl SaliencyOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pre-blur kernel size
    pub fn with_blur_size(mut self, size: u32) -> Self {
        self.blur_size = size;
        self
    }

    /// Set the pre-blur sigma
    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = Some(sigma);
        self
    }

    /// Set the working size, or `None` for full resolution
    pub fn with_working_size(mut self, size: Option<u32>) -> Self {
        self.working_size = size;
        self
    }

    /// Set the spectrum averaging box size
    pub fn with_residual_box(mut self, size: u32) -> Self {
        self.residual_box = size;
        self
    }

    /// Set the sigma of the final smoothing
    pub fn with_final_sigma(mut self, sigma: f32) -> Self {
        self.final_sigma = sigma;
        self
    }

    /// Check that every option is usable
    pub fn validate(&self) -> SaliencyResult<()> {
        for (name, size) in [("blur_size", self.blur_size), ("residual_box", self.residual_box)] {
            if size == 0 || size % 2 == 0 {
                return Err(SaliencyError::InvalidParameters(format!(
                    "{name} must be odd and positive, got {size}"
                )));
            }
        }
        if self.working_size == Some(0) {
            return Err(SaliencyError::InvalidParameters(
                "working_size must be positive".to_string(),
            ));
        }
        if !(self.final_sigma > 0.0 && self.final_sigma.is_finite()) {
            return Err(SaliencyError::InvalidParameters(format!(
                "final_sigma must be positive, got {}",
                self.final_sigma
            )));
        }
        Ok(())
    }
}
