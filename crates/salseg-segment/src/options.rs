//! Segmentation options

use crate::{SegmentError, SegmentResult};

/// Options for [`RegionSegmenter`](crate::RegionSegmenter)
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOptions {
    /// Iterations of the 3x3 opening applied to the binary mask
    pub open_iterations: u32,
    /// Iterations of the 3x3 dilation giving the sure background
    pub background_dilate_iterations: u32,
    /// Fraction of the maximum distance above which pixels are sure foreground
    pub foreground_fraction: f32,
    /// Weight of the saliency map in the blended renderings
    pub overlay_fraction: f32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            open_iterations: 2,
            background_dilate_iterations: 3,
            foreground_fraction: 0.3,
            overlay_fraction: 0.5,
        }
    }
}

impl SegmentOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening iterations
    pub fn with_open_iterations(mut self, n: u32) -> Self {
        self.open_iterations = n;
        self
    }

    /// Set the background dilation iterations
    pub fn with_background_dilate_iterations(mut self, n: u32) -> Self {
        self.background_dilate_iterations = n;
        self
    }

    /// Set the sure-foreground distance fraction
    pub fn with_foreground_fraction(mut self, fraction: f32) -> Self {
        self.foreground_fraction = fraction;
        self
    }

    /// Set the overlay blend fraction
    pub fn with_overlay_fraction(mut self, fraction: f32) -> Self {
        self.overlay_fraction = fraction;
        self
    }

    /// Check that both fractions lie in (0, 1]
    pub fn validate(&self) -> SegmentResult<()> {
        for (name, v) in [
            ("foreground_fraction", self.foreground_fraction),
            ("overlay_fraction", self.overlay_fraction),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(SegmentError::InvalidParameters(format!(
                    "{name} must be in (0, 1], got {v}"
                )));
            }
        }
        Ok(())
    }
}
