//! Saliency followed by segmentation

use crate::AnalysisResult;
use rand::Rng;
use salseg_core::Raster;
use salseg_saliency::{SaliencyExtractor, SaliencyOptions};
use salseg_segment::{RegionSegmenter, SegmentError, SegmentOptions, Segmentation};

/// Options for both stages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOptions {
    pub saliency: SaliencyOptions,
    pub segment: SegmentOptions,
}

impl AnalysisOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the saliency options
    pub fn with_saliency(mut self, saliency: SaliencyOptions) -> Self {
        self.saliency = saliency;
        self
    }

    /// Set the segmentation options
    pub fn with_segment(mut self, segment: SegmentOptions) -> Self {
        self.segment = segment;
        self
    }
}

/// Everything produced for one image
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The input image, shared with the caller
    pub original: Raster,
    /// Gray saliency map
    pub saliency: Raster,
    /// Heat-map rendering of the saliency map
    pub heatmap: Raster,
    /// Segmentation, `None` when no salient region was found
    pub segmentation: Option<Segmentation>,
}

/// Run saliency extraction and segmentation on a gray or RGB image.
///
/// Gray inputs are expanded to RGB for the watershed stage. Finding no
/// salient region is not an error: `segmentation` is `None` and the caller
/// can show the original image.
pub fn analyze<R: Rng>(
    image: &Raster,
    options: &AnalysisOptions,
    rng: &mut R,
) -> AnalysisResult<Analysis> {
    let extractor = SaliencyExtractor::new(options.saliency.clone())?;
    let segmenter = RegionSegmenter::new(options.segment.clone())?;

    let out = extractor.extract(image)?;
    let color = image.to_rgb();

    let segmentation = match segmenter.segment(&out.saliency, &color, rng) {
        Ok(seg) => Some(seg),
        Err(SegmentError::NoRegionsFound { threshold }) => {
            log::debug!("analyze: no salient regions at threshold {threshold}");
            None
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Analysis {
        original: image.clone(),
        saliency: out.saliency,
        heatmap: out.heatmap,
        segmentation,
    })
}
