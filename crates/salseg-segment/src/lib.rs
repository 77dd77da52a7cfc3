//! salseg-segment - Region segmentation of saliency maps
//!
//! Turns a saliency map and its color image into a label matrix and color
//! renderings:
//!
//! 1. Otsu binarization of the saliency map
//! 2. Opening to remove specks, dilation for the sure background
//! 3. Distance transform threshold for the sure foreground
//! 4. Connected-component markers, with the band between the two left unknown
//! 5. Watershed flooding of the color image from the markers
//!
//! Labels: -1 boundary, 0 unreached, 1 background, 2.. regions in the
//! raster order of their first sure-foreground pixel.

mod error;
pub mod markers;
pub mod options;
pub mod segmenter;

pub use error::{SegmentError, SegmentResult};
pub use markers::{build_markers, unknown_region};
pub use options::SegmentOptions;
pub use segmenter::{
    RegionSegmenter, Segmentation, render_boundaries, render_regions, segment_regions,
};
