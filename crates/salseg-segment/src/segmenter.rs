//! Saliency-driven region segmentation

use crate::markers::{build_markers, unknown_region};
use crate::{SegmentError, SegmentOptions, SegmentResult};
use rand::Rng;
use salseg_color::{ColorTable, threshold_otsu};
use salseg_core::{BACKGROUND_LABEL, BOUNDARY_LABEL, Channels, LabelMatrix, Raster, RasterMut};
use salseg_morph::{Sel, dilate_iter, open_iter};
use salseg_region::{distance_transform, watershed};

/// Result of segmenting one image
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Per-pixel labels: -1 boundary, 0 unreached, 1 background, 2.. regions
    pub labels: LabelMatrix,
    /// Region colors over black, blended with the saliency map
    pub colorized: Raster,
    /// Regions, background and white boundaries, blended with the saliency map
    pub boundary_overlay: Raster,
    /// Colors used by both renderings
    pub color_table: ColorTable,
    /// Number of foreground regions N; region ids are `2..=N + 1`
    pub region_count: usize,
    /// Otsu threshold applied to the saliency map
    pub threshold: u8,
}

/// Marker-controlled watershed segmenter
///
/// Labels are a pure function of the saliency map and the color image;
/// only the colors depend on the RNG passed to [`segment`](Self::segment).
#[derive(Debug, Clone, Default)]
pub struct RegionSegmenter {
    options: SegmentOptions,
}

impl RegionSegmenter {
    /// Create a segmenter with the given options
    pub fn new(options: SegmentOptions) -> SegmentResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in use
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment `color_image` guided by its gray `saliency` map.
    ///
    /// # Errors
    ///
    /// - [`SegmentError::InvalidInput`] if `saliency` is not gray or
    ///   `color_image` is not RGB
    /// - [`SegmentError::DimensionMismatch`] if their sizes differ
    /// - [`SegmentError::NoRegionsFound`] if no sure-foreground pixel remains
    pub fn segment<R: Rng>(
        &self,
        saliency: &Raster,
        color_image: &Raster,
        rng: &mut R,
    ) -> SegmentResult<Segmentation> {
        let opts = &self.options;
        if saliency.channels() != Channels::Gray {
            return Err(SegmentError::InvalidInput(
                "saliency map must have 1 channel".to_string(),
            ));
        }
        if color_image.channels() != Channels::Rgb {
            return Err(SegmentError::InvalidInput(
                "color image must have 3 channels".to_string(),
            ));
        }
        if saliency.dimensions() != color_image.dimensions() {
            return Err(SegmentError::DimensionMismatch {
                saliency: saliency.dimensions(),
                image: color_image.dimensions(),
            });
        }

        let (mask, threshold) = threshold_otsu(saliency)?;
        log::debug!(
            "segment: otsu threshold {}, {} foreground pixels",
            threshold,
            mask.count_nonzero()
        );

        let sel = Sel::create_square(3)?;
        let mut opened = open_iter(&mask, &sel, opts.open_iterations)?;
        if opened.count_nonzero() == 0 && mask.count_nonzero() > 0 {
            log::debug!("segment: opening removed every foreground pixel, keeping the mask");
            opened = mask;
        }
        let sure_bg = dilate_iter(&opened, &sel, opts.background_dilate_iterations)?;

        let distance = distance_transform(&opened)?;
        let (_, max_distance) = distance.min_max();
        let cutoff = opts.foreground_fraction * max_distance;
        let fg_data = distance
            .data()
            .iter()
            .map(|&d| if d > cutoff { 255 } else { 0 })
            .collect();
        let sure_fg = Raster::from_data(saliency.width(), saliency.height(), Channels::Gray, fg_data)?;
        log::debug!(
            "segment: max distance {:.3}, {} sure foreground pixels",
            max_distance,
            sure_fg.count_nonzero()
        );

        let unknown = unknown_region(&sure_bg, &sure_fg)?;
        let (mut labels, region_count) = build_markers(&sure_fg, &unknown)?;
        if region_count == 0 {
            return Err(SegmentError::NoRegionsFound { threshold });
        }

        watershed(color_image, &mut labels)?;
        log::debug!("segment: {} regions", region_count);

        let color_table = ColorTable::random(region_count, rng);
        let colorized = render_regions(&labels, &color_table, saliency, opts.overlay_fraction)?;
        let boundary_overlay =
            render_boundaries(&labels, &color_table, saliency, opts.overlay_fraction)?;

        Ok(Segmentation {
            labels,
            colorized,
            boundary_overlay,
            color_table,
            region_count,
            threshold,
        })
    }
}

/// Segment with default options.
pub fn segment_regions<R: Rng>(
    saliency: &Raster,
    color_image: &Raster,
    rng: &mut R,
) -> SegmentResult<Segmentation> {
    RegionSegmenter::default().segment(saliency, color_image, rng)
}

/// Region colors over black, blended with `saliency` at `fraction`.
///
/// Ids `2..=N + 1` take their table color; background, boundary, unreached
/// and out-of-range cells are black.
pub fn render_regions(
    labels: &LabelMatrix,
    table: &ColorTable,
    saliency: &Raster,
    fraction: f32,
) -> SegmentResult<Raster> {
    paint(labels, saliency, fraction, |id| table.region(id))
}

/// Like [`render_regions`], with boundaries white and background in the
/// table's background color.
pub fn render_boundaries(
    labels: &LabelMatrix,
    table: &ColorTable,
    saliency: &Raster,
    fraction: f32,
) -> SegmentResult<Raster> {
    paint(labels, saliency, fraction, |id| match id {
        BOUNDARY_LABEL => Some([255; 3]),
        BACKGROUND_LABEL => Some(table.background()),
        _ => table.region(id),
    })
}

fn paint<F>(labels: &LabelMatrix, saliency: &Raster, fraction: f32, color: F) -> SegmentResult<Raster>
where
    F: Fn(i32) -> Option<[u8; 3]>,
{
    let (w, h) = labels.dimensions();
    let mut layer = RasterMut::new(w, h, Channels::Rgb)?;
    for (px, &id) in layer.data_mut().chunks_exact_mut(3).zip(labels.data()) {
        if let Some(rgb) = color(id) {
            px.copy_from_slice(&rgb);
        }
    }
    let layer: Raster = layer.into();
    Ok(layer.blend(saliency, fraction)?)
}
