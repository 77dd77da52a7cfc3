//! Saliency extraction pipeline

use crate::spectral::spectral_residual;
use crate::{SaliencyOptions, SaliencyResult};
use salseg_color::Colormap;
use salseg_core::{FRaster, Raster};
use salseg_filter::{gaussian_blur, gaussian_blur_field, scale_field_bilinear};

/// Kernel size of the smoothing applied to the squared magnitude.
const FINAL_KERNEL: u32 = 5;

/// Saliency map and its heat-map rendering
#[derive(Debug, Clone)]
pub struct SaliencyOutput {
    /// Gray map in `[0, 255]`, higher is more salient
    pub saliency: Raster,
    /// RGB rendering, red for salient and blue for non-salient pixels
    pub heatmap: Raster,
}

/// Spectral-residual saliency extractor
///
/// Holds only options; `extract` can be called concurrently from several
/// threads on a shared extractor.
#[derive(Debug, Clone, Default)]
pub struct SaliencyExtractor {
    options: SaliencyOptions,
}

impl SaliencyExtractor {
    /// Create an extractor with the given options
    pub fn new(options: SaliencyOptions) -> SaliencyResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in use
    pub fn options(&self) -> &SaliencyOptions {
        &self.options
    }

    /// Compute the saliency map and heat map of a gray or RGB raster.
    ///
    /// Both outputs have the input's dimensions. A non-constant saliency
    /// field always spans exactly `0..=255`.
    ///
    /// A zero-sized image cannot reach this call: `Raster` construction
    /// rejects it with [`salseg_core::Error::InvalidDimension`].
    pub fn extract(&self, image: &Raster) -> SaliencyResult<SaliencyOutput> {
        let opts = &self.options;
        let (w, h) = image.dimensions();

        let gray = image.to_gray();
        let blurred = gaussian_blur(&gray, opts.blur_size, opts.blur_sigma)?;
        let field = FRaster::from_raster(&blurred)?;

        let working = match opts.working_size {
            Some(n) => scale_field_bilinear(&field, n, n)?,
            None => field,
        };
        log::trace!(
            "saliency: {}x{} image, spectrum at {}x{}",
            w,
            h,
            working.width(),
            working.height()
        );

        let energy = spectral_residual(&working, opts.residual_box)?;
        let smoothed = gaussian_blur_field(&energy, FINAL_KERNEL, Some(opts.final_sigma))?;
        let full = scale_field_bilinear(&smoothed, w, h)?;

        let saliency = full.to_raster_normalized()?;
        let heatmap = render_heatmap(&saliency)?;
        let (lo, hi) = saliency.min_max();
        log::debug!("saliency: {}x{} map, range {}..={}", w, h, lo, hi);

        Ok(SaliencyOutput { saliency, heatmap })
    }
}

/// Extract saliency with default options.
pub fn extract_saliency(image: &Raster) -> SaliencyResult<SaliencyOutput> {
    SaliencyExtractor::default().extract(image)
}

/// Render a saliency map as a heat map.
///
/// Every pixel satisfies
/// `heatmap(p) == Colormap::InvertedJet.lookup(255 - saliency(p))`.
pub fn render_heatmap(saliency: &Raster) -> SaliencyResult<Raster> {
    Ok(Colormap::InvertedJet.apply(&saliency.invert())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SaliencyError;
    use salseg_core::{Channels, RasterMut};

    fn bright_square(w: u32, h: u32) -> Raster {
        let mut r = RasterMut::new(w, h, Channels::Rgb).unwrap();
        for y in 0..h {
            for x in 0..w {
                let inside = x >= w / 3 && x < 2 * w / 3 && y >= h / 3 && y < 2 * h / 3;
                r.set_rgb_unchecked(x, y, if inside { [250, 240, 30] } else { [20, 30, 40] });
            }
        }
        r.into()
    }

    #[test]
    fn test_output_shape_and_range() {
        let image = bright_square(48, 36);
        let out = extract_saliency(&image).unwrap();
        assert_eq!(out.saliency.dimensions(), (48, 36));
        assert_eq!(out.saliency.channels(), Channels::Gray);
        assert_eq!(out.heatmap.dimensions(), (48, 36));
        assert_eq!(out.heatmap.channels(), Channels::Rgb);
        assert_eq!(out.saliency.min_max(), (0, 255));
    }

    #[test]
    fn test_heatmap_law() {
        let image = bright_square(30, 30);
        let out = extract_saliency(&image).unwrap();
        for y in 0..30 {
            for x in 0..30 {
                let s = out.saliency.get_pixel(x, y).unwrap();
                assert_eq!(
                    out.heatmap.get_rgb(x, y),
                    Some(Colormap::InvertedJet.lookup(255 - s))
                );
            }
        }
    }

    #[test]
    fn test_full_resolution() {
        let image = bright_square(20, 16);
        let opts = SaliencyOptions::new().with_working_size(None);
        let out = SaliencyExtractor::new(opts).unwrap().extract(&image).unwrap();
        assert_eq!(out.saliency.dimensions(), (20, 16));
    }

    #[test]
    fn test_gray_input_accepted() {
        let gray = bright_square(16, 16).to_gray();
        assert!(extract_saliency(&gray).is_ok());
    }

    #[test]
    fn test_zero_sized_image_unrepresentable() {
        assert!(matches!(
            Raster::new(0, 8, Channels::Rgb),
            Err(salseg_core::Error::InvalidDimension { .. })
        ));
        let one = Raster::new_with_value(1, 1, Channels::Rgb, 7).unwrap();
        assert_eq!(extract_saliency(&one).unwrap().saliency.dimensions(), (1, 1));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let opts = SaliencyOptions::new().with_blur_size(2);
        assert!(matches!(
            SaliencyExtractor::new(opts),
            Err(SaliencyError::InvalidParameters(_))
        ));
    }
}
