//! Raster blending
//!
//! Linear alpha blending of two same-sized rasters:
//! `out = (1 - fract) * base + fract * blend`, rounded to the nearest byte.

use super::Raster;
use crate::error::{Error, Result};

impl Raster {
    /// Blend `blend` onto this raster with a blending fraction.
    ///
    /// A gray operand is expanded to RGB when the other operand is RGB, so
    /// a saliency map can be laid under a color overlay directly.
    ///
    /// # Arguments
    ///
    /// * `blend` - Raster to blend in
    /// * `fract` - Blending fraction (0.0 = keep base, 1.0 = take blend)
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the sizes differ and
    /// [`Error::InvalidParameter`] when `fract` is outside [0, 1].
    pub fn blend(&self, blend: &Raster, fract: f32) -> Result<Raster> {
        crate::check_same_size(self.dimensions(), blend.dimensions())?;
        if !(0.0..=1.0).contains(&fract) {
            return Err(Error::InvalidParameter(format!(
                "blend fraction {fract} outside [0, 1]"
            )));
        }

        let (base, blend) = if self.channels() == blend.channels() {
            (self.clone(), blend.clone())
        } else {
            (self.to_rgb(), blend.to_rgb())
        };

        let mut out = base.to_mut();
        for (dst, &src) in out.data_mut().iter_mut().zip(blend.data()) {
            let v = (1.0 - fract) * *dst as f32 + fract * src as f32;
            *dst = v.round().clamp(0.0, 255.0) as u8;
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channels, Raster};

    #[test]
    fn test_half_blend() {
        let a = Raster::from_data(2, 1, Channels::Gray, vec![0, 200]).unwrap();
        let b = Raster::from_data(2, 1, Channels::Gray, vec![100, 100]).unwrap();
        let out = a.blend(&b, 0.5).unwrap();
        assert_eq!(out.data(), &[50, 150]);
    }

    #[test]
    fn test_blend_gray_under_rgb() {
        let color = Raster::from_data(1, 1, Channels::Rgb, vec![200, 0, 100]).unwrap();
        let gray = Raster::from_data(1, 1, Channels::Gray, vec![100]).unwrap();
        let out = color.blend(&gray, 0.5).unwrap();
        assert_eq!(out.channels(), Channels::Rgb);
        assert_eq!(out.data(), &[150, 50, 100]);
    }

    #[test]
    fn test_blend_size_mismatch() {
        let a = Raster::new(2, 2, Channels::Gray).unwrap();
        let b = Raster::new(2, 3, Channels::Gray).unwrap();
        assert!(a.blend(&b, 0.5).is_err());
        assert!(a.blend(&a, 1.5).is_err());
    }
}
