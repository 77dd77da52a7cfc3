//! Raster statistics
//!
//! Histograms and simple aggregate queries over single-channel rasters.

use super::{Channels, Raster};
use crate::error::{Error, Result};

impl Raster {
    /// Compute the 256-bin histogram of a gray raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for RGB rasters.
    pub fn gray_histogram(&self) -> Result<[u32; 256]> {
        self.require_gray()?;
        let mut hist = [0u32; 256];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        Ok(hist)
    }

    /// Get the (min, max) sample values over all channels.
    pub fn min_max(&self) -> (u8, u8) {
        self.data()
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Count the samples that are non-zero.
    pub fn count_nonzero(&self) -> usize {
        self.data().iter().filter(|&&v| v != 0).count()
    }

    /// Check whether this is a gray raster whose samples are all 0 or 255.
    pub fn is_binary(&self) -> bool {
        self.channels() == Channels::Gray && self.data().iter().all(|&v| v == 0 || v == 255)
    }

    /// Fail unless this raster is single-channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for RGB rasters.
    pub fn require_gray(&self) -> Result<()> {
        if self.channels() != Channels::Gray {
            return Err(Error::UnsupportedChannels {
                expected: "1",
                actual: self.channels() as u32,
            });
        }
        Ok(())
    }

    /// Fail unless this raster is three-channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for gray rasters.
    pub fn require_rgb(&self) -> Result<()> {
        if self.channels() != Channels::Rgb {
            return Err(Error::UnsupportedChannels {
                expected: "3",
                actual: self.channels() as u32,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let raster = Raster::from_data(4, 1, Channels::Gray, vec![0, 0, 7, 255]).unwrap();
        let hist = raster.gray_histogram().unwrap();
        assert_eq!(hist[0], 2);
        assert_eq!(hist[7], 1);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<u32>(), 4);
        assert_eq!(raster.min_max(), (0, 255));
        assert_eq!(raster.count_nonzero(), 2);
    }

    #[test]
    fn test_is_binary() {
        let bin = Raster::from_data(3, 1, Channels::Gray, vec![0, 255, 255]).unwrap();
        let not_bin = Raster::from_data(3, 1, Channels::Gray, vec![0, 1, 255]).unwrap();
        assert!(bin.is_binary());
        assert!(!not_bin.is_binary());
        assert!(!bin.to_rgb().is_binary());
    }

    #[test]
    fn test_histogram_requires_gray() {
        let rgb = Raster::new(2, 2, Channels::Rgb).unwrap();
        assert!(rgb.gray_histogram().is_err());
    }
}
