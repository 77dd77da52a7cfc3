//! Pixel access functions
//!
//! Bounds-checked and unchecked getters and setters for individual
//! samples. Gray accessors read channel 0; RGB accessors on a gray raster
//! replicate the single sample into all three components.

use super::{Channels, Raster, RasterMut, RasterData};
use crate::error::{Error, Result};

impl RasterData {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels.count()
    }

    #[inline]
    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn rgb_at(&self, offset: usize) -> [u8; 3] {
        match self.channels {
            Channels::Gray => {
                let v = self.data[offset];
                [v, v, v]
            }
            Channels::Rgb => [
                self.data[offset],
                self.data[offset + 1],
                self.data[offset + 2],
            ],
        }
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl Raster {
    /// Get the channel-0 sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if !self.inner.contains(x, y) {
            return None;
        }
        Some(self.inner.data[self.inner.offset(x, y)])
    }

    /// Get the channel-0 sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is outside the sample buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[self.inner.offset(x, y)]
    }

    /// Get the sample of `channel` at (x, y).
    pub fn get_sample(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        if !self.inner.contains(x, y) || channel >= self.inner.channels.count() {
            return None;
        }
        Some(self.inner.data[self.inner.offset(x, y) + channel])
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if !self.inner.contains(x, y) {
            return None;
        }
        Some(self.inner.rgb_at(self.inner.offset(x, y)))
    }

    /// Get RGB values without bounds checking.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> [u8; 3] {
        self.inner.rgb_at(self.inner.offset(x, y))
    }
}

impl RasterMut {
    /// Get the channel-0 sample at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if !self.inner.contains(x, y) {
            return None;
        }
        Some(self.inner.data[self.inner.offset(x, y)])
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if !self.inner.contains(x, y) {
            return None;
        }
        Some(self.inner.rgb_at(self.inner.offset(x, y)))
    }

    /// Set the channel-0 sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if !self.inner.contains(x, y) {
            return Err(self.inner.out_of_bounds(x, y));
        }
        let offset = self.inner.offset(x, y);
        self.inner.data[offset] = value;
        Ok(())
    }

    /// Set the channel-0 sample without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let offset = self.inner.offset(x, y);
        self.inner.data[offset] = value;
    }

    /// Set RGB values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] on a gray raster and
    /// [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) -> Result<()> {
        if self.inner.channels != Channels::Rgb {
            return Err(Error::UnsupportedChannels {
                expected: "3",
                actual: self.inner.channels as u32,
            });
        }
        if !self.inner.contains(x, y) {
            return Err(self.inner.out_of_bounds(x, y));
        }
        self.set_rgb_unchecked(x, y, rgb);
        Ok(())
    }

    /// Set RGB values without bounds or channel checking.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let offset = self.inner.offset(x, y);
        self.inner.data[offset..offset + 3].copy_from_slice(&rgb);
    }
}
