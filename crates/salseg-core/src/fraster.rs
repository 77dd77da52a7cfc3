//! FRaster - Floating-point scalar field
//!
//! `FRaster` is a 2-D array of `f32` values used for intermediate
//! computations where byte precision is insufficient: the blurred input to
//! the spectral transform, the saliency field before normalization and the
//! distance transform.
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with no padding. The value at (x, y)
//! is at index `y * width + x`.
//!
//! # Examples
//!
//! ```
//! use salseg_core::FRaster;
//!
//! let mut field = FRaster::new(8, 8).unwrap();
//! field.set_pixel(2, 3, 1.5).unwrap();
//! assert_eq!(field.get_pixel(2, 3), Some(1.5));
//! assert_eq!(field.min_max(), (0.0, 1.5));
//! ```

use crate::error::{Error, Result};
use crate::raster::{Channels, Raster};

/// Floating-point field
#[derive(Debug, Clone, PartialEq)]
pub struct FRaster {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FRaster {
    /// Create a new field with all values set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::AllocationFailed`] if the buffer cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(FRaster {
            width,
            height,
            data: crate::try_alloc(width as usize * height as usize)?,
        })
    }

    /// Create a new field with every value set to `value`.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        let mut field = Self::new(width, height)?;
        field.data.fill(value);
        Ok(field)
    }

    /// Create a field from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length doesn't
    /// match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(FRaster {
            width,
            height,
            data,
        })
    }

    /// Convert a gray raster to a field, one value per sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for RGB rasters.
    pub fn from_raster(raster: &Raster) -> Result<Self> {
        raster.require_gray()?;
        let data = raster.data().iter().map(|&v| v as f32).collect();
        Self::from_data(raster.width(), raster.height(), data)
    }

    /// Get the field width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the field height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the raw data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get the raw data mutably
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get the value at (x, y) or `None` when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get the value at (x, y) without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Set the value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Set the value at (x, y) without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the (min, max) values.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Linearly rescale the field to [0, 255] and round to bytes.
    ///
    /// The minimum maps to 0 and the maximum to 255. A constant field maps
    /// uniformly to 0.
    pub fn to_raster_normalized(&self) -> Result<Raster> {
        let (lo, hi) = self.min_max();
        let range = hi - lo;
        let data = if range > 0.0 && range.is_finite() {
            let scale = 255.0 / range;
            self.data
                .iter()
                .map(|&v| ((v - lo) * scale).round().clamp(0.0, 255.0) as u8)
                .collect()
        } else {
            vec![0u8; self.data.len()]
        };
        Raster::from_data(self.width, self.height, Channels::Gray, data)
    }

    /// Convert to a gray raster by clamping each value to [0, 255].
    pub fn to_raster_clamped(&self) -> Result<Raster> {
        let data = self
            .data
            .iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect();
        Raster::from_data(self.width, self.height, Channels::Gray, data)
    }
}
