//! Raster - The main image container
//!
//! A `Raster` is a 2-D grid of byte samples with either one channel
//! (grayscale, binary masks, saliency maps) or three channels (RGB).
//!
//! # Pixel layout
//!
//! - Samples are stored row-major with no padding
//! - RGB pixels are interleaved as `R, G, B`
//! - The sample for channel `c` of pixel `(x, y)` is at
//!   `(y * width + x) * channels + c`
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`. Pipeline
//! stages never mutate their inputs; they build a fresh `RasterMut` and
//! freeze it.

mod access;
pub mod blend;
pub mod convert;
pub mod statistics;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of byte channels per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single-channel grayscale
    Gray = 1,
    /// Interleaved red, green, blue
    Rgb = 3,
}

impl Channels {
    /// Create `Channels` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] if `count` is not 1 or 3.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::UnsupportedChannels {
                expected: "1 or 3",
                actual: count,
            }),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        self as usize
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl RasterData {
    fn zeroed(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * channels.count();
        Ok(RasterData {
            width,
            height,
            channels,
            data: crate::try_alloc(len)?,
        })
    }
}

/// Raster - Immutable, cheaply clonable byte image
///
/// # Examples
///
/// ```
/// use salseg_core::{Channels, Raster};
///
/// let raster = Raster::new_with_value(4, 3, Channels::Gray, 7).unwrap();
/// assert_eq!(raster.get_pixel(3, 2), Some(7));
/// assert_eq!(raster.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::AllocationFailed`] if the sample buffer cannot be reserved.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::zeroed(width, height, channels)?),
        })
    }

    /// Create a new raster with every sample set to `value`.
    pub fn new_with_value(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let mut data = RasterData::zeroed(width, height, channels)?;
        data.data.fill(value);
        Ok(Raster {
            inner: Arc::new(data),
        })
    }

    /// Create a raster from interleaved sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidParameter`] if `data.len()` doesn't match
    /// `width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels.count(),
                expected
            )));
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.width as usize * self.inner.height as usize
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two rasters have the same width, height and channels.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions() && self.channels() == other.channels()
    }

    /// Try to get mutable access to the raster data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of raster data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new zero-filled mutable raster.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::zeroed(width, height, channels)?,
        })
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}
