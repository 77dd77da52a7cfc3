//! Channel conversion
//!
//! - RGB to gray with standard luma weights
//! - Gray to RGB by replication
//! - Photometric inversion (`255 - v`)

use super::{Channels, Raster, RasterData};
use std::sync::Arc;

/// Luma weights (ITU-R BT.601) in thousandths
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Convert one RGB triple to its luma value.
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let sum = LUMA_R * rgb[0] as u32 + LUMA_G * rgb[1] as u32 + LUMA_B * rgb[2] as u32;
    ((sum + 500) / 1000) as u8
}

impl Raster {
    /// Convert to a single-channel grayscale raster.
    ///
    /// A gray raster is returned as a shared clone.
    pub fn to_gray(&self) -> Raster {
        if self.channels() == Channels::Gray {
            return self.clone();
        }
        let data = self.data().chunks_exact(3).map(|px| luma([px[0], px[1], px[2]])).collect();
        rebuild(self, Channels::Gray, data)
    }

    /// Convert to a three-channel RGB raster.
    ///
    /// Gray samples are replicated into R, G and B; an RGB raster is
    /// returned as a shared clone.
    pub fn to_rgb(&self) -> Raster {
        if self.channels() == Channels::Rgb {
            return self.clone();
        }
        let data = self.data().iter().flat_map(|&v| [v, v, v]).collect();
        rebuild(self, Channels::Rgb, data)
    }

    /// Invert every sample (`255 - v`).
    pub fn invert(&self) -> Raster {
        let mut out = self.to_mut();
        for v in out.data_mut() {
            *v = 255 - *v;
        }
        out.into()
    }
}

fn rebuild(src: &Raster, channels: Channels, data: Vec<u8>) -> Raster {
    debug_assert_eq!(data.len(), src.pixel_count() * channels.count());
    Raster {
        inner: Arc::new(RasterData {
            width: src.width(),
            height: src.height(),
            channels,
            data,
        }),
    }
}
