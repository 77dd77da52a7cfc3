//! Color ramps
//!
//! 256-entry lookup tables that map 8-bit intensities to RGB.

use crate::{ColorError, ColorResult};
use salseg_core::{Channels, Raster, RasterMut};

/// The jet ramp at `t` in `[0, 1]`: dark blue, blue, cyan, yellow, red, dark red.
///
/// ```
/// use salseg_color::jet;
///
/// assert_eq!(jet(0.0), [0, 0, 128]);
/// assert_eq!(jet(1.0), [128, 0, 0]);
/// assert_eq!(jet(0.5), [128, 255, 128]);
/// ```
pub fn jet(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let ramp = |center: f32| {
        let v = (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);
        (v * 255.0).round() as u8
    };
    [ramp(3.0), ramp(2.0), ramp(1.0)]
}

/// Predefined color ramps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Index 0 dark blue through index 255 dark red
    Jet,
    /// Index 0 dark red through index 255 dark blue
    InvertedJet,
    /// Gray replicated to all three channels
    Gray,
}

impl Colormap {
    /// Color for an intensity
    pub fn lookup(self, index: u8) -> [u8; 3] {
        match self {
            Colormap::Jet => jet(index as f32 / 255.0),
            Colormap::InvertedJet => jet((255 - index) as f32 / 255.0),
            Colormap::Gray => [index; 3],
        }
    }

    /// Full 256-entry table
    pub fn table(self) -> [[u8; 3]; 256] {
        let mut table = [[0u8; 3]; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = self.lookup(i as u8);
        }
        table
    }

    /// Map every pixel of a gray raster through the ramp.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedChannels`] for RGB input.
    pub fn apply(self, raster: &Raster) -> ColorResult<Raster> {
        if raster.channels() != Channels::Gray {
            return Err(ColorError::UnsupportedChannels {
                expected: "1",
                actual: raster.channels().count() as u32,
            });
        }
        let table = self.table();
        let mut out = RasterMut::new(raster.width(), raster.height(), Channels::Rgb)?;
        for (dst, &v) in out.data_mut().chunks_exact_mut(3).zip(raster.data()) {
            dst.copy_from_slice(&table[v as usize]);
        }
        Ok(out.into())
    }
}
