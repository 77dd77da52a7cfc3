//! Binary thresholding
//!
//! Converts 8-bit gray rasters to 0 / 255 masks:
//! - Fixed threshold binarization
//! - Otsu's method (automatic threshold selection)
//!
//! In both cases a pixel is foreground when its value is strictly greater
//! than the threshold.

use crate::{ColorError, ColorResult};
use salseg_core::{Channels, Raster};

/// Binarize a gray raster: values `> threshold` become 255, the rest 0.
pub fn threshold_to_binary(raster: &Raster, threshold: u8) -> ColorResult<Raster> {
    require_gray(raster)?;
    let data = raster
        .data()
        .iter()
        .map(|&v| if v > threshold { 255 } else { 0 })
        .collect();
    Ok(Raster::from_data(
        raster.width(),
        raster.height(),
        Channels::Gray,
        data,
    )?)
}

/// Compute Otsu's threshold for a gray raster.
///
/// Picks the lowest `t` maximizing the between-class variance of the
/// classes `<= t` and `> t`, which minimizes the within-class variance.
/// When only one intensity occurs no threshold separates two non-empty
/// classes and that intensity is returned.
pub fn compute_otsu_threshold(raster: &Raster) -> ColorResult<u8> {
    require_gray(raster)?;
    let hist = raster.gray_histogram()?;
    Ok(otsu_from_histogram(&hist))
}

/// Binarize a gray raster with its Otsu threshold.
///
/// Returns the mask together with the threshold used.
pub fn threshold_otsu(raster: &Raster) -> ColorResult<(Raster, u8)> {
    let t = compute_otsu_threshold(raster)?;
    Ok((threshold_to_binary(raster, t)?, t))
}

fn otsu_from_histogram(hist: &[u32; 256]) -> u8 {
    let total: f64 = hist.iter().map(|&c| c as f64).sum();
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut w0 = 0.0f64;
    let mut sum0 = 0.0f64;
    let mut best: Option<(u8, f64)> = None;

    for (t, &count) in hist.iter().enumerate().take(255) {
        w0 += count as f64;
        sum0 += t as f64 * count as f64;
        let w1 = total - w0;
        if w0 == 0.0 || w1 == 0.0 {
            continue;
        }
        let mu0 = sum0 / w0;
        let mu1 = (sum_all - sum0) / w1;
        let between = w0 * w1 * (mu0 - mu1) * (mu0 - mu1);
        if best.is_none_or(|(_, b)| between > b) {
            best = Some((t as u8, between));
        }
    }

    match best {
        Some((t, _)) => t,
        // Single occupied bin
        None => hist.iter().position(|&c| c > 0).unwrap_or(0) as u8,
    }
}

fn require_gray(raster: &Raster) -> ColorResult<()> {
    if raster.channels() != Channels::Gray {
        return Err(ColorError::UnsupportedChannels {
            expected: "1",
            actual: raster.channels().count() as u32,
        });
    }
    Ok(())
}
