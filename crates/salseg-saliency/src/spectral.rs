//! Spectral residual
//!
//! Frequency-domain core of saliency extraction. The 2-D FFT runs on rows,
//! then on columns, with one planned transform per axis length.

use crate::{SaliencyError, SaliencyResult};
use rustfft::{Fft, FftPlanner, num_complex::Complex};
use salseg_core::FRaster;
use salseg_filter::box_blur_field;
use std::sync::Arc;

/// Planned forward and inverse transforms for a `width` x `height` grid.
struct Plan2d {
    width: usize,
    height: usize,
    row_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    col_forward: Arc<dyn Fft<f64>>,
    col_inverse: Arc<dyn Fft<f64>>,
}

impl Plan2d {
    fn new(width: usize, height: usize) -> Self {
        let mut planner = FftPlanner::new();
        Plan2d {
            width,
            height,
            row_forward: planner.plan_fft_forward(width),
            row_inverse: planner.plan_fft_inverse(width),
            col_forward: planner.plan_fft_forward(height),
            col_inverse: planner.plan_fft_inverse(height),
        }
    }

    fn process(&self, data: &mut [Complex<f64>], column: &mut [Complex<f64>], inverse: bool) {
        let (row_fft, col_fft) = if inverse {
            (&self.row_inverse, &self.col_inverse)
        } else {
            (&self.row_forward, &self.col_forward)
        };

        debug_assert_eq!(column.len(), self.height);
        for row in data.chunks_exact_mut(self.width) {
            row_fft.process(row);
        }

        for x in 0..self.width {
            for (y, c) in column.iter_mut().enumerate() {
                *c = data[y * self.width + x];
            }
            col_fft.process(column);
            for (y, c) in column.iter().enumerate() {
                data[y * self.width + x] = *c;
            }
        }
    }
}

/// Smallest amplitude kept, relative to the largest one.
const AMPLITUDE_FLOOR: f64 = 1e-5;

/// Natural log of each amplitude, floored at `AMPLITUDE_FLOOR` times the peak.
fn log_amplitude(spectrum: &[Complex<f64>]) -> Vec<f32> {
    let peak = spectrum.iter().map(|c| c.norm()).fold(0.0, f64::max);
    let floor = (peak * AMPLITUDE_FLOOR).max(f64::MIN_POSITIVE);
    spectrum.iter().map(|c| c.norm().max(floor).ln() as f32).collect()
}

fn try_buffer(len: usize) -> SaliencyResult<Vec<Complex<f64>>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SaliencyError::AllocationFailed(len))?;
    buf.resize(len, Complex::new(0.0, 0.0));
    Ok(buf)
}

/// Squared magnitude of the spectral residual of `field`.
///
/// The log-amplitude spectrum (amplitude floored relative to its peak) is
/// averaged with a `box_size` box filter. The difference, recombined with
/// the original phase, is transformed back and its squared magnitude
/// returned, rescaled so that its maximum is 1.
///
/// # Errors
///
/// Returns [`SaliencyError::AllocationFailed`] if a frequency buffer cannot
/// be allocated and a filter error for an invalid `box_size`.
pub fn spectral_residual(field: &FRaster, box_size: u32) -> SaliencyResult<FRaster> {
    let (w, h) = field.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    let len = wu * hu;

    let mut spectrum = try_buffer(len)?;
    for (c, &v) in spectrum.iter_mut().zip(field.data()) {
        *c = Complex::new(v as f64, 0.0);
    }
    let mut column = try_buffer(hu)?;

    let plan = Plan2d::new(wu, hu);
    plan.process(&mut spectrum, &mut column, false);

    let log_amp = FRaster::from_data(w, h, log_amplitude(&spectrum))?;
    let average = box_blur_field(&log_amp, box_size)?;

    let residual: Vec<f64> = log_amp
        .data()
        .iter()
        .zip(average.data())
        .map(|(&l, &a)| l as f64 - a as f64)
        .collect();
    // Largest term becomes exp(0); the common factor cancels in the rescale.
    let peak = residual.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    for (c, &r) in spectrum.iter_mut().zip(&residual) {
        let phase = c.arg();
        *c = Complex::from_polar((r - peak).exp(), phase);
    }
    plan.process(&mut spectrum, &mut column, true);

    let scale = 1.0 / len as f64;
    let energy: Vec<f64> = spectrum.iter().map(|c| (*c * scale).norm_sqr()).collect();
    let max = energy.iter().copied().fold(0.0, f64::max);
    let norm = if max > 0.0 { 1.0 / max } else { 0.0 };
    let data = energy.iter().map(|&e| (e * norm) as f32).collect();

    log::trace!("spectral residual on {w}x{h}, peak residual {peak:.3}");
    Ok(FRaster::from_data(w, h, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_range_and_shape() {
        let data: Vec<f32> = (0..12 * 8).map(|i| ((i * 37) % 255) as f32).collect();
        let field = FRaster::from_data(12, 8, data).unwrap();
        let out = spectral_residual(&field, 3).unwrap();
        assert_eq!(out.dimensions(), (12, 8));
        let (lo, hi) = out.min_max();
        assert!(lo >= 0.0);
        assert!((hi - 1.0).abs() < 1e-6);
        assert!(out.data().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_constant_field_is_finite() {
        let field = FRaster::new_with_value(16, 16, 128.0).unwrap();
        let out = spectral_residual(&field, 3).unwrap();
        assert!(out.data().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_exact_zeros_floored() {
        // A 16-wide box in 64 columns has exact zeros at every fourth frequency
        let data: Vec<f32> = (0..64 * 8)
            .map(|i| if (24..40).contains(&(i % 64)) { 200.0 } else { 0.0 })
            .collect();
        let mut spectrum: Vec<Complex<f64>> =
            data.iter().map(|&v| Complex::new(v as f64, 0.0)).collect();
        let mut column = vec![Complex::new(0.0, 0.0); 8];
        Plan2d::new(64, 8).process(&mut spectrum, &mut column, false);

        let logs = log_amplitude(&spectrum);
        let hi = logs.iter().copied().fold(f32::MIN, f32::max);
        let lo = logs.iter().copied().fold(f32::MAX, f32::min);
        assert!(hi - lo <= (1.0 / AMPLITUDE_FLOOR).ln() as f32 + 1e-3);

        let field = FRaster::from_data(64, 8, data).unwrap();
        let out = spectral_residual(&field, 3).unwrap();
        assert!(out.data().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_single_pixel() {
        let field = FRaster::from_data(1, 1, vec![5.0]).unwrap();
        let out = spectral_residual(&field, 3).unwrap();
        assert_eq!(out.data(), &[1.0]);
    }

    #[test]
    fn test_even_box_rejected() {
        let field = FRaster::new(4, 4).unwrap();
        assert!(matches!(
            spectral_residual(&field, 2),
            Err(SaliencyError::Filter(_))
        ));
    }

    #[test]
    fn test_fft_round_trip() {
        let plan = Plan2d::new(6, 4);
        let original: Vec<Complex<f64>> = (0..24).map(|i| Complex::new(i as f64, 0.0)).collect();
        let mut data = original.clone();
        let mut column = vec![Complex::new(0.0, 0.0); 4];
        plan.process(&mut data, &mut column, false);
        plan.process(&mut data, &mut column, true);
        for (a, b) in data.iter().zip(&original) {
            assert!((a.re / 24.0 - b.re).abs() < 1e-9);
        }
    }
}
