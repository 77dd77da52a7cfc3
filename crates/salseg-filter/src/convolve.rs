//! Convolution
//!
//! Direct 2-D convolution of scalar fields. Samples outside the field are
//! taken by reflect-101 mirroring (`dcb|abcd|cba`), so a constant field
//! stays constant under any normalized kernel.

use crate::kernel::Kernel;
use crate::{FilterError, FilterResult};
use salseg_core::{FRaster, Raster};

/// Map a possibly out-of-range coordinate into `0..len` by reflect-101.
///
/// ```
/// use salseg_filter::reflect_101;
///
/// assert_eq!(reflect_101(-1, 5), 1);
/// assert_eq!(reflect_101(5, 5), 3);
/// assert_eq!(reflect_101(2, 5), 2);
/// assert_eq!(reflect_101(-3, 1), 0);
/// ```
pub fn reflect_101(mut i: i64, len: usize) -> usize {
    let n = len as i64;
    if n == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i as usize;
        }
    }
}

/// Convolve a scalar field with a kernel.
pub fn convolve_field(field: &FRaster, kernel: &Kernel) -> FilterResult<FRaster> {
    let (w, h) = field.dimensions();
    let (kw, kh) = (kernel.width() as i64, kernel.height() as i64);
    let (cx, cy) = kernel.center();
    let (cx, cy) = (cx as i64, cy as i64);

    // Precompute reflected row/column indices per kernel tap.
    let col_index: Vec<Vec<usize>> = (0..w as i64)
        .map(|x| (0..kw).map(|i| reflect_101(x + i - cx, w as usize)).collect())
        .collect();
    let row_index: Vec<Vec<usize>> = (0..h as i64)
        .map(|y| (0..kh).map(|j| reflect_101(y + j - cy, h as usize)).collect())
        .collect();

    let src = field.data();
    let taps = kernel.data();
    let mut out = FRaster::new(w, h)?;
    let dst = out.data_mut();

    for y in 0..h as usize {
        for x in 0..w as usize {
            let mut acc = 0.0f32;
            for (j, &sy) in row_index[y].iter().enumerate() {
                let row = sy * w as usize;
                let krow = j * kw as usize;
                for (i, &sx) in col_index[x].iter().enumerate() {
                    acc += taps[krow + i] * src[row + sx];
                }
            }
            dst[y * w as usize + x] = acc;
        }
    }

    Ok(out)
}

/// Gaussian blur of a scalar field.
pub fn gaussian_blur_field(field: &FRaster, size: u32, sigma: Option<f32>) -> FilterResult<FRaster> {
    let kernel = Kernel::gaussian(size, sigma)?;
    convolve_field(field, &kernel)
}

/// Box (mean) blur of a scalar field.
pub fn box_blur_field(field: &FRaster, size: u32) -> FilterResult<FRaster> {
    let kernel = Kernel::box_kernel(size)?;
    convolve_field(field, &kernel)
}

/// Gaussian blur of a gray raster, rounded back to bytes.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedChannels`] for RGB rasters.
pub fn gaussian_blur(raster: &Raster, size: u32, sigma: Option<f32>) -> FilterResult<Raster> {
    if raster.require_gray().is_err() {
        return Err(FilterError::UnsupportedChannels {
            expected: "1",
            actual: raster.channels() as u32,
        });
    }
    let field = FRaster::from_raster(raster)?;
    let blurred = gaussian_blur_field(&field, size, sigma)?;
    Ok(blurred.to_raster_clamped()?)
}
