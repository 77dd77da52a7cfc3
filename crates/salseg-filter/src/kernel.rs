//! Convolution kernels
//!
//! Defines the kernel structure for image convolution operations.
//!
//! - `Kernel::new` - zero kernel of a given size
//! - `Kernel::from_slice` - kernel from row-major values
//! - `Kernel::gaussian` - normalized Gaussian, sigma given or derived
//! - `Kernel::box_kernel` - normalized averaging kernel

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
///
/// The origin is the kernel center; all constructors produce odd sizes.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a new zero kernel with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is even or 0.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        check_odd(width)?;
        check_odd(height)?;
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0.0; (width * height) as usize],
        })
    }

    /// Create a kernel from a slice of row-major values.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {}x{} kernel, got {}",
                kernel.data.len(),
                width,
                height,
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(size*size)`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        let mut kernel = Self::new(size, size)?;
        let v = 1.0 / (size * size) as f32;
        kernel.data.fill(v);
        Ok(kernel)
    }

    /// Create a normalized square Gaussian kernel.
    ///
    /// When `sigma` is `None` it is derived from the size as
    /// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    pub fn gaussian(size: u32, sigma: Option<f32>) -> FilterResult<Self> {
        let taps = gaussian_taps(size, sigma)?;
        let mut kernel = Self::new(size, size)?;
        for (j, &ty) in taps.iter().enumerate() {
            for (i, &tx) in taps.iter().enumerate() {
                kernel.data[j * size as usize + i] = ty * tx;
            }
        }
        Ok(kernel)
    }

    /// Get the kernel width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin as (cx, cy)
    #[inline]
    pub fn center(&self) -> (u32, u32) {
        (self.cx, self.cy)
    }

    /// Get the value at (x, y) within the kernel.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the row-major kernel values.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

/// Sigma used for a Gaussian of `size` taps when none is given.
pub fn derived_sigma(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian taps.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] for an even or zero size and
/// [`FilterError::InvalidParameters`] for a non-positive sigma.
pub fn gaussian_taps(size: u32, sigma: Option<f32>) -> FilterResult<Vec<f32>> {
    check_odd(size)?;
    let sigma = match sigma {
        Some(s) if s > 0.0 && s.is_finite() => s,
        Some(s) => {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma must be positive, got {s}"
            )));
        }
        None => derived_sigma(size),
    };
    let half = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - half;
            (-(d * d) / denom).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    Ok(taps)
}

fn check_odd(size: u32) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "kernel size must be odd and positive, got {size}"
        )));
    }
    Ok(())
}
