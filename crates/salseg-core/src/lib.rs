//! salseg-core - Basic data structures for saliency segmentation
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the pipeline:
//!
//! - [`Raster`] / [`RasterMut`] - Byte raster with 1 (gray) or 3 (RGB) channels
//! - [`FRaster`] - Floating-point scalar field
//! - [`LabelMatrix`] - Integer region labels produced by segmentation
//!
//! # Examples
//!
//! ```
//! use salseg_core::{Channels, Raster};
//!
//! let raster = Raster::new(64, 48, Channels::Rgb).unwrap();
//! assert_eq!(raster.dimensions(), (64, 48));
//!
//! let gray = raster.to_gray();
//! assert_eq!(gray.channels(), Channels::Gray);
//! ```

pub mod error;
pub mod fraster;
pub mod label;
pub mod raster;

pub use error::{Error, Result};
pub use fraster::FRaster;
pub use label::{BACKGROUND_LABEL, BOUNDARY_LABEL, LabelMatrix, UNLABELED};
pub use raster::{Channels, Raster, RasterMut};

/// Check that `actual` has the same width and height as `expected`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the sizes differ.
pub fn check_same_size(expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Allocate a zero-filled buffer, reporting allocation failure as an error
/// instead of aborting.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] if the buffer cannot be reserved.
pub fn try_alloc<T: Clone + Default>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed(len))?;
    buf.resize(len, T::default());
    Ok(buf)
}
