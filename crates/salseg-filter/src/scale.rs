//! Field scaling
//!
//! Bilinear resampling of scalar fields to an arbitrary target size. Pixel
//! centers are aligned (`src = (dst + 0.5) * scale - 0.5`) and coordinates
//! are clamped to the source edge.

use crate::{FilterError, FilterResult};
use salseg_core::FRaster;

/// Resample a field to `width` x `height` with bilinear interpolation.
///
/// Resampling to the field's own size returns an identical copy.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if a target dimension is 0.
pub fn scale_field_bilinear(field: &FRaster, width: u32, height: u32) -> FilterResult<FRaster> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "target size must be positive, got {width}x{height}"
        )));
    }
    if field.dimensions() == (width, height) {
        return Ok(field.clone());
    }

    let (sw, sh) = field.dimensions();
    let xs = axis_taps(sw, width);
    let ys = axis_taps(sh, height);

    let src = field.data();
    let mut out = FRaster::new(width, height)?;
    let dst = out.data_mut();
    for (y, &(y0, y1, fy)) in ys.iter().enumerate() {
        let r0 = y0 * sw as usize;
        let r1 = y1 * sw as usize;
        for (x, &(x0, x1, fx)) in xs.iter().enumerate() {
            let top = src[r0 + x0] * (1.0 - fx) + src[r0 + x1] * fx;
            let bottom = src[r1 + x0] * (1.0 - fx) + src[r1 + x1] * fx;
            dst[y * width as usize + x] = top * (1.0 - fy) + bottom * fy;
        }
    }
    Ok(out)
}

/// Source index pair and weight of the second tap for every target position.
fn axis_taps(src_len: u32, dst_len: u32) -> Vec<(usize, usize, f32)> {
    let scale = src_len as f32 / dst_len as f32;
    let last = src_len as usize - 1;
    (0..dst_len)
        .map(|d| {
            let s = ((d as f32 + 0.5) * scale - 0.5).max(0.0);
            let i0 = (s.floor() as usize).min(last);
            let i1 = (i0 + 1).min(last);
            let frac = if i0 == last { 0.0 } else { s - i0 as f32 };
            (i0, i1, frac)
        })
        .collect()
}
