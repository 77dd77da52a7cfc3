//! Synthetic test images
//!
//! The regression tests build their inputs in code instead of loading
//! image files, so every test is self-contained.

use salseg_core::{Channels, Raster, RasterMut};

/// Gray raster with a filled rectangle `[x0, x1) x [y0, y1)` of `fg` on `bg`.
pub fn gray_rect(width: u32, height: u32, rect: (u32, u32, u32, u32), fg: u8, bg: u8) -> Raster {
    let (x0, y0, x1, y1) = rect;
    let mut r = RasterMut::new(width, height, Channels::Gray).unwrap();
    r.fill(bg);
    for y in y0..y1.min(height) {
        for x in x0..x1.min(width) {
            r.set_pixel_unchecked(x, y, fg);
        }
    }
    r.into()
}

/// Gray raster with a filled disk of `fg` on `bg`.
pub fn gray_disk(width: u32, height: u32, center: (u32, u32), radius: u32, fg: u8, bg: u8) -> Raster {
    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let r2 = (radius as i64) * (radius as i64);
    let mut r = RasterMut::new(width, height, Channels::Gray).unwrap();
    for y in 0..height {
        for x in 0..width {
            let (dx, dy) = (x as i64 - cx, y as i64 - cy);
            let v = if dx * dx + dy * dy <= r2 { fg } else { bg };
            r.set_pixel_unchecked(x, y, v);
        }
    }
    r.into()
}

/// Gray raster filled with a deterministic pseudo-random texture.
pub fn gray_noise(width: u32, height: u32, seed: u32) -> Raster {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut r = RasterMut::new(width, height, Channels::Gray).unwrap();
    for v in r.data_mut() {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *v = (state >> 24) as u8;
    }
    r.into()
}

/// RGB raster whose pixels take color `a` inside the rectangle and `b` outside.
pub fn rgb_rect(
    width: u32,
    height: u32,
    rect: (u32, u32, u32, u32),
    a: [u8; 3],
    b: [u8; 3],
) -> Raster {
    let (x0, y0, x1, y1) = rect;
    let mut r = RasterMut::new(width, height, Channels::Rgb).unwrap();
    for y in 0..height {
        for x in 0..width {
            let inside = x >= x0 && x < x1 && y >= y0 && y < y1;
            r.set_rgb_unchecked(x, y, if inside { a } else { b });
        }
    }
    r.into()
}

/// Mean gray value inside `rect` and over every pixel outside it.
///
/// An empty side has mean 0.
pub fn mean_inside_outside(raster: &Raster, rect: (u32, u32, u32, u32)) -> (f64, f64) {
    let (x0, y0, x1, y1) = rect;
    let (mut sum_in, mut n_in, mut sum_out, mut n_out) = (0u64, 0u64, 0u64, 0u64);
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let v = raster.get_pixel_unchecked(x, y) as u64;
            if x >= x0 && x < x1 && y >= y0 && y < y1 {
                sum_in += v;
                n_in += 1;
            } else {
                sum_out += v;
                n_out += 1;
            }
        }
    }
    let mean = |sum: u64, n: u64| if n == 0 { 0.0 } else { sum as f64 / n as f64 };
    (mean(sum_in, n_in), mean(sum_out, n_out))
}
