//! Distance transform
//!
//! Two-pass 5x5 chamfer approximation of the Euclidean distance from each
//! foreground pixel to the nearest background pixel. Axial steps cost 1,
//! diagonal steps 1.4 and knight moves 2.1969.
//!
//! Pixels outside the image are not background: a foreground pixel on the
//! border measures its distance to background inside the image only.

use crate::error::{RegionError, RegionResult};
use salseg_core::{Channels, FRaster, Raster};

const AXIAL: f32 = 1.0;
const DIAGONAL: f32 = 1.4;
const KNIGHT: f32 = 2.1969;

/// Causal half of the chamfer mask, (dx, dy, cost)
const FORWARD: [(i32, i32, f32); 8] = [
    (-1, -2, KNIGHT),
    (1, -2, KNIGHT),
    (-2, -1, KNIGHT),
    (-1, -1, DIAGONAL),
    (0, -1, AXIAL),
    (1, -1, DIAGONAL),
    (2, -1, KNIGHT),
    (-1, 0, AXIAL),
];

/// Compute the distance transform of a binary mask.
///
/// Background (zero) pixels get 0. If the mask has no background at all,
/// every pixel gets `f32::MAX`.
pub fn distance_transform(mask: &Raster) -> RegionResult<FRaster> {
    if mask.channels() != Channels::Gray {
        return Err(RegionError::UnsupportedChannels {
            expected: "1",
            actual: mask.channels().count() as u32,
        });
    }

    let (w, h) = mask.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    let init = mask
        .data()
        .iter()
        .map(|&v| if v == 0 { 0.0 } else { f32::INFINITY })
        .collect();
    let mut field = FRaster::from_data(w, h, init)?;
    let d = field.data_mut();

    let at = |x: i32, y: i32| (y * wi + x) as usize;

    for y in 0..hi {
        for x in 0..wi {
            let i = at(x, y);
            if d[i] == 0.0 {
                continue;
            }
            let mut best = d[i];
            for &(dx, dy, cost) in &FORWARD {
                let (nx, ny) = (x + dx, y + dy);
                if nx >= 0 && ny >= 0 && nx < wi && ny < hi {
                    best = best.min(d[at(nx, ny)] + cost);
                }
            }
            d[i] = best;
        }
    }

    for y in (0..hi).rev() {
        for x in (0..wi).rev() {
            let i = at(x, y);
            if d[i] == 0.0 {
                continue;
            }
            let mut best = d[i];
            for &(dx, dy, cost) in &FORWARD {
                let (nx, ny) = (x - dx, y - dy);
                if nx >= 0 && ny >= 0 && nx < wi && ny < hi {
                    best = best.min(d[at(nx, ny)] + cost);
                }
            }
            d[i] = best;
        }
    }

    for v in d.iter_mut() {
        if v.is_infinite() {
            *v = f32::MAX;
        }
    }

    Ok(field)
}
