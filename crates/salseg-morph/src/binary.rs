//! Binary morphological operations
//!
//! Implements erosion, dilation, opening and closing of 8-bit masks.
//! Pixels outside the image never influence the result: erosion treats
//! them as foreground and dilation as background.

use crate::{MorphError, MorphResult, Sel};
use salseg_core::{Channels, Raster, RasterMut};

/// Value written for foreground pixels
const FG: u8 = 255;

/// Dilate a binary mask
///
/// A pixel becomes foreground if any hit of the reflected SEL placed on it
/// covers a foreground pixel.
pub fn dilate(mask: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_mask(mask)?;
    let offsets: Vec<_> = sel.hit_offsets().map(|(dx, dy)| (-dx, -dy)).collect();
    Ok(apply(mask, &offsets, false)?)
}

/// Erode a binary mask
///
/// A pixel stays foreground only if every in-image hit of the SEL placed on
/// it covers a foreground pixel.
pub fn erode(mask: &Raster, sel: &Sel) -> MorphResult<Raster> {
    check_mask(mask)?;
    let offsets: Vec<_> = sel.hit_offsets().collect();
    Ok(apply(mask, &offsets, true)?)
}

/// Open a binary mask
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground features and thin connections.
pub fn open(mask: &Raster, sel: &Sel) -> MorphResult<Raster> {
    let eroded = erode(mask, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary mask
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and connects nearby objects.
pub fn close(mask: &Raster, sel: &Sel) -> MorphResult<Raster> {
    let dilated = dilate(mask, sel)?;
    erode(&dilated, sel)
}

/// Dilate `iterations` times; zero iterations returns a binarized copy
pub fn dilate_iter(mask: &Raster, sel: &Sel, iterations: u32) -> MorphResult<Raster> {
    repeat(mask, iterations, |m| dilate(m, sel))
}

/// Erode `iterations` times; zero iterations returns a binarized copy
pub fn erode_iter(mask: &Raster, sel: &Sel, iterations: u32) -> MorphResult<Raster> {
    repeat(mask, iterations, |m| erode(m, sel))
}

/// Erode `iterations` times, then dilate `iterations` times
pub fn open_iter(mask: &Raster, sel: &Sel, iterations: u32) -> MorphResult<Raster> {
    let eroded = erode_iter(mask, sel, iterations)?;
    dilate_iter(&eroded, sel, iterations)
}

fn repeat<F>(mask: &Raster, iterations: u32, mut op: F) -> MorphResult<Raster>
where
    F: FnMut(&Raster) -> MorphResult<Raster>,
{
    check_mask(mask)?;
    let mut current = binarize(mask)?;
    for _ in 0..iterations {
        current = op(&current)?;
    }
    Ok(current)
}

fn binarize(mask: &Raster) -> salseg_core::Result<Raster> {
    let data = mask
        .data()
        .iter()
        .map(|&v| if v != 0 { FG } else { 0 })
        .collect();
    Raster::from_data(mask.width(), mask.height(), Channels::Gray, data)
}

/// Shared kernel for erosion (`all`) and dilation (`any`).
fn apply(mask: &Raster, offsets: &[(i32, i32)], all: bool) -> salseg_core::Result<Raster> {
    let (w, h) = (mask.width() as i32, mask.height() as i32);
    let src = mask.data();
    let mut out = RasterMut::new(mask.width(), mask.height(), Channels::Gray)?;
    let dst = out.data_mut();

    for y in 0..h {
        for x in 0..w {
            let mut in_image = offsets.iter().filter_map(|&(dx, dy)| {
                let (sx, sy) = (x + dx, y + dy);
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    None
                } else {
                    Some(src[(sy * w + sx) as usize] != 0)
                }
            });
            let set = if all {
                in_image.all(|fg| fg)
            } else {
                in_image.any(|fg| fg)
            };
            if set {
                dst[(y * w + x) as usize] = FG;
            }
        }
    }

    Ok(out.into())
}

fn check_mask(mask: &Raster) -> MorphResult<()> {
    if mask.channels() != Channels::Gray {
        return Err(MorphError::UnsupportedChannels {
            expected: "1",
            actual: mask.channels().count() as u32,
        });
    }
    Ok(())
}
