//! Watershed segmentation
//!
//! Marker-controlled flooding of a color image (Meyer's algorithm). The
//! marker matrix holds seed labels (> 0) and unknown cells (0). Cells are
//! flooded in order of the color difference to the neighbor that queued
//! them, using 256 FIFO buckets. A cell that touches two different labels
//! becomes a boundary ([`BOUNDARY_LABEL`]).
//!
//! The one-pixel image frame is always set to [`BOUNDARY_LABEL`]. Unknown
//! cells with no path to any seed stay 0.

use crate::error::RegionResult;
use salseg_core::{BOUNDARY_LABEL, LabelMatrix, Raster, UNLABELED, check_same_size};
use std::collections::VecDeque;

/// Marks a cell that is waiting in a bucket.
const IN_QUEUE: i32 = -2;

/// Largest per-channel absolute difference between two colors.
///
/// ```
/// use salseg_region::color_difference;
///
/// assert_eq!(color_difference([10, 200, 30], [12, 100, 30]), 100);
/// ```
pub fn color_difference(a: [u8; 3], b: [u8; 3]) -> u8 {
    a.iter()
        .zip(b.iter())
        .map(|(&p, &q)| p.abs_diff(q))
        .max()
        .unwrap_or(0)
}

/// Bucketed priority queue over color differences.
struct Buckets {
    queues: Vec<VecDeque<usize>>,
    active: usize,
    len: usize,
}

impl Buckets {
    fn new() -> Self {
        Buckets {
            queues: (0..256).map(|_| VecDeque::new()).collect(),
            active: 256,
            len: 0,
        }
    }

    fn push(&mut self, priority: u8, cell: usize) {
        let p = priority as usize;
        self.queues[p].push_back(cell);
        self.active = self.active.min(p);
        self.len += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        while self.active < 256 {
            if let Some(cell) = self.queues[self.active].pop_front() {
                self.len -= 1;
                return Some(cell);
            }
            self.active += 1;
        }
        None
    }
}

/// Flood `markers` over `image` in place.
///
/// `image` may be gray or RGB; gray pixels are compared as equal-channel
/// colors. On return every cell is a label > 0, [`BOUNDARY_LABEL`], or 0
/// for basins no seed reaches, and no two 4-adjacent cells carry different
/// positive labels.
///
/// # Errors
///
/// Returns a core `DimensionMismatch` if the sizes differ.
pub fn watershed(image: &Raster, markers: &mut LabelMatrix) -> RegionResult<()> {
    check_same_size(image.dimensions(), markers.dimensions())?;

    let (w, h) = (image.width() as usize, image.height() as usize);
    let colors: Vec<[u8; 3]> = (0..h as u32)
        .flat_map(|y| (0..w as u32).map(move |x| (x, y)))
        .map(|(x, y)| image.get_rgb_unchecked(x, y))
        .collect();
    let m = markers.data_mut();

    // Frame, and reset of stray negative interior values
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                m[i] = BOUNDARY_LABEL;
            } else if m[i] < 0 {
                m[i] = UNLABELED;
            }
        }
    }

    let mut buckets = Buckets::new();
    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let i = y * w + x;
            if m[i] != UNLABELED {
                continue;
            }
            let priority = [i - 1, i + 1, i - w, i + w]
                .into_iter()
                .filter(|&n| m[n] > 0)
                .map(|n| color_difference(colors[i], colors[n]))
                .min();
            if let Some(p) = priority {
                buckets.push(p, i);
                m[i] = IN_QUEUE;
            }
        }
    }
    log::trace!("watershed: {} cells seeded the queue", buckets.len);

    while let Some(i) = buckets.pop() {
        let neighbors = [i - 1, i + 1, i - w, i + w];

        let mut label = UNLABELED;
        for &n in &neighbors {
            let t = m[n];
            if t > 0 {
                if label == UNLABELED {
                    label = t;
                } else if t != label {
                    label = BOUNDARY_LABEL;
                }
            }
        }
        // Every queued cell was queued by a labeled neighbor
        debug_assert_ne!(label, UNLABELED);
        m[i] = label;
        if label == BOUNDARY_LABEL {
            continue;
        }

        for &n in &neighbors {
            if m[n] == UNLABELED {
                buckets.push(color_difference(colors[i], colors[n]), n);
                m[n] = IN_QUEUE;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salseg_core::{BACKGROUND_LABEL, Channels, RasterMut};

    fn two_halves(w: u32, h: u32) -> Raster {
        let mut r = RasterMut::new(w, h, Channels::Rgb).unwrap();
        for y in 0..h {
            for x in 0..w {
                let c = if x < w / 2 { [200, 20, 20] } else { [20, 20, 200] };
                r.set_rgb_unchecked(x, y, c);
            }
        }
        r.into()
    }

    #[test]
    fn test_color_difference() {
        assert_eq!(color_difference([0, 0, 0], [0, 0, 0]), 0);
        assert_eq!(color_difference([255, 0, 0], [0, 0, 0]), 255);
    }

    #[test]
    fn test_frame_and_fill() {
        let image = Raster::new(6, 5, Channels::Rgb).unwrap();
        let mut markers = LabelMatrix::new(6, 5).unwrap();
        markers.set(2, 2, 2).unwrap();
        watershed(&image, &mut markers).unwrap();
        for (i, &v) in markers.data().iter().enumerate() {
            let (x, y) = (i % 6, i / 6);
            if x == 0 || y == 0 || x == 5 || y == 4 {
                assert_eq!(v, BOUNDARY_LABEL);
            } else {
                assert_eq!(v, 2);
            }
        }
    }

    #[test]
    fn test_two_seeds_split_at_color_edge() {
        let image = two_halves(12, 8);
        let mut markers = LabelMatrix::new(12, 8).unwrap();
        markers.set(2, 4, 2).unwrap();
        markers.set(9, 4, 3).unwrap();
        watershed(&image, &mut markers).unwrap();

        for y in 1..7 {
            assert_eq!(markers.get(1, y), Some(2));
            assert_eq!(markers.get(4, y), Some(2));
            assert_eq!(markers.get(7, y), Some(3));
            assert_eq!(markers.get(10, y), Some(3));
        }
        for (a, b) in markers.adjacent_pairs() {
            let (la, lb) = (markers.get(a.0, a.1).unwrap(), markers.get(b.0, b.1).unwrap());
            assert!(!(la > 0 && lb > 0 && la != lb));
        }
    }

    #[test]
    fn test_background_marker_floods() {
        let image = Raster::new(5, 5, Channels::Gray).unwrap();
        let mut markers = LabelMatrix::new(5, 5).unwrap();
        markers.set(1, 1, BACKGROUND_LABEL).unwrap();
        markers.set(3, 3, -7).unwrap();
        watershed(&image, &mut markers).unwrap();
        assert_eq!(markers.get(3, 3), Some(BACKGROUND_LABEL));
        assert_eq!(markers.count(UNLABELED), 0);
    }

    #[test]
    fn test_unreached_cells_stay_unlabeled() {
        let image = Raster::new(3, 3, Channels::Rgb).unwrap();
        let mut markers = LabelMatrix::new(3, 3).unwrap();
        watershed(&image, &mut markers).unwrap();
        assert_eq!(markers.get(1, 1), Some(UNLABELED));
        assert_eq!(markers.count(BOUNDARY_LABEL), 8);
    }

    #[test]
    fn test_size_mismatch() {
        let image = Raster::new(4, 4, Channels::Rgb).unwrap();
        let mut markers = LabelMatrix::new(4, 5).unwrap();
        assert!(watershed(&image, &mut markers).is_err());
    }
}
