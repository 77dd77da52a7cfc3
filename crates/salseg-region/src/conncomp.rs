//! Connected component analysis
//!
//! Finds and labels connected foreground regions of 8-bit masks (nonzero is
//! foreground). Components are numbered from 1 in the raster order of their
//! first pixel.

use crate::error::{RegionError, RegionResult};
use salseg_core::{Channels, LabelMatrix, Raster, UNLABELED};
use std::collections::VecDeque;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets as (dx, dy)
    pub fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(i32, i32); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// Axis-aligned bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component, starting at 1
    pub label: i32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// First pixel in raster order
    pub first_pixel: (u32, u32),
    /// Bounding box of this component
    pub bounds: Bounds,
}

/// Find all connected components in a binary mask
///
/// Returns the components in the raster order of their first pixel.
pub fn find_connected_components(
    mask: &Raster,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let (_, components) = label_connected_components(mask, connectivity)?;
    Ok(components)
}

/// Label all connected components in a binary mask
///
/// Background pixels get 0; the component discovered `k`-th in raster
/// order gets label `k`.
pub fn label_connected_components(
    mask: &Raster,
    connectivity: ConnectivityType,
) -> RegionResult<(LabelMatrix, Vec<ConnectedComponent>)> {
    if mask.channels() != Channels::Gray {
        return Err(RegionError::UnsupportedChannels {
            expected: "1",
            actual: mask.channels().count() as u32,
        });
    }

    let (w, h) = mask.dimensions();
    let src = mask.data();
    let mut labels = LabelMatrix::new(w, h)?;
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if src[idx] == 0 || labels.data()[idx] != UNLABELED {
                continue;
            }

            let label = components.len() as i32 + 1;
            let lab = labels.data_mut();
            lab[idx] = label;
            queue.push_back((x, y));

            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
            let mut count = 0u32;

            while let Some((cx, cy)) = queue.pop_front() {
                count += 1;
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for &(dx, dy) in connectivity.offsets() {
                    let (nx, ny) = (cx as i64 + dx as i64, cy as i64 + dy as i64);
                    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                        continue;
                    }
                    let n = (ny as u32 * w + nx as u32) as usize;
                    if src[n] != 0 && lab[n] == UNLABELED {
                        lab[n] = label;
                        queue.push_back((nx as u32, ny as u32));
                    }
                }
            }

            components.push(ConnectedComponent {
                label,
                pixel_count: count,
                first_pixel: (x, y),
                bounds: Bounds {
                    x: min_x,
                    y: min_y,
                    w: max_x - min_x + 1,
                    h: max_y - min_y + 1,
                },
            });
        }
    }

    Ok((labels, components))
}

/// Fill enclosed holes of a component label matrix.
///
/// A hole is a 4-connected set of unlabeled cells that does not touch the
/// image border. Each hole takes the label of the cell directly above its
/// first cell in raster order, which is the enclosing component. Labels of
/// components nested inside a hole are kept.
///
/// Returns the number of holes filled.
pub fn fill_label_holes(labels: &mut LabelMatrix) -> usize {
    let (w, h) = labels.dimensions();
    let len = (w * h) as usize;
    let mut visited = vec![false; len];
    let mut queue = VecDeque::new();
    let mut pocket = Vec::new();
    let mut filled = 0;

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if visited[idx] || labels.data()[idx] != UNLABELED {
                continue;
            }

            visited[idx] = true;
            queue.push_back((x, y));
            pocket.clear();
            let mut touches_border = false;

            while let Some((cx, cy)) = queue.pop_front() {
                pocket.push((cy * w + cx) as usize);
                if cx == 0 || cy == 0 || cx == w - 1 || cy == h - 1 {
                    touches_border = true;
                }
                for &(dx, dy) in ConnectivityType::FourWay.offsets() {
                    let (nx, ny) = (cx as i64 + dx as i64, cy as i64 + dy as i64);
                    if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                        continue;
                    }
                    let n = (ny as u32 * w + nx as u32) as usize;
                    if !visited[n] && labels.data()[n] == UNLABELED {
                        visited[n] = true;
                        queue.push_back((nx as u32, ny as u32));
                    }
                }
            }

            if touches_border {
                continue;
            }

            // y > 0 since the pocket does not touch the border
            let enclosing = labels.data()[idx - w as usize];
            let data = labels.data_mut();
            for &p in &pocket {
                data[p] = enclosing;
            }
            filled += 1;
        }
    }

    if filled > 0 {
        log::trace!("filled {filled} enclosed holes");
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(rows: &[&str]) -> Raster {
        let w = rows[0].len() as u32;
        let h = rows.len() as u32;
        let data = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| if b == b'x' { 255 } else { 0 }))
            .collect();
        Raster::from_data(w, h, Channels::Gray, data).unwrap()
    }

    #[test]
    fn test_diagonal_connectivity() {
        let m = mask_from(&["x...", ".x..", "...x"]);
        assert_eq!(
            find_connected_components(&m, ConnectivityType::FourWay)
                .unwrap()
                .len(),
            3
        );
        assert_eq!(
            find_connected_components(&m, ConnectivityType::EightWay)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_discovery_order_and_stats() {
        let m = mask_from(&["...xx", "x..xx", "x...."]);
        let (labels, comps) = label_connected_components(&m, ConnectivityType::EightWay).unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].first_pixel, (3, 0));
        assert_eq!(comps[0].pixel_count, 4);
        assert_eq!(comps[0].bounds, Bounds { x: 3, y: 0, w: 2, h: 2 });
        assert_eq!(comps[1].first_pixel, (0, 1));
        assert_eq!(labels.get(0, 2), Some(2));
        assert_eq!(labels.get(1, 1), Some(0));
    }

    #[test]
    fn test_fill_holes_keeps_nested_island() {
        let m = mask_from(&[
            ".......",
            ".xxxxx.",
            ".x...x.",
            ".x.x.x.",
            ".x...x.",
            ".xxxxx.",
            ".......",
        ]);
        let (mut labels, comps) =
            label_connected_components(&m, ConnectivityType::EightWay).unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!(fill_label_holes(&mut labels), 1);
        assert_eq!(labels.get(2, 2), Some(1));
        assert_eq!(labels.get(3, 3), Some(2));
        assert_eq!(labels.get(0, 0), Some(0));
        assert_eq!(labels.count(1), 24);
    }

    #[test]
    fn test_border_pocket_not_filled() {
        let m = mask_from(&["x.x", "xxx"]);
        let (mut labels, _) = label_connected_components(&m, ConnectivityType::EightWay).unwrap();
        assert_eq!(fill_label_holes(&mut labels), 0);
        assert_eq!(labels.get(1, 0), Some(0));
    }

    #[test]
    fn test_rgb_rejected() {
        let rgb = Raster::new(2, 2, Channels::Rgb).unwrap();
        assert!(label_connected_components(&rgb, ConnectivityType::FourWay).is_err());
    }
}
