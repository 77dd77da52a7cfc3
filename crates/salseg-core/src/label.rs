//! LabelMatrix - Integer region labels
//!
//! A `LabelMatrix` holds one `i32` region identifier per pixel. The
//! segmentation pipeline uses a fixed convention:
//!
//! | value | meaning |
//! |---|---|
//! | -1 | boundary (watershed line) |
//! | 0 | unlabeled, still to be resolved |
//! | 1 | background region |
//! | 2.. | foreground regions in discovery order |

use crate::error::{Error, Result};

/// Label of boundary pixels between two flooded regions
pub const BOUNDARY_LABEL: i32 = -1;

/// Label of pixels whose region is not yet known
pub const UNLABELED: i32 = 0;

/// Label of the background region
pub const BACKGROUND_LABEL: i32 = 1;

/// Owned grid of region labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatrix {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl LabelMatrix {
    /// Create a matrix with every cell set to [`UNLABELED`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(LabelMatrix {
            width,
            height,
            data: crate::try_alloc(width as usize * height as usize)?,
        })
    }

    /// Create a matrix from row-major labels.
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "label count {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(LabelMatrix {
            width,
            height,
            data,
        })
    }

    /// Get the matrix width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the matrix height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the labels in row-major order
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get the labels mutably
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Get the label at (x, y) or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get the label at (x, y) without bounds checking.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> i32 {
        self.data[self.index(x, y)]
    }

    /// Set the label at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, label: i32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = label;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Add `delta` to every cell.
    pub fn offset_all(&mut self, delta: i32) {
        for label in &mut self.data {
            *label += delta;
        }
    }

    /// Largest label present.
    pub fn max_label(&self) -> i32 {
        self.data.iter().copied().max().unwrap_or(UNLABELED)
    }

    /// Number of cells carrying `label`.
    pub fn count(&self, label: i32) -> usize {
        self.data.iter().filter(|&&l| l == label).count()
    }

    /// Iterate over all 4-adjacent cell pairs as `((x, y), (x2, y2))`.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = ((u32, u32), (u32, u32))> + '_ {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| {
            (0..w).flat_map(move |x| {
                let right = (x + 1 < w).then_some(((x, y), (x + 1, y)));
                let down = (y + 1 < h).then_some(((x, y), (x, y + 1)));
                right.into_iter().chain(down)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unlabeled() {
        let labels = LabelMatrix::new(3, 2).unwrap();
        assert_eq!(labels.count(UNLABELED), 6);
        assert_eq!(labels.max_label(), UNLABELED);
    }

    #[test]
    fn test_set_get_offset() {
        let mut labels = LabelMatrix::new(3, 2).unwrap();
        labels.set(2, 1, 4).unwrap();
        assert!(labels.set(3, 1, 4).is_err());
        labels.offset_all(1);
        assert_eq!(labels.get(2, 1), Some(5));
        assert_eq!(labels.get(0, 0), Some(BACKGROUND_LABEL));
        assert_eq!(labels.get(0, 2), None);
    }

    #[test]
    fn test_adjacent_pairs_count() {
        let labels = LabelMatrix::new(3, 2).unwrap();
        // 2 rows * 2 horizontal + 3 columns * 1 vertical
        assert_eq!(labels.adjacent_pairs().count(), 7);
    }
}
