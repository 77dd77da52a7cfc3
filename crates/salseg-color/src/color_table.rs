//! Per-region color tables

use rand::Rng;

/// One background color followed by one color per region.
///
/// Region ids start at 2 (id 1 is the background marker), so entry `k`
/// for `k >= 1` colors region id `k + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<[u8; 3]>,
}

impl ColorTable {
    /// Draw `region_count + 1` colors from `rng`.
    ///
    /// Each channel is uniform in `[0, 255)`; the same RNG state always
    /// yields the same table.
    pub fn random<R: Rng>(region_count: usize, rng: &mut R) -> Self {
        let entries = (0..=region_count)
            .map(|_| {
                [
                    rng.random_range(0..255u8),
                    rng.random_range(0..255u8),
                    rng.random_range(0..255u8),
                ]
            })
            .collect();
        ColorTable { entries }
    }

    /// Build a table from explicit entries; entry 0 is the background.
    pub fn from_entries(entries: Vec<[u8; 3]>) -> Self {
        ColorTable { entries }
    }

    /// Number of regions covered by the table
    pub fn region_count(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Color of the background marker
    pub fn background(&self) -> [u8; 3] {
        self.entries.first().copied().unwrap_or([0; 3])
    }

    /// Color of a region id, `None` outside `2..=region_count + 1`
    pub fn region(&self, id: i32) -> Option<[u8; 3]> {
        if id < 2 {
            return None;
        }
        self.entries.get(id as usize - 1).copied()
    }

    /// All entries, background first
    pub fn entries(&self) -> &[[u8; 3]] {
        &self.entries
    }
}
