//! Watershed marker construction

use crate::{SegmentError, SegmentResult};
use salseg_core::{Channels, LabelMatrix, Raster, UNLABELED};
use salseg_region::{ConnectivityType, fill_label_holes, label_connected_components};

/// Band between sure background and sure foreground.
///
/// Saturating per-pixel `sure_bg - sure_fg`. Both masks must hold only
/// 0 and 255.
pub fn unknown_region(sure_bg: &Raster, sure_fg: &Raster) -> SegmentResult<Raster> {
    if !sure_bg.sizes_equal(sure_fg) {
        return Err(SegmentError::DimensionMismatch {
            saliency: sure_fg.dimensions(),
            image: sure_bg.dimensions(),
        });
    }
    if !sure_bg.is_binary() {
        return Err(SegmentError::NonBinaryMask("sure background"));
    }
    if !sure_fg.is_binary() {
        return Err(SegmentError::NonBinaryMask("sure foreground"));
    }

    let data = sure_bg
        .data()
        .iter()
        .zip(sure_fg.data())
        .map(|(&bg, &fg)| bg.saturating_sub(fg))
        .collect();
    Ok(Raster::from_data(
        sure_bg.width(),
        sure_bg.height(),
        Channels::Gray,
        data,
    )?)
}

/// Seed labels for the watershed.
///
/// 8-connected components of `sure_fg` are numbered in raster discovery
/// order and their enclosed holes filled. Every cell is then shifted by one
/// so background becomes 1 and components 2..=N+1, and cells inside
/// `unknown` are reset to 0.
///
/// Returns the markers and the component count N, which may be 0.
pub fn build_markers(sure_fg: &Raster, unknown: &Raster) -> SegmentResult<(LabelMatrix, usize)> {
    if !sure_fg.sizes_equal(unknown) {
        return Err(SegmentError::DimensionMismatch {
            saliency: sure_fg.dimensions(),
            image: unknown.dimensions(),
        });
    }

    let (mut markers, components) =
        label_connected_components(sure_fg, ConnectivityType::EightWay)?;
    fill_label_holes(&mut markers);
    markers.offset_all(1);

    for (label, &u) in markers.data_mut().iter_mut().zip(unknown.data()) {
        if u != 0 {
            *label = UNLABELED;
        }
    }

    Ok((markers, components.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use salseg_core::BACKGROUND_LABEL;

    fn mask(w: u32, h: u32, rows: &[&str]) -> Raster {
        let data = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| if b == b'x' { 255 } else { 0 }))
            .collect();
        Raster::from_data(w, h, Channels::Gray, data).unwrap()
    }

    #[test]
    fn test_unknown_is_saturating_difference() {
        let bg = mask(4, 1, &["xxx."]);
        let fg = mask(4, 1, &[".x.x"]);
        let u = unknown_region(&bg, &fg).unwrap();
        assert_eq!(u.data(), &[255, 0, 255, 0]);
    }

    #[test]
    fn test_non_binary_rejected() {
        let bg = Raster::new_with_value(2, 2, Channels::Gray, 7).unwrap();
        let fg = Raster::new(2, 2, Channels::Gray).unwrap();
        assert!(matches!(
            unknown_region(&bg, &fg),
            Err(SegmentError::NonBinaryMask(_))
        ));
        assert!(matches!(
            unknown_region(&fg, &bg),
            Err(SegmentError::NonBinaryMask(_))
        ));
    }

    #[test]
    fn test_marker_layout() {
        let fg = mask(6, 3, &["xx....", "xx..x.", "......"]);
        let unknown = mask(6, 3, &["..x...", "..x...", "xxx..."]);
        let (markers, n) = build_markers(&fg, &unknown).unwrap();
        assert_eq!(n, 2);
        assert_eq!(markers.get(0, 0), Some(2));
        assert_eq!(markers.get(4, 1), Some(3));
        assert_eq!(markers.get(2, 0), Some(UNLABELED));
        assert_eq!(markers.get(5, 2), Some(BACKGROUND_LABEL));
    }

    #[test]
    fn test_empty_foreground() {
        let fg = Raster::new(3, 3, Channels::Gray).unwrap();
        let (markers, n) = build_markers(&fg, &fg).unwrap();
        assert_eq!(n, 0);
        assert_eq!(markers.count(BACKGROUND_LABEL), 9);
    }
}
