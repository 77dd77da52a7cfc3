//! Segmentation regression test
//!
//! Drives the full threshold / morphology / distance / marker / watershed
//! chain on synthetic saliency maps with known answers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use salseg_core::{BACKGROUND_LABEL, BOUNDARY_LABEL, Channels, LabelMatrix, Raster, RasterMut};
use salseg_segment::{RegionSegmenter, SegmentError, SegmentOptions, segment_regions};
use salseg_test::{RegParams, synthetic};

/// Saliency with two bright disks and the matching color image.
fn two_objects() -> (Raster, Raster) {
    let (w, h) = (64u32, 48u32);
    let mut sal = RasterMut::new(w, h, Channels::Gray).unwrap();
    let mut img = RasterMut::new(w, h, Channels::Rgb).unwrap();
    for y in 0..h {
        for x in 0..w {
            let d1 = (x as i64 - 16).pow(2) + (y as i64 - 24).pow(2);
            let d2 = (x as i64 - 46).pow(2) + (y as i64 - 24).pow(2);
            let (s, c) = if d1 <= 81 {
                (230, [220, 40, 40])
            } else if d2 <= 64 {
                (200, [40, 200, 60])
            } else {
                (20, [30, 30, 90])
            };
            sal.set_pixel_unchecked(x, y, s);
            img.set_rgb_unchecked(x, y, c);
        }
    }
    (sal.into(), img.into())
}

fn positive_conflicts(labels: &LabelMatrix) -> usize {
    labels
        .adjacent_pairs()
        .filter(|&(a, b)| {
            let la = labels.get_unchecked(a.0, a.1);
            let lb = labels.get_unchecked(b.0, b.1);
            la > 0 && lb > 0 && la != lb
        })
        .count()
}

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    // --- 4x4 map with a centered 2x2 salient square ---
    eprintln!("=== 4x4 square ===");
    let sal = synthetic::gray_rect(4, 4, (1, 1, 3, 3), 255, 0);
    let img = synthetic::rgb_rect(4, 4, (1, 1, 3, 3), [255, 255, 255], [0, 0, 0]);
    let seg = segment_regions(&sal, &img, &mut StdRng::seed_from_u64(1)).unwrap();
    rp.compare_values(1.0, seg.region_count as f64, 0.0);
    rp.compare_values(4.0, seg.labels.count(2) as f64, 0.0);
    rp.compare_values(12.0, seg.labels.count(BOUNDARY_LABEL) as f64, 0.0);
    for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        rp.compare_values(2.0, seg.labels.get_unchecked(x, y) as f64, 0.0);
    }

    // --- Two objects ---
    eprintln!("=== Two objects ===");
    let (sal, img) = two_objects();
    let a = segment_regions(&sal, &img, &mut StdRng::seed_from_u64(7)).unwrap();
    rp.compare_values(2.0, a.region_count as f64, 0.0);
    rp.compare_values(2.0, a.labels.get_unchecked(16, 24) as f64, 0.0);
    rp.compare_values(3.0, a.labels.get_unchecked(46, 24) as f64, 0.0);
    rp.compare_values(
        BACKGROUND_LABEL as f64,
        a.labels.get_unchecked(3, 3) as f64,
        0.0,
    );
    rp.compare_values(0.0, positive_conflicts(&a.labels) as f64, 0.0);
    rp.compare_values(0.0, a.labels.count(0) as f64, 0.0);
    rp.check(
        a.labels.data().iter().all(|&l| l >= -1 && l <= 3),
        "labels within [-1, N + 1]",
    );
    rp.check(a.colorized.sizes_equal(&img), "colorized keeps size");
    rp.check(a.colorized.channels() == Channels::Rgb, "colorized is RGB");
    rp.check(a.boundary_overlay.sizes_equal(&img), "overlay keeps size");
    rp.compare_values(3.0, a.color_table.entries().len() as f64, 0.0);

    // Labels independent of the RNG, colors reproducible from the seed
    let b = segment_regions(&sal, &img, &mut StdRng::seed_from_u64(99)).unwrap();
    rp.check(a.labels == b.labels, "labels independent of the RNG seed");
    let c = segment_regions(&sal, &img, &mut StdRng::seed_from_u64(7)).unwrap();
    rp.check(a.color_table == c.color_table, "same seed gives same colors");
    rp.compare_raster(&a.colorized, &c.colorized);

    // Out-of-region pixels in the colorized result are half the saliency
    let bg = a.colorized.get_rgb(3, 3).unwrap();
    rp.compare_values(10.0, bg[0] as f64, 0.0);

    // --- Degenerate maps ---
    eprintln!("=== Degenerate maps ===");
    let black = synthetic::gray_rect(16, 16, (0, 0, 0, 0), 0, 0);
    let rgb16 = synthetic::rgb_rect(16, 16, (0, 0, 0, 0), [0; 3], [9, 9, 9]);
    rp.check(
        matches!(
            segment_regions(&black, &rgb16, &mut StdRng::seed_from_u64(0)),
            Err(SegmentError::NoRegionsFound { .. })
        ),
        "all-zero map has no regions",
    );
    let mid = synthetic::gray_rect(16, 16, (0, 0, 0, 0), 0, 128);
    match segment_regions(&mid, &rgb16, &mut StdRng::seed_from_u64(0)) {
        Err(SegmentError::NoRegionsFound { threshold }) => {
            rp.compare_values(128.0, threshold as f64, 0.0);
        }
        other => {
            rp.check(false, &format!("uniform map: unexpected {:?}", other.map(|s| s.region_count)));
        }
    }
    let wide = Raster::new(17, 16, Channels::Rgb).unwrap();
    rp.check(
        matches!(
            segment_regions(&mid, &wide, &mut StdRng::seed_from_u64(0)),
            Err(SegmentError::DimensionMismatch { .. })
        ),
        "size mismatch rejected",
    );

    // --- Options ---
    let strict = RegionSegmenter::new(SegmentOptions::new().with_foreground_fraction(1.0)).unwrap();
    rp.check(
        matches!(
            strict.segment(&sal, &img, &mut StdRng::seed_from_u64(0)),
            Err(SegmentError::NoRegionsFound { .. })
        ),
        "fraction 1.0 leaves no sure foreground",
    );

    if rp.display() {
        rp.write_raster_and_check(&a.colorized).unwrap();
        rp.write_raster_and_check(&a.boundary_overlay).unwrap();
    }

    assert!(rp.cleanup(), "segment regression test failed");
}
