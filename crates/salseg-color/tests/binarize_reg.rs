//! Binarization and color ramp regression test
//!
//! Otsu thresholding on synthetic saliency-like maps, plus the
//! heat-map ramp used for saliency display.

use salseg_color::{Colormap, compute_otsu_threshold, threshold_otsu, threshold_to_binary};
use salseg_test::{RegParams, synthetic};

#[test]
fn binarize_reg() {
    let mut rp = RegParams::new("binarize");

    // --- Test 1: Fixed threshold ---
    eprintln!("=== Fixed threshold ===");
    let noise = synthetic::gray_noise(64, 48, 5);
    let bin128 = threshold_to_binary(&noise, 128).unwrap();
    rp.check(bin128.sizes_equal(&noise), "dimensions preserved");
    rp.check(bin128.is_binary(), "fixed threshold output is binary");
    let above = noise.data().iter().filter(|&&v| v > 128).count();
    rp.compare_values(above as f64, bin128.count_nonzero() as f64, 0.0);

    // --- Test 2: Otsu on a bright disk ---
    eprintln!("=== Otsu threshold ===");
    let disk = synthetic::gray_disk(64, 64, (32, 32), 12, 230, 30);
    let t = compute_otsu_threshold(&disk).unwrap();
    eprintln!("  otsu threshold = {}", t);
    rp.check((30..230).contains(&t), "threshold separates the two levels");
    let (mask, t2) = threshold_otsu(&disk).unwrap();
    rp.compare_values(t as f64, t2 as f64, 0.0);
    let disk_pixels = disk.data().iter().filter(|&&v| v == 230).count();
    rp.compare_values(disk_pixels as f64, mask.count_nonzero() as f64, 0.0);

    // --- Test 3: Degenerate maps ---
    eprintln!("=== Degenerate maps ===");
    let mid = synthetic::gray_rect(16, 16, (0, 0, 0, 0), 0, 128);
    let (mid_mask, mid_t) = threshold_otsu(&mid).unwrap();
    rp.compare_values(128.0, mid_t as f64, 0.0);
    rp.compare_values(0.0, mid_mask.count_nonzero() as f64, 0.0);
    let black = synthetic::gray_rect(16, 16, (0, 0, 0, 0), 0, 0);
    let (black_mask, _) = threshold_otsu(&black).unwrap();
    rp.compare_values(0.0, black_mask.count_nonzero() as f64, 0.0);

    // --- Test 4: Heat-map ramp ---
    eprintln!("=== Color ramp ===");
    let heat = Colormap::InvertedJet.apply(&disk.invert()).unwrap();
    let center = heat.get_rgb(32, 32).unwrap();
    let corner = heat.get_rgb(0, 0).unwrap();
    rp.check(center[0] > center[2], "salient pixels are red");
    rp.check(corner[2] > corner[0], "non-salient pixels are blue");

    if rp.display() {
        rp.write_raster_and_check(&mask).unwrap();
        rp.write_raster_and_check(&heat).unwrap();
    }

    assert!(rp.cleanup(), "binarize regression test failed");
}
