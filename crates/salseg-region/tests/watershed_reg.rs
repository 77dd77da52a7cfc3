//! Watershed and connected component regression test
//!
//! Floods a synthetic two-color image from a background seed and an
//! object seed and checks the partition invariants.

use salseg_core::{BACKGROUND_LABEL, BOUNDARY_LABEL, LabelMatrix, UNLABELED};
use salseg_region::{
    ConnectivityType, distance_transform, fill_label_holes, label_connected_components, watershed,
};
use salseg_test::{RegParams, synthetic};

#[test]
fn watershed_reg() {
    let mut rp = RegParams::new("watershed");

    let (w, h) = (48u32, 40u32);
    let image = synthetic::rgb_rect(w, h, (14, 10, 34, 30), [220, 180, 40], [30, 40, 90]);

    // Seeds: background strip at the top, object core in the middle
    let mut markers = LabelMatrix::new(w, h).unwrap();
    for x in 1..w - 1 {
        markers.set(x, 1, BACKGROUND_LABEL).unwrap();
    }
    for y in 18..22 {
        for x in 22..26 {
            markers.set(x, y, 2).unwrap();
        }
    }
    watershed(&image, &mut markers).unwrap();

    // Every cell is labeled or boundary
    rp.compare_values(0.0, markers.count(UNLABELED) as f64, 0.0);
    let frame = (2 * (w + h) - 4) as usize;
    rp.check(markers.count(BOUNDARY_LABEL) >= frame, "frame is boundary");

    // No two 4-adjacent cells carry different positive labels
    let conflicts = markers
        .adjacent_pairs()
        .filter(|&(a, b)| {
            let la = markers.get_unchecked(a.0, a.1);
            let lb = markers.get_unchecked(b.0, b.1);
            la > 0 && lb > 0 && la != lb
        })
        .count();
    rp.compare_values(0.0, conflicts as f64, 0.0);

    // The object interior belongs to the object seed, the outside to background
    rp.compare_values(2.0, markers.get_unchecked(15, 11) as f64, 0.0);
    rp.compare_values(2.0, markers.get_unchecked(32, 28) as f64, 0.0);
    rp.compare_values(1.0, markers.get_unchecked(5, 35) as f64, 0.0);
    rp.compare_values(1.0, markers.get_unchecked(40, 20) as f64, 0.0);
    let object = markers.count(2);
    eprintln!("  object cells: {}", object);
    rp.check(
        (18 * 18..=22 * 22).contains(&object),
        "object area close to the colored square",
    );

    // Components and holes of a ring mask
    let ring = synthetic::gray_rect(20, 20, (4, 4, 16, 16), 255, 0);
    let mut ring_data = ring.data().to_vec();
    for y in 7..13 {
        for x in 7..13 {
            ring_data[y * 20 + x] = 0;
        }
    }
    let ring = salseg_core::Raster::from_data(20, 20, ring.channels(), ring_data).unwrap();
    let (mut labels, comps) = label_connected_components(&ring, ConnectivityType::EightWay).unwrap();
    rp.compare_values(1.0, comps.len() as f64, 0.0);
    rp.compare_values(1.0, fill_label_holes(&mut labels) as f64, 0.0);
    rp.compare_values(144.0, labels.count(1) as f64, 0.0);

    // Distance transform of the filled square peaks in the middle
    let square = synthetic::gray_rect(20, 20, (4, 4, 16, 16), 255, 0);
    let dist = distance_transform(&square).unwrap();
    let (_, max) = dist.min_max();
    rp.compare_values(6.0, max as f64, 1e-5);

    assert!(rp.cleanup(), "watershed regression test failed");
}
