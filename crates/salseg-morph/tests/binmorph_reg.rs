//! Binary morphology regression test
//!
//! Tests dilation, erosion, opening and closing on synthetic masks.
//!
//! Run with:
//! ```
//! cargo test -p salseg-morph --test binmorph_reg
//! ```

use salseg_morph::{Sel, close, dilate, dilate_iter, erode, open, open_iter};
use salseg_test::{RegParams, synthetic};

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");

    let mask = synthetic::gray_rect(40, 30, (10, 8, 25, 20), 255, 0);
    let orig_count = mask.count_nonzero();
    let sel = Sel::create_square(3).unwrap();

    // Dilation grows by one pixel on every side
    eprintln!("  Testing dilation");
    let dilated = dilate(&mask, &sel).unwrap();
    rp.compare_values((17 * 14) as f64, dilated.count_nonzero() as f64, 0.0);

    // Erosion shrinks by one pixel on every side
    eprintln!("  Testing erosion");
    let eroded = erode(&mask, &sel).unwrap();
    rp.compare_values((13 * 10) as f64, eroded.count_nonzero() as f64, 0.0);

    // A rectangle larger than the SEL survives opening and closing unchanged
    eprintln!("  Testing opening and closing");
    let opened = open(&mask, &sel).unwrap();
    rp.compare_raster(&mask, &opened);
    let closed = close(&mask, &sel).unwrap();
    rp.compare_raster(&mask, &closed);
    rp.compare_values(orig_count as f64, opened.count_nonzero() as f64, 0.0);

    // Two iterations of opening remove anything thinner than 5 pixels
    let thin = synthetic::gray_rect(40, 30, (5, 5, 9, 25), 255, 0);
    let opened2 = open_iter(&thin, &sel, 2).unwrap();
    rp.compare_values(0.0, opened2.count_nonzero() as f64, 0.0);
    let thick = synthetic::gray_rect(40, 30, (5, 5, 10, 25), 255, 0);
    let opened2 = open_iter(&thick, &sel, 2).unwrap();
    rp.compare_raster(&thick, &opened2);

    // Iterated dilation composes
    let d3 = dilate_iter(&mask, &sel, 3).unwrap();
    let big = Sel::create_square(7).unwrap();
    let d7 = dilate(&mask, &big).unwrap();
    rp.compare_raster(&d7, &d3);

    // Idempotence of opening
    let noise = synthetic::gray_noise(32, 32, 11);
    let once = open(&noise, &sel).unwrap();
    let twice = open(&once, &sel).unwrap();
    rp.compare_raster(&once, &twice);

    if rp.display() {
        rp.write_raster_and_check(&dilated).unwrap();
        rp.write_raster_and_check(&eroded).unwrap();
    }

    assert!(rp.cleanup(), "binmorph regression test failed");
}
