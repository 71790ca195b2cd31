use std::path::PathBuf;

use crate::prelude::*;

/*
 * Returns path to given test resource
 */
pub fn test_resource(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources");
    for part in parts {
        path = path.join(part);
    }
    path
}

/*
 * Bright Star Catalogue excerpt
 */
pub fn bsc_subset() -> Catalogue {
    let path = test_resource(&["BSC5", "bsc5_subset.dat"]);
    Catalogue::from_file(&path, CatalogueKind::BrightStar)
        .unwrap_or_else(|e| panic!("failed to parse \"{}\": {}", path.display(), e))
}

/*
 * Hipparcos excerpt
 */
pub fn hip_subset() -> Catalogue {
    let path = test_resource(&["HIP", "hip_subset.dat"]);
    Catalogue::from_file(&path, CatalogueKind::Hipparcos)
        .unwrap_or_else(|e| panic!("failed to parse \"{}\": {}", path.display(), e))
}

/*
 * 2019-12-01 23:00 in Potsdam (UTC+1)
 */
pub fn potsdam_epoch() -> Epoch {
    Epoch::from_gregorian_utc(2019, 12, 1, 22, 0, 0, 0)
}

/*
 * Test: panic if |value - expected| exceeds tolerance
 */
pub fn assert_close(value: f64, expected: f64, tolerance: f64, what: &str) {
    let err = (value - expected).abs();
    assert!(
        err <= tolerance,
        "{}: {} != {} (error {} > {})",
        what,
        value,
        expected,
        err,
        tolerance
    );
}

/*
 * Test: panic if angles (degrees) differ by more than tolerance, modulo 360
 */
pub fn assert_close_deg(value: f64, expected: f64, tolerance: f64, what: &str) {
    let mut err = (value - expected).rem_euclid(360.0);
    if err > 180.0 {
        err = 360.0 - err;
    }
    assert!(
        err <= tolerance,
        "{}: {}° != {}° (error {}° > {}°)",
        what,
        value,
        expected,
        err,
        tolerance
    );
}
