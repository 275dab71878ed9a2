//! WGS84 ↔ PSD93 datum conversion.
//!
//! Each direction is the three-stage composition: geodetic → ECEF on the
//! source ellipsoid, Helmert transform, ECEF → geodetic on the target
//! ellipsoid. The two directions are not exact inverses of each other (the
//! Helmert step is linearized and the geodetic recovery is a single Bowring
//! pass); the round-trip error is bounded well under a metre.

use crate::ecef::{ecef_to_geodetic, geodetic_to_ecef};
use crate::ellipsoid::{CLARKE_1880, WGS84};
use crate::error::{check_latitude, TransformError};
use crate::helmert::{Direction, WGS84_TO_PSD93};
use crate::point::GeodeticPoint;

/// Convert WGS84 geodetic coordinates (degrees, metres) to PSD93.
pub fn wgs84_to_psd93(lat: f64, lon: f64, height: f64) -> Result<GeodeticPoint, TransformError> {
    check_latitude(lat)?;
    let ecef = geodetic_to_ecef(GeodeticPoint::new(lat, lon, height), &WGS84);
    let shifted = WGS84_TO_PSD93.apply(ecef, Direction::Forward);
    Ok(ecef_to_geodetic(shifted, &CLARKE_1880))
}

/// Convert PSD93 geodetic coordinates (degrees, metres) to WGS84.
pub fn psd93_to_wgs84(lat: f64, lon: f64, height: f64) -> Result<GeodeticPoint, TransformError> {
    check_latitude(lat)?;
    let ecef = geodetic_to_ecef(GeodeticPoint::new(lat, lon, height), &CLARKE_1880);
    let shifted = WGS84_TO_PSD93.apply(ecef, Direction::Inverse);
    Ok(ecef_to_geodetic(shifted, &WGS84))
}
