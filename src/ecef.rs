//! Geodetic ↔ Earth-centred Earth-fixed Cartesian conversion.
//!
//! Both directions are closed-form. The Cartesian → geodetic direction uses
//! Bowring's method as a single pass (no iteration): for points near the
//! ellipsoid surface the latitude error is far below a millimetre, which is
//! enough for this crate's centimetre-to-metre use case but not for
//! survey-grade work at altitude.

use crate::ellipsoid::Ellipsoid;
use crate::point::{CartesianPoint, GeodeticPoint};

/// Convert geodetic coordinates (degrees, metres) to ECEF metres on the given
/// ellipsoid.
///
/// Total over all finite input; at exactly ±90° latitude the result is
/// degenerate (X = Y = 0) but finite.
pub fn geodetic_to_ecef(point: GeodeticPoint, ellipsoid: &Ellipsoid) -> CartesianPoint {
    let lat = point.lat.to_radians();
    let lon = point.lon.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    // Prime-vertical radius of curvature
    let n = ellipsoid.a / (1.0 - ellipsoid.e2 * sin_lat * sin_lat).sqrt();

    CartesianPoint::new(
        (n + point.height) * cos_lat * cos_lon,
        (n + point.height) * cos_lat * sin_lon,
        (n * (1.0 - ellipsoid.e2) + point.height) * sin_lat,
    )
}

/// Recover geodetic coordinates (degrees, metres) from ECEF metres.
///
/// Single-pass Bowring recovery: an auxiliary parametric angle θ gives the
/// latitude directly, then height follows from the prime-vertical radius.
/// Callers must not assume sub-millimetre accuracy.
pub fn ecef_to_geodetic(point: CartesianPoint, ellipsoid: &Ellipsoid) -> GeodeticPoint {
    let p = (point.x * point.x + point.y * point.y).sqrt();
    let lon = point.y.atan2(point.x);

    let theta = (point.z * ellipsoid.a).atan2(p * ellipsoid.b);
    let (sin_theta, cos_theta) = theta.sin_cos();

    let lat = (point.z + ellipsoid.ep2 * ellipsoid.b * sin_theta.powi(3))
        .atan2(p - ellipsoid.e2 * ellipsoid.a * cos_theta.powi(3));

    let sin_lat = lat.sin();
    let n = ellipsoid.a / (1.0 - ellipsoid.e2 * sin_lat * sin_lat).sqrt();
    let height = p / lat.cos() - n;

    GeodeticPoint::new(lat.to_degrees(), lon.to_degrees(), height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{CLARKE_1880, WGS84};
    use approx::assert_relative_eq;

    #[test]
    fn test_equator_prime_meridian() {
        let p = geodetic_to_ecef(GeodeticPoint::sea_level(0.0, 0.0), &WGS84);
        assert_relative_eq!(p.x, WGS84.a, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_equator_90_east() {
        let p = geodetic_to_ecef(GeodeticPoint::sea_level(0.0, 90.0), &WGS84);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, WGS84.a, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_north_pole_degenerate_but_finite() {
        let p = geodetic_to_ecef(GeodeticPoint::sea_level(90.0, 0.0), &WGS84);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert_relative_eq!(p.z, WGS84.b, epsilon = 1e-6);
    }

    #[test]
    fn test_height_moves_point_radially() {
        let sea = geodetic_to_ecef(GeodeticPoint::sea_level(0.0, 0.0), &WGS84);
        let up = geodetic_to_ecef(GeodeticPoint::new(0.0, 0.0, 1000.0), &WGS84);
        assert_relative_eq!(up.x - sea.x, 1000.0, epsilon = 1e-6);
        assert_relative_eq!(up.y, sea.y, epsilon = 1e-6);
        assert_relative_eq!(up.z, sea.z, epsilon = 1e-6);
    }

    #[test]
    fn test_roundtrip_near_surface() {
        // Mid-latitude points at small heights: the single Bowring pass
        // recovers the input to centimetre level or better.
        let cases = [
            (23.588, 58.3829, 0.0),
            (51.4769, 0.0, 47.0),
            (-33.9, 18.4, 120.0),
            (17.0, 54.1, -30.0),
        ];
        for &(lat, lon, h) in &cases {
            let ecef = geodetic_to_ecef(GeodeticPoint::new(lat, lon, h), &WGS84);
            let back = ecef_to_geodetic(ecef, &WGS84);
            assert_relative_eq!(back.lat, lat, epsilon = 1e-7);
            assert_relative_eq!(back.lon, lon, epsilon = 1e-9);
            assert_relative_eq!(back.height, h, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_roundtrip_clarke_1880() {
        let ecef = geodetic_to_ecef(GeodeticPoint::sea_level(23.5, 57.0), &CLARKE_1880);
        let back = ecef_to_geodetic(ecef, &CLARKE_1880);
        assert_relative_eq!(back.lat, 23.5, epsilon = 1e-7);
        assert_relative_eq!(back.lon, 57.0, epsilon = 1e-9);
        assert_relative_eq!(back.height, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_southern_hemisphere_negative_z() {
        let p = geodetic_to_ecef(GeodeticPoint::sea_level(-45.0, 10.0), &WGS84);
        assert!(p.z < 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let p = geodetic_to_ecef(GeodeticPoint::sea_level(f64::NAN, 0.0), &WGS84);
        assert!(p.x.is_nan() && p.z.is_nan());
    }
}
