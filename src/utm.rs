//! Transverse Mercator projection for the PSD93 UTM grid — Snyder's
//! closed-form series, 5th/6th order.
//!
//! Forward goes through the meridional arc M and powers of A = cosφ·Δλ;
//! inverse recovers the footpoint latitude from the arc and corrects through
//! powers of D = x/(N₁k₀). Accuracy degrades with distance from the central
//! meridian; arguments beyond [`MAX_SERIES_ARG`] are rejected instead of
//! letting the series diverge silently.

use crate::ellipsoid::{Ellipsoid, CLARKE_1880};
use crate::error::{check_latitude, TransformError};
use crate::point::{GeodeticPoint, UtmPoint};

/// UTM scale factor on the central meridian.
pub const SCALE_FACTOR: f64 = 0.9996;

/// UTM false easting (metres).
pub const FALSE_EASTING: f64 = 500_000.0;

/// Largest accepted series argument (|A| forward, |D| inverse), in radians.
///
/// A standard zone spans ±3° from its central meridian, A ≈ 0.05; the series
/// stays metre-accurate out to several times that. 0.25 rad (about 14° of
/// longitude at the equator) is far outside any sensible use of a zone and
/// marks the point where this implementation reports divergence rather than
/// returning numbers that look plausible but are not.
pub const MAX_SERIES_ARG: f64 = 0.25;

/// Central meridian of a UTM zone, in degrees.
pub fn central_meridian(zone: u8) -> f64 {
    6.0 * zone as f64 - 183.0
}

/// Transverse Mercator projection with fixed parameters.
///
/// Angles at the API are decimal degrees; internal math is radians.
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    lon0: f64, // radians
    k0: f64,
    false_easting: f64,
}

impl TransverseMercator {
    pub fn new(ellipsoid: Ellipsoid, lon0_deg: f64, k0: f64, false_easting: f64) -> Self {
        Self {
            ellipsoid,
            lon0: lon0_deg.to_radians(),
            k0,
            false_easting,
        }
    }

    /// The projection underlying a PSD93 UTM zone: Clarke 1880 ellipsoid,
    /// k₀ = 0.9996, false easting 500 000, no false northing (the PSD93 grid
    /// is northern-hemisphere only).
    pub fn psd93_zone(zone: u8) -> Result<Self, TransformError> {
        if !(1..=60).contains(&zone) {
            return Err(TransformError::ZoneOutOfRange(zone));
        }
        Ok(Self::new(
            CLARKE_1880,
            central_meridian(zone),
            SCALE_FACTOR,
            FALSE_EASTING,
        ))
    }

    /// Meridional arc length from the equator to latitude phi (radians).
    fn meridional_arc(&self, phi: f64) -> f64 {
        let e2 = self.ellipsoid.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        self.ellipsoid.a
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }

    /// Geodetic (degrees) to grid easting/northing (metres).
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> Result<(f64, f64), TransformError> {
        check_latitude(lat_deg)?;

        let phi = lat_deg.to_radians();
        let dlam = lon_deg.to_radians() - self.lon0;

        let e2 = self.ellipsoid.e2;
        let ep2 = self.ellipsoid.ep2;
        let (sin_phi, cos_phi) = phi.sin_cos();

        let a = cos_phi * dlam;
        if !(a.abs() <= MAX_SERIES_ARG) {
            return Err(TransformError::SeriesDivergence(a));
        }

        let n = self.ellipsoid.a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = (sin_phi / cos_phi).powi(2);
        let c = ep2 * cos_phi * cos_phi;
        let m = self.meridional_arc(phi);

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let easting = self.k0
            * n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0)
            + self.false_easting;

        let northing = self.k0
            * (m + n
                * (sin_phi / cos_phi)
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0));

        Ok((easting, northing))
    }

    /// Grid easting/northing (metres) to geodetic (degrees), via the
    /// footpoint latitude.
    pub fn inverse(&self, easting: f64, northing: f64) -> Result<(f64, f64), TransformError> {
        let e2 = self.ellipsoid.e2;
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let ep2 = self.ellipsoid.ep2;

        let x = easting - self.false_easting;
        let m = northing / self.k0;
        let mu = m / (self.ellipsoid.a * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));

        // Footpoint latitude from the rectifying series
        let sqrt_1_e2 = (1.0 - e2).sqrt();
        let e1 = (1.0 - sqrt_1_e2) / (1.0 + sqrt_1_e2);
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;

        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1_3 / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1_2 / 16.0 - 55.0 * e1_4 / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1_3 / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1_4 / 512.0) * (8.0 * mu).sin();

        let (sin1, cos1) = phi1.sin_cos();
        let tan1 = sin1 / cos1;
        let t1 = tan1 * tan1;
        let c1 = ep2 * cos1 * cos1;
        let denom = 1.0 - e2 * sin1 * sin1;
        let n1 = self.ellipsoid.a / denom.sqrt();
        let r1 = self.ellipsoid.a * (1.0 - e2) / (denom * denom.sqrt());

        let d = x / (n1 * self.k0);
        if !(d.abs() <= MAX_SERIES_ARG) {
            return Err(TransformError::SeriesDivergence(d));
        }

        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let lat = phi1
            - (n1 * tan1 / r1)
                * (d2 / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d4 / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d6
                        / 720.0);

        let lon = self.lon0
            + (d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                    * d5
                    / 120.0)
                / cos1;

        Ok((lat.to_degrees(), lon.to_degrees()))
    }
}

/// Convert PSD93 geodetic coordinates (degrees) to the PSD93 UTM grid.
pub fn psd93_to_utm(lat: f64, lon: f64, zone: u8) -> Result<UtmPoint, TransformError> {
    let tm = TransverseMercator::psd93_zone(zone)?;
    let (easting, northing) = tm.forward(lat, lon)?;
    Ok(UtmPoint::new(easting, northing, zone))
}

/// Convert PSD93 UTM grid coordinates (metres) back to PSD93 geodetic
/// degrees. Height is not carried by the grid; the result is at height zero.
pub fn utm_to_psd93(easting: f64, northing: f64, zone: u8) -> Result<GeodeticPoint, TransformError> {
    let tm = TransverseMercator::psd93_zone(zone)?;
    let (lat, lon) = tm.inverse(easting, northing)?;
    Ok(GeodeticPoint::sea_level(lat, lon))
}
