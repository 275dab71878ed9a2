//! Value types crossing the conversion boundary.
//!
//! Angles are decimal degrees, linear measures are metres. Every value is a
//! transient produced and consumed by a single conversion call; nothing here
//! has identity or a mutable lifecycle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic position: latitude/longitude in decimal degrees, height in metres
/// above the ellipsoid. Meaningful only relative to a datum (WGS84 or PSD93);
/// the functions producing and consuming it say which.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPoint {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl GeodeticPoint {
    pub const fn new(lat: f64, lon: f64, height: f64) -> Self {
        Self { lat, lon, height }
    }

    /// Point at ellipsoid height zero, the common case for survey coordinates.
    pub const fn sea_level(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, 0.0)
    }
}

/// Earth-centred Earth-fixed Cartesian position in metres.
///
/// Frame-dependent: a point expressed in the WGS84 frame and one expressed in
/// the PSD93 frame must never be compared or combined without an explicit
/// Helmert step between them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// UTM grid position: easting/northing in metres within a numbered zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmPoint {
    pub easting: f64,
    pub northing: f64,
    pub zone: u8,
}

impl UtmPoint {
    pub const fn new(easting: f64, northing: f64, zone: u8) -> Self {
        Self {
            easting,
            northing,
            zone,
        }
    }
}
