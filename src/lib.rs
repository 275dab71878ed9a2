//! WGS84 ↔ PSD93 datum conversion and PSD93 UTM projection.
//!
//! A stateless numeric core with four composable stages:
//!
//! 1. geodetic ↔ ECEF conversion on a reference ellipsoid ([`ecef`]),
//! 2. the 7-parameter Helmert transform between ECEF frames ([`helmert`]),
//! 3. datum conversion composing the two ([`datum`]),
//! 4. the UTM projection on the Clarke 1880 ellipsoid ([`utm`]).
//!
//! Every conversion is a pure function: no statics, no I/O, no shared state.
//! Calls are independent and safe to issue from any number of threads.
//!
//! Angles at the API boundary are decimal degrees, linear measures metres.

pub mod datum;
pub mod ecef;
pub mod ellipsoid;
pub mod error;
pub mod helmert;
pub mod point;
pub mod utm;

pub use datum::{psd93_to_wgs84, wgs84_to_psd93};
pub use error::TransformError;
pub use point::{CartesianPoint, GeodeticPoint, UtmPoint};
pub use utm::{psd93_to_utm, utm_to_psd93};
