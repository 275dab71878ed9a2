//! 7-parameter Helmert similarity transform between ECEF frames.
//!
//! Position Vector convention, small-angle linear form. The rotation
//! parameters involved are below ten arc-seconds, so the rotation matrix is
//! replaced by its first-order skew terms.

use crate::point::CartesianPoint;

const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Which way to apply a parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Source frame to target frame, parameters as stored.
    Forward,
    /// Target frame back to source frame: all seven parameters negated,
    /// same linear form.
    Inverse,
}

/// Translations in metres, rotations in arc-seconds, scale in parts-per-million.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelmertParameters {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub scale_ppm: f64,
}

/// WGS84 → PSD93 parameter set (Position Vector sign convention).
///
/// This is the EPSG "PSD93 to WGS 84 (1)" set with all signs flipped, stored
/// in the direction this crate composes first.
pub const WGS84_TO_PSD93: HelmertParameters = HelmertParameters {
    dx: 180.624,
    dy: 225.516,
    dz: -173.919,
    rx: 0.81,
    ry: 1.898,
    rz: -8.336,
    scale_ppm: -16.710_06,
};

impl HelmertParameters {
    /// All seven parameters negated.
    ///
    /// Because the transform is a first-order approximation, the negated set
    /// inverts it to first order only: a forward-then-inverse round trip
    /// leaves a second-order residual (centimetre level for parameters of
    /// this magnitude). Kept as a single formula on purpose so the two
    /// directions cannot drift apart.
    pub const fn negated(&self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            scale_ppm: -self.scale_ppm,
        }
    }

    /// Apply the transform to an ECEF point.
    pub fn apply(&self, point: CartesianPoint, direction: Direction) -> CartesianPoint {
        let p = match direction {
            Direction::Forward => *self,
            Direction::Inverse => self.negated(),
        };

        let s = p.scale_ppm * 1e-6;
        let rx = p.rx * ARCSEC_TO_RAD;
        let ry = p.ry * ARCSEC_TO_RAD;
        let rz = p.rz * ARCSEC_TO_RAD;

        CartesianPoint::new(
            point.x + p.dx + s * point.x - rz * point.y + ry * point.z,
            point.y + p.dy + s * point.y + rz * point.x - rx * point.z,
            point.z + p.dz + s * point.z - ry * point.x + rx * point.y,
        )
    }
}
