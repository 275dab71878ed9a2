/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = 2.0 * f - f * f;
        let ep2 = e2 / (1.0 - e2);
        Self { a, f, b, e2, ep2 }
    }

    /// First eccentricity. Not stored: sqrt is unavailable in const fn.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }
}

/// The global GPS datum ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);

/// Clarke 1880 (RGS), the ellipsoid PSD93 is realized on.
pub const CLARKE_1880: Ellipsoid = Ellipsoid::new(6_378_249.145, 1.0 / 293.465);
