use thiserror::Error;

/// Errors surfaced by the boundary conversion functions.
///
/// The underlying arithmetic is total; these variants reject input that would
/// otherwise flow through the series expansions and come back as garbage.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    #[error("Latitude out of range: {0}° (must be within ±90°)")]
    LatitudeOutOfRange(f64),

    #[error("UTM zone out of range: {0} (must be 1..=60)")]
    ZoneOutOfRange(u8),

    #[error("Point too far from the zone central meridian: series argument {0:.4} rad")]
    SeriesDivergence(f64),
}

/// Reject latitudes outside ±90° (NaN fails the range check and is rejected too).
pub(crate) fn check_latitude(lat_deg: f64) -> Result<(), TransformError> {
    if (-90.0..=90.0).contains(&lat_deg) {
        Ok(())
    } else {
        Err(TransformError::LatitudeOutOfRange(lat_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(90.0001).is_err());
        assert!(check_latitude(-120.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::ZoneOutOfRange(0);
        assert!(err.to_string().contains("zone"));
        let err = TransformError::LatitudeOutOfRange(95.0);
        assert!(err.to_string().contains("95"));
    }
}
