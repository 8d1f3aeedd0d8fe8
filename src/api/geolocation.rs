use crate::codec::{encode_default, is_valid};
use crate::util::coord::{Coordinate, LatLng};
use serde::Serialize;
use tracing::warn;

/// Stored in place of a Plus Code when encoding did not yield a valid code.
pub const NOT_VALID: &str = "Not Valid";

/// A location together with its 10-digit Plus Code.
///
/// The code is computed once, at construction.
///
/// # Example
///
/// ```
/// use pluscode_rs::Geolocation;
///
/// let location = Geolocation::new(47.365562, 8.524813);
/// assert_eq!(location.plus_code(), "8FVC9G8F+6W");
/// assert_eq!(location.coordinates(), "Latitude: 47.365562 Longitude: 8.524813");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geolocation {
    latitude: f64,
    longitude: f64,
    plus_code: String,
}

impl Geolocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let code = encode_default(&LatLng::new(latitude, longitude));
        let plus_code = if is_valid(&code) {
            code
        } else {
            warn!(latitude, longitude, %code, "encoded plus code failed validation");
            NOT_VALID.to_string()
        };

        Self {
            latitude,
            longitude,
            plus_code,
        }
    }

    pub fn from_coord(coord: &impl Coordinate) -> Self {
        Self::new(coord.latitude(), coord.longitude())
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The Plus Code, or [`NOT_VALID`].
    pub fn plus_code(&self) -> &str {
        &self.plus_code
    }

    /// Human readable coordinates with six decimal places.
    pub fn coordinates(&self) -> String {
        format!(
            "Latitude: {:.6} Longitude: {:.6}",
            self.latitude, self.longitude
        )
    }
}

impl Coordinate for Geolocation {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_new() {
        let location = Geolocation::new(51.3701125, -1.217765625);
        assert_eq!(location.plus_code(), "9C3W9QCJ+2V");
        assert_eq!(location.latitude(), 51.3701125);
        assert_eq!(location.longitude(), -1.217765625);
    }

    #[test]
    fn test_coordinates_format() {
        let location = Geolocation::new(37.421998, -122.084);
        assert_eq!(
            location.coordinates(),
            "Latitude: 37.421998 Longitude: -122.084000"
        );
    }

    #[test]
    fn test_out_of_range_input_still_gets_a_code() {
        let location = Geolocation::new(120.0, 200.0);
        assert_ne!(location.plus_code(), NOT_VALID);
        assert_eq!(location.latitude(), 120.0);
    }

    #[test]
    fn test_from_point() {
        let location = Geolocation::from_coord(&Point::new(8.524813, 47.365562));
        assert_eq!(location.plus_code(), "8FVC9G8F+6W");
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Geolocation::new(47.365562, 8.524813))?;
        assert!(json.contains(r#""plus_code":"8FVC9G8F+6W""#));
        Ok(())
    }
}
