use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide a WGS84 latitude/longitude.
///
/// Implemented for [`LatLng`], `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// Tuples and points follow the x/y convention, so they are read as
/// `(longitude, latitude)`.
pub trait Coordinate {
    /// Returns the latitude in decimal degrees.
    fn latitude(&self) -> f64;
    /// Returns the longitude in decimal degrees.
    fn longitude(&self) -> f64;
}

/// A latitude/longitude pair in decimal degrees.
///
/// No range is enforced; encoding clamps latitude and wraps longitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Converts to a `geo_types::Point` with x = longitude, y = latitude.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl Coordinate for LatLng {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Coordinate for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.1
    }
    fn longitude(&self) -> f64 {
        self.0
    }
}

impl Coordinate for Point<f64> {
    fn latitude(&self) -> f64 {
        self.y()
    }
    fn longitude(&self) -> f64 {
        self.x()
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<LatLng> for Point<f64> {
    fn from(lat_lng: LatLng) -> Self {
        lat_lng.to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (2.775, 20.375);
        assert_eq!(tuple.latitude(), 20.375);
        assert_eq!(tuple.longitude(), 2.775);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(2.775, 20.375);
        assert_eq!(point.latitude(), 20.375);
        assert_eq!(point.longitude(), 2.775);
    }

    #[test]
    fn test_lat_lng_point_conversion() {
        let lat_lng = LatLng::new(47.365562, 8.524813);
        let point: Point<f64> = lat_lng.into();
        assert_eq!(point.x(), 8.524813);
        assert_eq!(LatLng::from(point), lat_lng);
    }

    #[test]
    fn test_lat_lng_serde() -> Result<(), serde_json::Error> {
        let lat_lng = LatLng::new(-41.2730625, 174.7859375);
        let json = serde_json::to_string(&lat_lng)?;
        assert_eq!(json, r#"{"latitude":-41.2730625,"longitude":174.7859375}"#);
        let back: LatLng = serde_json::from_str(&json)?;
        assert_eq!(back, lat_lng);
        Ok(())
    }
}
