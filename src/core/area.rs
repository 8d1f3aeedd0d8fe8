use crate::core::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::util::coord::{Coordinate, LatLng};
use crate::util::error::PlusCodeError;
use geo_types::{Point, Polygon, Rect, coord};
use serde::Serialize;

/// The rectangle of the Earth's surface identified by a Plus Code.
///
/// Bounds are in decimal degrees. `code_length` is the number of significant
/// digits of the code that produced the area. A `CodeArea` is only created by
/// decoding and cannot be changed afterwards.
///
/// # Example
///
/// ```
/// use pluscode_rs::decode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let area = decode("7FG49Q00+")?;
/// assert_eq!(area.code_length(), 6);
/// assert!((area.latitude_lo() - 20.35).abs() < 1e-9);
/// assert!((area.longitude_hi() - 2.8).abs() < 1e-9);
///
/// let center = area.center();
/// assert!((center.latitude - 20.375).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            code_length,
        }
    }

    /// Southern edge.
    pub fn latitude_lo(&self) -> f64 {
        self.latitude_lo
    }

    /// Western edge.
    pub fn longitude_lo(&self) -> f64 {
        self.longitude_lo
    }

    /// Northern edge.
    pub fn latitude_hi(&self) -> f64 {
        self.latitude_hi
    }

    /// Eastern edge.
    pub fn longitude_hi(&self) -> f64 {
        self.longitude_hi
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the midpoint of the area.
    ///
    /// Each axis is capped at its maximum (90 / 180 degrees) so rounding can
    /// never push the center off the globe.
    pub fn center(&self) -> LatLng {
        let latitude =
            (self.latitude_lo + (self.latitude_hi - self.latitude_lo) / 2.0).min(LATITUDE_MAX);
        let longitude = (self.longitude_lo + (self.longitude_hi - self.longitude_lo) / 2.0)
            .min(LONGITUDE_MAX);
        LatLng::new(latitude, longitude)
    }

    /// Returns the center as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn center_point(&self) -> Point<f64> {
        self.center().to_point()
    }

    /// Returns `true` if the coordinate lies inside the area, edges included.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        (self.latitude_lo..=self.latitude_hi).contains(&coord.latitude())
            && (self.longitude_lo..=self.longitude_hi).contains(&coord.longitude())
    }

    /// Converts the area to a `geo_types::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude_lo, y: self.latitude_lo },
            coord! { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    /// Converts the area to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Returns the area outline as WKT, e.g. `POLYGON((...))`.
    pub fn to_wkt(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }

    /// Returns the area outline as a GeoJSON geometry object.
    pub fn to_geojson(&self) -> String {
        let polygon = self.to_polygon();
        geojson::Geometry::from(&polygon).to_string()
    }

    /// Serializes the bounds and code length as a JSON object.
    pub fn to_json(&self) -> Result<String, PlusCodeError> {
        Ok(serde_json::to_string(self)?)
    }
}
