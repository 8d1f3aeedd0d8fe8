//! # pluscode-rs
//!
//! Encode latitude/longitude pairs as Plus Codes, decode them back to areas,
//! and shorten or recover codes relative to a nearby reference location.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Encoding and Decoding
//!
//! ```
//! use pluscode_rs::{LatLng, decode, encode};
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let code = encode(&LatLng::new(47.365562, 8.524813), 10);
//! assert_eq!(code, "8FVC9G8F+6W");
//!
//! let area = decode(&code)?;
//! println!("{}", area.to_wkt());
//! # Ok(())
//! # }
//! ```
//!
//! Tuples are read as `(longitude, latitude)` and `geo_types::Point` as `x/y`:
//!
//! ```
//! use pluscode_rs::encode;
//! use geo_types::point;
//!
//! assert_eq!(encode(&(8.524813, 47.365562), 10), "8FVC9G8F+6W");
//! assert_eq!(encode(&point! { x: 8.524813, y: 47.365562 }, 10), "8FVC9G8F+6W");
//! ```
//!
//! ### 2. `PlusCode` - Validated Codes
//!
//! ```
//! use pluscode_rs::{LatLng, PlusCode};
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let reference = LatLng::new(51.3701125, -1.217765625);
//! let code: PlusCode = "9C3W9QCJ+2VX".parse()?;
//!
//! let short = code.shorten(&reference);
//! assert_eq!(short.as_str(), "+2VX");
//! assert_eq!(short.recover_nearest(&reference), code);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `encode_many` - Batches
//!
//! ```
//! use pluscode_rs::{CoordinatesToPlusCodes, LatLng, encode_many};
//!
//! let coords = vec![LatLng::new(20.375, 2.775), LatLng::new(47.365562, 8.524813)];
//! assert_eq!(encode_many(&coords, 6), vec!["7FG49Q00+", "8FVC9G00+"]);
//! assert_eq!(coords.to_plus_codes(4), vec!["7FG40000+", "8FVC0000+"]);
//! ```
//!

pub mod api;
pub mod codec;
pub mod core;
pub mod util;

pub use api::{CoordinatesToPlusCodes, Geolocation, NOT_VALID, PlusCode, encode_many};
pub use codec::{
    code_length, decode, encode, encode_default, is_full, is_short, is_valid, recover_nearest,
    shorten,
};
pub use core::{
    ALPHABET, CodeArea, DEFAULT_CODE_LENGTH, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_ROWS,
    MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION, alphabet_position, compute_precision_for_length,
};
pub use util::{Coordinate, LatLng, PlusCodeError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), PlusCodeError> {
        let location = LatLng::new(-41.2730625, 174.7859375);
        let code = encode(&location, 11);

        assert!(is_valid(&code));
        assert!(is_full(&code));
        assert_eq!(code_length(&code), 11);

        let area = decode(&code)?;
        assert_eq!(area.code_length(), 11);
        assert!((area.center().latitude - location.latitude).abs() < area_height(&area));

        let short = shorten(&code, &location);
        assert!(is_short(&short));
        assert_eq!(recover_nearest(&short, &location), code);
        Ok(())
    }

    fn area_height(area: &CodeArea) -> f64 {
        area.latitude_hi() - area.latitude_lo()
    }

    #[test]
    fn test_using_geo_types() -> Result<(), PlusCodeError> {
        let pt = point! { x: 2.775, y: 20.375 };
        let area = decode(&encode(&pt, 6))?;

        let polygon = area.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        assert!(area.contains(&pt));
        Ok(())
    }

    #[test]
    fn test_plus_code_and_free_functions_agree() -> Result<(), PlusCodeError> {
        let location = LatLng::new(37.421998, -122.084);
        let code = PlusCode::from_coord(&location, DEFAULT_CODE_LENGTH);

        assert_eq!(code.as_str(), encode_default(&location));
        assert_eq!(code.decode()?, decode(code.as_str())?);
        assert_eq!(
            Geolocation::new(location.latitude, location.longitude).plus_code(),
            code.as_str()
        );
        Ok(())
    }

    #[test]
    fn test_alphabet_and_precision() {
        assert_eq!(alphabet_position('2'), Some(0));
        assert_eq!(alphabet_position('x'), Some(19));
        assert_eq!(alphabet_position('A'), None);
        assert_eq!(ALPHABET.len(), 20);
        assert!((compute_precision_for_length(10) - 0.000125).abs() < 1e-12);
    }
}
