use crate::codec::decode::decode_unchecked;
use crate::codec::encode::{encode, encode_default};
use crate::codec::validate::{code_length, is_short};
use crate::core::constants::{ENCODING_BASE, LATITUDE_MAX, SEPARATOR, SEPARATOR_POSITION};
use crate::core::precision::{adjust_latitude, normalize_longitude};
use crate::util::coord::{Coordinate, LatLng};
use tracing::{debug, trace};

/// Recovers the full code nearest to `reference` from a short code.
///
/// The missing leading digits are taken from the reference location. If that
/// puts the result more than half a cell away from the reference, the result
/// is moved one cell towards it, except where that would cross a pole.
/// Longitude is moved without a bound because it wraps on re-encoding.
///
/// Codes that are not short (full codes, or strings that are not codes at
/// all) are returned upper-cased and otherwise unchanged.
///
/// # Example
/// ```
/// use pluscode_rs::{LatLng, recover_nearest};
///
/// let reference = LatLng::new(51.3708675, -1.217765625);
/// assert_eq!(recover_nearest("9QCJ+2VX", &reference), "9C3W9QCJ+2VX");
/// assert_eq!(recover_nearest("+2VX", &reference), "9C3W9QCJ+2VX");
/// assert_eq!(recover_nearest("9c3w9qcj+2vx", &reference), "9C3W9QCJ+2VX");
/// ```
pub fn recover_nearest(short_code: &str, reference: &impl Coordinate) -> String {
    if !is_short(short_code) {
        return short_code.to_uppercase();
    }
    let Some(separator) = short_code.find(SEPARATOR) else {
        return short_code.to_uppercase();
    };

    let digits = code_length(short_code);
    let latitude = adjust_latitude(reference.latitude(), digits);
    let longitude = normalize_longitude(reference.longitude());

    let padding_length = SEPARATOR_POSITION - separator;
    // Size in degrees of the cell identified by the recovered digits.
    let resolution = (ENCODING_BASE as f64).powf(2.0 - padding_length as f64 / 2.0);
    let half_resolution = resolution / 2.0;

    let prefix = encode_default(&LatLng::new(latitude, longitude));
    let candidate = format!("{}{}", &prefix[..padding_length], short_code);
    let mut center = decode_unchecked(&candidate).center();
    trace!(%candidate, ?center, resolution, "recovering plus code");

    if latitude + half_resolution < center.latitude
        && center.latitude - resolution > -LATITUDE_MAX
    {
        debug!(short_code, "moving recovered code one cell south");
        center.latitude -= resolution;
    } else if latitude - half_resolution > center.latitude
        && center.latitude + resolution < LATITUDE_MAX
    {
        debug!(short_code, "moving recovered code one cell north");
        center.latitude += resolution;
    }

    if longitude + half_resolution < center.longitude {
        debug!(short_code, "moving recovered code one cell west");
        center.longitude -= resolution;
    } else if longitude - half_resolution > center.longitude {
        debug!(short_code, "moving recovered code one cell east");
        center.longitude += resolution;
    }

    encode(&center, digits + padding_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::shorten::shorten;

    #[test]
    fn test_recover_from_each_short_length() {
        let reference = LatLng::new(51.3708675, -1.217765625);
        for short in ["9QCJ+2VX", "CJ+2VX", "+2VX"] {
            assert_eq!(recover_nearest(short, &reference), "9C3W9QCJ+2VX");
        }
    }

    #[test]
    fn test_full_and_invalid_codes_are_upper_cased() {
        let reference = LatLng::new(0.0, 0.0);
        assert_eq!(recover_nearest("9c3w9qcj+2vx", &reference), "9C3W9QCJ+2VX");
        assert_eq!(recover_nearest("not valid", &reference), "NOT VALID");
    }

    #[test]
    fn test_recover_moves_south_across_cell_edge() {
        // The reference is just north of the cell boundary the code sits below.
        let reference = LatLng::new(51.3726, -1.2178);
        let short = shorten("9C3W9QCJ+XV", &reference);
        assert_eq!(short, "+XV");
        assert_eq!(recover_nearest(&short, &reference), "9C3W9QCJ+XV");
    }

    #[test]
    fn test_recover_moves_north_across_cell_edge() {
        let reference = LatLng::new(51.3724, -1.2178);
        let short = shorten("9C3W9QFJ+2V", &reference);
        assert_eq!(short, "+2V");
        assert_eq!(recover_nearest(&short, &reference), "9C3W9QFJ+2V");
    }

    #[test]
    fn test_recover_across_antimeridian() {
        assert_eq!(
            recover_nearest("2X2X+2X", &LatLng::new(10.0, -179.99995)),
            "7V2X2X2X+2X"
        );
        assert_eq!(
            recover_nearest("+22", &LatLng::new(10.0, 179.99995)),
            "72222222+22"
        );
    }

    #[test]
    fn test_recover_does_not_cross_pole() {
        assert_eq!(
            recover_nearest("2222+22", &LatLng::new(89.6, 0.0)),
            "CFX22222+22"
        );
        assert_eq!(
            recover_nearest("XXXX+", &LatLng::new(-89.9, 179.9)),
            "2V2XXXXX+"
        );
    }
}
