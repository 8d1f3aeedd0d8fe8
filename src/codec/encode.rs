use crate::core::alphabet::alphabet_char;
use crate::core::constants::{
    DEFAULT_CODE_LENGTH, ENCODING_BASE, GRID_COLUMNS, GRID_LAT_PRECISION_INVERSE, GRID_LAT_SCALE,
    GRID_LNG_PRECISION_INVERSE, GRID_LNG_SCALE, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX,
    MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION,
};
use crate::core::precision::{adjust_latitude, normalize_longitude};
use crate::util::coord::Coordinate;

const BASE: i64 = ENCODING_BASE as i64;
const ROWS: i64 = GRID_ROWS as i64;
const COLUMNS: i64 = GRID_COLUMNS as i64;

/// Encodes a location into a Plus Code with `code_length` significant digits.
///
/// The length is clamped to 2..=15, and odd lengths below 10 are rounded up
/// because pair digits come two at a time. Latitude is clamped to [-90, 90]
/// and longitude wrapped into [-180, 180). Codes shorter than 8 digits are
/// padded with `0` up to the separator.
///
/// # Process
///
/// 1. Both axes are shifted to be non-negative and scaled by the final grid
///    precision, then truncated to integers
/// 2. Grid digits (if requested) are peeled off least significant first,
///    otherwise the grid scale is divided out
/// 3. The five latitude/longitude pairs are peeled off the same way
/// 4. The separator is inserted and the code cut or padded to length
///
/// Only integer arithmetic happens after step 1, so no rounding error builds
/// up across digits.
///
/// # Example
/// ```
/// use pluscode_rs::{LatLng, encode};
///
/// let location = LatLng::new(20.375, 2.775);
/// assert_eq!(encode(&location, 6), "7FG49Q00+");
/// assert_eq!(encode(&location, 8), "7FG49QGG+");
/// assert_eq!(encode(&location, 4), "7FG40000+");
/// ```
pub fn encode(coord: &impl Coordinate, code_length: usize) -> String {
    let mut code_length = code_length.clamp(MIN_DIGIT_COUNT, MAX_DIGIT_COUNT);
    if code_length < PAIR_CODE_LENGTH && code_length % 2 == 1 {
        code_length += 1;
    }

    let latitude = adjust_latitude(coord.latitude(), code_length);
    let longitude = normalize_longitude(coord.longitude());

    let lat_inverse = GRID_LAT_PRECISION_INVERSE as f64;
    let lng_inverse = GRID_LNG_PRECISION_INVERSE as f64;
    let mut lat_val = (LATITUDE_MAX * lat_inverse + latitude * lat_inverse) as i64;
    let mut lng_val = (LONGITUDE_MAX * lng_inverse + longitude * lng_inverse) as i64;

    let mut digits = [PADDING_CHARACTER; MAX_DIGIT_COUNT];

    if code_length > PAIR_CODE_LENGTH {
        for slot in digits[PAIR_CODE_LENGTH..].iter_mut().rev() {
            let lat_digit = lat_val % ROWS;
            let lng_digit = lng_val % COLUMNS;
            *slot = alphabet_char((lat_digit * COLUMNS + lng_digit) as usize);
            lat_val /= ROWS;
            lng_val /= COLUMNS;
        }
    } else {
        lat_val /= GRID_LAT_SCALE;
        lng_val /= GRID_LNG_SCALE;
    }

    for pair in digits[..PAIR_CODE_LENGTH].chunks_exact_mut(2).rev() {
        pair[1] = alphabet_char((lng_val % BASE) as usize);
        pair[0] = alphabet_char((lat_val % BASE) as usize);
        lat_val /= BASE;
        lng_val /= BASE;
    }

    if code_length < SEPARATOR_POSITION {
        digits[code_length..SEPARATOR_POSITION].fill(PADDING_CHARACTER);
    }

    let kept = code_length.max(SEPARATOR_POSITION);
    let mut code = String::with_capacity(kept + 1);
    code.extend(&digits[..SEPARATOR_POSITION]);
    code.push(SEPARATOR);
    code.extend(&digits[SEPARATOR_POSITION..kept]);
    code
}

/// Encodes a location at the default precision of 10 digits (about 14 x 14 m).
///
/// # Example
/// ```
/// use pluscode_rs::{LatLng, encode_default};
///
/// assert_eq!(encode_default(&LatLng::new(47.365562, 8.524813)), "8FVC9G8F+6W");
/// ```
pub fn encode_default(coord: &impl Coordinate) -> String {
    encode(coord, DEFAULT_CODE_LENGTH)
}
