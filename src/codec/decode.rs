use crate::codec::validate::{is_full, is_short};
use crate::core::alphabet::alphabet_position;
use crate::core::area::CodeArea;
use crate::core::constants::{
    ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_LAT_PRECISION_INVERSE,
    GRID_LNG_PRECISION_INVERSE, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT,
    PAIR_CODE_LENGTH, PAIR_PRECISION_INVERSE,
};
use crate::core::precision::clean_code;
use crate::util::error::PlusCodeError;

const BASE: i64 = ENCODING_BASE as i64;
const ROWS: i64 = GRID_ROWS as i64;
const COLUMNS: i64 = GRID_COLUMNS as i64;

/// Decodes a full Plus Code into the area it identifies.
///
/// # Errors
///
/// - [`PlusCodeError::InvalidCode`] - `code` is not a valid Plus Code, or its
///   leading digits lie off the globe
/// - [`PlusCodeError::NotFullCode`] - `code` is a short code; use
///   [`crate::recover_nearest`] with a reference location first
///
/// # Example
/// ```
/// use pluscode_rs::{PlusCodeError, decode};
///
/// # fn main() -> Result<(), PlusCodeError> {
/// let area = decode("8FVC9G8F+6W")?;
/// assert_eq!(area.code_length(), 10);
/// assert!((area.latitude_lo() - 47.3655).abs() < 1e-9);
/// assert!((area.longitude_lo() - 8.52475).abs() < 1e-9);
///
/// assert!(matches!(decode("9G8F+6W"), Err(PlusCodeError::NotFullCode(_))));
/// assert!(matches!(decode("hello"), Err(PlusCodeError::InvalidCode(_))));
/// # Ok(())
/// # }
/// ```
pub fn decode(code: &str) -> Result<CodeArea, PlusCodeError> {
    if is_short(code) {
        return Err(PlusCodeError::NotFullCode(code.to_string()));
    }
    if !is_full(code) {
        return Err(PlusCodeError::InvalidCode(code.to_string()));
    }
    Ok(decode_unchecked(code))
}

/// Decodes without validating. Callers must have checked the code is full.
///
/// Characters outside the alphabet count as zero, so malformed input gives a
/// meaningless but deterministic area instead of a panic.
pub(crate) fn decode_unchecked(code: &str) -> CodeArea {
    let digits: Vec<i64> = clean_code(code)
        .chars()
        .take(MAX_DIGIT_COUNT)
        .map(|c| alphabet_position(c).map_or(0, |value| value as i64))
        .collect();

    // Everything is accumulated as integers and only converted at the end.
    let mut normal_lat = -(LATITUDE_MAX as i64) * PAIR_PRECISION_INVERSE;
    let mut normal_lng = -(LONGITUDE_MAX as i64) * PAIR_PRECISION_INVERSE;
    let mut extra_lat = 0_i64;
    let mut extra_lng = 0_i64;

    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    let mut place_value = BASE.pow((PAIR_CODE_LENGTH / 2 - 1) as u32);
    for i in (0..pair_digits.saturating_sub(1)).step_by(2) {
        normal_lat += digits[i] * place_value;
        normal_lng += digits[i + 1] * place_value;
        if i + 2 < pair_digits {
            place_value /= BASE;
        }
    }

    let mut lat_precision = place_value as f64 / PAIR_PRECISION_INVERSE as f64;
    let mut lng_precision = lat_precision;

    if digits.len() > PAIR_CODE_LENGTH {
        let mut row_place_value = ROWS.pow((GRID_CODE_LENGTH - 1) as u32);
        let mut col_place_value = COLUMNS.pow((GRID_CODE_LENGTH - 1) as u32);
        let grid_digits = &digits[PAIR_CODE_LENGTH..];
        for (i, &value) in grid_digits.iter().enumerate() {
            extra_lat += (value / COLUMNS) * row_place_value;
            extra_lng += (value % COLUMNS) * col_place_value;
            if i + 1 < grid_digits.len() {
                row_place_value /= ROWS;
                col_place_value /= COLUMNS;
            }
        }
        lat_precision = row_place_value as f64 / GRID_LAT_PRECISION_INVERSE as f64;
        lng_precision = col_place_value as f64 / GRID_LNG_PRECISION_INVERSE as f64;
    }

    let lat = normal_lat as f64 / PAIR_PRECISION_INVERSE as f64
        + extra_lat as f64 / GRID_LAT_PRECISION_INVERSE as f64;
    let lng = normal_lng as f64 / PAIR_PRECISION_INVERSE as f64
        + extra_lng as f64 / GRID_LNG_PRECISION_INVERSE as f64;

    CodeArea::new(
        round_to_14_places(lat),
        round_to_14_places(lng),
        round_to_14_places(lat + lat_precision),
        round_to_14_places(lng + lng_precision),
        digits.len(),
    )
}

// Drops float noise left over from converting the integer accumulators.
fn round_to_14_places(value: f64) -> f64 {
    (value * 1e14).round() / 1e14
}
