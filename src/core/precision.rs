use crate::core::constants::{
    ENCODING_BASE, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    SEPARATOR,
};

/// Height (and, up to ten digits, width) in degrees of the area covered by a
/// code with `code_length` significant digits.
///
/// Codes longer than ten digits refine latitude by a factor of five per digit.
///
/// # Example
/// ```
/// use pluscode_rs::compute_precision_for_length;
///
/// assert_eq!(compute_precision_for_length(2), 20.0);
/// assert_eq!(compute_precision_for_length(4), 1.0);
/// ```
pub fn compute_precision_for_length(code_length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        // Integer division truncates toward zero, so odd lengths share the
        // precision of the next shorter even length.
        let exponent = (code_length as i32) / -2 + 2;
        return base.powi(exponent);
    }
    base.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

/// Clamps a latitude to [-90, 90].
///
/// A latitude of exactly 90 is moved half a cell south so that it falls inside
/// the northernmost row of cells for `code_length`.
pub fn adjust_latitude(latitude: f64, code_length: usize) -> f64 {
    let latitude = latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX);
    if latitude < LATITUDE_MAX {
        return latitude;
    }
    latitude - compute_precision_for_length(code_length) / 2.0
}

/// Wraps a longitude into [-180, 180).
///
/// Non-finite input cannot be wrapped and comes back as NaN.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return f64::NAN;
    }
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid may round up to the divisor itself.
    if wrapped >= LONGITUDE_MAX {
        -LONGITUDE_MAX
    } else {
        wrapped
    }
}

/// Removes separators and drops everything from the first padding character on.
pub fn clean_code(code: &str) -> String {
    let mut cleaned: String = code.chars().filter(|&c| c != SEPARATOR).collect();
    if let Some(idx) = cleaned.find(PADDING_CHARACTER) {
        cleaned.truncate(idx);
    }
    cleaned
}
