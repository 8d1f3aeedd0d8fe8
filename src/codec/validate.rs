use crate::core::alphabet::alphabet_position;
use crate::core::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
};
use crate::core::precision::clean_code;

/// Checks whether `code` is a syntactically valid Plus Code, full or short.
///
/// A valid code has exactly one separator at an even index no later than 8,
/// uses only alphabet characters (either case), padding and the separator,
/// and never has a single character after the separator. Padding is only
/// allowed in full codes: it must start at a non-zero even index, run up to
/// the separator, and nothing may follow the separator.
///
/// # Example
/// ```
/// use pluscode_rs::is_valid;
///
/// assert!(is_valid("8FVC9G8F+6W"));
/// assert!(is_valid("8FVC0000+"));
/// assert!(is_valid("9G8F+6W"));
/// assert!(!is_valid("8FVC9G8F+6"));
/// assert!(!is_valid("7FG49Q0+0"));
/// ```
pub fn is_valid(code: &str) -> bool {
    if code.is_empty() {
        return false;
    }
    let legal = code
        .chars()
        .all(|c| c == SEPARATOR || c == PADDING_CHARACTER || alphabet_position(c).is_some());
    if !legal {
        return false;
    }
    // Only ASCII from here on, so byte offsets are character offsets.

    let Some(separator) = code.find(SEPARATOR) else {
        return false;
    };
    if code.rfind(SEPARATOR) != Some(separator) {
        return false;
    }
    if code.len() == 1 {
        return false;
    }
    if separator > SEPARATOR_POSITION || separator % 2 == 1 {
        return false;
    }

    if let Some(padding_start) = code.find(PADDING_CHARACTER) {
        if separator < SEPARATOR_POSITION {
            return false;
        }
        if padding_start == 0 || padding_start % 2 == 1 {
            return false;
        }
        if code.len() > separator + 1 {
            return false;
        }
        if code[padding_start..separator]
            .chars()
            .any(|c| c != PADDING_CHARACTER)
        {
            return false;
        }
    }

    code.len() - separator - 1 != 1
}

/// Checks whether `code` is a valid short code (leading digits omitted).
pub fn is_short(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR).is_some_and(|idx| idx < SEPARATOR_POSITION)
}

/// Checks whether `code` is a valid full code that decodes to a point on the globe.
///
/// The first two digits are range-checked: a first latitude digit of 9 or
/// more would place the area at or beyond 90 degrees, a first longitude digit
/// of 18 or more at or beyond 180 degrees.
///
/// # Example
/// ```
/// use pluscode_rs::{is_full, is_short};
///
/// assert!(is_full("8FVC9G8F+6W"));
/// assert!(!is_full("9G8F+6W"));
/// assert!(is_short("9G8F+6W"));
/// // Valid syntax, but the first digit is past the north pole.
/// assert!(!is_full("FF000000+"));
/// ```
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    let mut chars = code.chars();
    let first_lat_ok = chars
        .next()
        .and_then(alphabet_position)
        .is_some_and(|value| ((value * ENCODING_BASE) as f64) < LATITUDE_MAX * 2.0);
    if !first_lat_ok {
        return false;
    }
    match chars.next().and_then(alphabet_position) {
        Some(value) => ((value * ENCODING_BASE) as f64) < LONGITUDE_MAX * 2.0,
        None => true,
    }
}

/// Number of significant digits in `code`, ignoring the separator and padding.
///
/// # Example
/// ```
/// use pluscode_rs::code_length;
///
/// assert_eq!(code_length("8FVC9G8F+6W"), 10);
/// assert_eq!(code_length("8FVC0000+"), 4);
/// assert_eq!(code_length("9G8F+6W"), 6);
/// ```
pub fn code_length(code: &str) -> usize {
    clean_code(code).chars().count()
}
