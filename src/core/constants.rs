/// Digits of the encoding, in value order.
///
/// Vowels are left out so codes never spell words, and characters that are
/// easily confused with each other (`0`/`O`, `1`/`I`/`L`) are avoided.
pub const ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Number of digits in the alphabet.
pub const ENCODING_BASE: usize = 20;

/// Separates the first eight digits from the rest of the code.
pub const SEPARATOR: char = '+';

/// Index of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Replaces omitted digits in full codes shorter than eight digits.
pub const PADDING_CHARACTER: char = '0';

/// Maximum number of significant digits in a code. Roughly 1 x 0.5 cm.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Minimum number of significant digits in a code.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Digits encoded as interleaved latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Digits encoded on the 4 x 5 refinement grid.
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Columns (longitude steps) of the refinement grid.
pub const GRID_COLUMNS: usize = 4;

/// Rows (latitude steps) of the refinement grid.
pub const GRID_ROWS: usize = ENCODING_BASE / GRID_COLUMNS;

/// Latitude bounds are -90 and +90, shifted to 0..180 while encoding.
pub const LATITUDE_MAX: f64 = 90.0;

/// Longitude bounds are -180 and +180, shifted to 0..360 while encoding.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Inverse of the precision of the last pair digit, in degrees (20^3).
pub const PAIR_PRECISION_INVERSE: i64 = (ENCODING_BASE as i64).pow(3);

/// Latitude scale contributed by the full grid section (5^5).
pub const GRID_LAT_SCALE: i64 = (GRID_ROWS as i64).pow(GRID_CODE_LENGTH as u32);

/// Longitude scale contributed by the full grid section (4^5).
pub const GRID_LNG_SCALE: i64 = (GRID_COLUMNS as i64).pow(GRID_CODE_LENGTH as u32);

/// Inverse of the latitude precision of the last grid digit, in degrees.
pub const GRID_LAT_PRECISION_INVERSE: i64 = PAIR_PRECISION_INVERSE * GRID_LAT_SCALE;

/// Inverse of the longitude precision of the last grid digit, in degrees.
pub const GRID_LNG_PRECISION_INVERSE: i64 = PAIR_PRECISION_INVERSE * GRID_LNG_SCALE;

/// Default number of digits produced by [`crate::encode_default`].
pub const DEFAULT_CODE_LENGTH: usize = PAIR_CODE_LENGTH;
