pub mod alphabet;
pub mod area;
pub mod constants;
pub mod precision;

pub use alphabet::alphabet_position;
pub use area::CodeArea;
pub use constants::{
    ALPHABET, DEFAULT_CODE_LENGTH, ENCODING_BASE, GRID_CODE_LENGTH, GRID_COLUMNS, GRID_ROWS,
    MAX_DIGIT_COUNT, MIN_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION,
};
pub use precision::{adjust_latitude, clean_code, compute_precision_for_length, normalize_longitude};
