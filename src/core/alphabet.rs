use crate::core::constants::{ALPHABET, ENCODING_BASE};

/// Alphabet positions of `C` through `X`. `None` marks letters that are not digits.
const LETTER_POSITIONS: [Option<usize>; ('X' as usize) - ('C' as usize) + 1] = [
    Some(8),  // C
    None,     // D
    None,     // E
    Some(9),  // F
    Some(10), // G
    Some(11), // H
    None,     // I
    Some(12), // J
    None,     // K
    None,     // L
    Some(13), // M
    None,     // N
    None,     // O
    Some(14), // P
    Some(15), // Q
    Some(16), // R
    None,     // S
    None,     // T
    None,     // U
    Some(17), // V
    Some(18), // W
    Some(19), // X
];

/// Returns the value of `c` as a digit, or `None` if it is not part of the alphabet.
///
/// Letters are matched case-insensitively.
///
/// # Example
/// ```
/// use pluscode_rs::alphabet_position;
///
/// assert_eq!(alphabet_position('2'), Some(0));
/// assert_eq!(alphabet_position('x'), Some(19));
/// assert_eq!(alphabet_position('A'), None);
/// ```
pub fn alphabet_position(c: char) -> Option<usize> {
    match c {
        'C'..='X' => LETTER_POSITIONS[c as usize - 'C' as usize],
        'c'..='x' => LETTER_POSITIONS[c as usize - 'c' as usize],
        '2'..='9' => Some(c as usize - '2' as usize),
        _ => None,
    }
}

/// Returns the digit character for `value`, wrapping values past the base.
pub(crate) fn alphabet_char(value: usize) -> char {
    ALPHABET[value % ENCODING_BASE] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_match_alphabet() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            let c = b as char;
            assert_eq!(alphabet_position(c), Some(i));
            assert_eq!(alphabet_position(c.to_ascii_lowercase()), Some(i));
            assert_eq!(alphabet_char(i), c);
        }
    }

    #[test]
    fn test_rejects_non_digits() {
        for c in ['0', '1', 'A', 'B', 'D', 'I', 'O', 'Y', 'Z', '+', ' ', 'é'] {
            assert_eq!(alphabet_position(c), None, "{c:?} should not be a digit");
        }
    }
}
