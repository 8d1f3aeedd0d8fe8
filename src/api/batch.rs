use crate::api::plus_code::PlusCode;
use crate::codec::encode;
use crate::util::coord::Coordinate;
use rayon::prelude::*;

/// Encodes every coordinate in parallel, keeping input order.
///
/// # Example
/// ```
/// use pluscode_rs::encode_many;
///
/// let points = vec![(8.524813, 47.365562), (-1.217765625, 51.3701125)];
/// let codes = encode_many(&points, 10);
/// assert_eq!(codes, vec!["8FVC9G8F+6W", "9C3W9QCJ+2V"]);
/// ```
pub fn encode_many<C: Coordinate + Sync>(coords: &[C], code_length: usize) -> Vec<String> {
    coords
        .par_iter()
        .map(|c: &C| encode(c, code_length))
        .collect()
}

/// Trait for encoding collections of coordinates to Plus Codes.
///
/// Implemented for `[C]` and `Vec<C>` where `C` is any [`Coordinate`].
pub trait CoordinatesToPlusCodes {
    /// Encodes each coordinate as a code string.
    fn to_plus_codes(&self, code_length: usize) -> Vec<String>;
    /// Encodes each coordinate as a [`PlusCode`].
    fn to_plus_code_values(&self, code_length: usize) -> Vec<PlusCode>;
}

impl<C: Coordinate + Sync> CoordinatesToPlusCodes for [C] {
    fn to_plus_codes(&self, code_length: usize) -> Vec<String> {
        encode_many(self, code_length)
    }

    fn to_plus_code_values(&self, code_length: usize) -> Vec<PlusCode> {
        self.par_iter()
            .map(|c: &C| PlusCode::from_coord(c, code_length))
            .collect()
    }
}

impl<C: Coordinate + Sync> CoordinatesToPlusCodes for Vec<C> {
    fn to_plus_codes(&self, code_length: usize) -> Vec<String> {
        self.as_slice().to_plus_codes(code_length)
    }

    fn to_plus_code_values(&self, code_length: usize) -> Vec<PlusCode> {
        self.as_slice().to_plus_code_values(code_length)
    }
}
