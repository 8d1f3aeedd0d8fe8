use crate::codec::decode::decode_unchecked;
use crate::codec::validate::{code_length, is_full};
use crate::core::constants::PADDING_CHARACTER;
use crate::core::precision::{adjust_latitude, compute_precision_for_length, normalize_longitude};
use crate::util::coord::Coordinate;
use tracing::debug;

/// Fraction of a cell the reference may be from the code center. Half a cell
/// is the theoretical limit; 0.3 leaves room for the reference to move.
const SAFETY_FACTOR: f64 = 0.3;

/// Leading digit counts to try removing, most aggressive first.
const REMOVAL_LENGTHS: [usize; 3] = [8, 6, 4];

/// Removes as many leading digits from a full code as the reference location allows.
///
/// The shortened code can be turned back into `code` with
/// [`crate::recover_nearest`] and any reference close to the one used here.
/// Codes that are not full, or that are padded, are returned unchanged, as
/// are codes whose center is too far from the reference.
///
/// # Example
/// ```
/// use pluscode_rs::{LatLng, shorten};
///
/// let reference = LatLng::new(51.3701125, -1.217765625);
/// assert_eq!(shorten("9C3W9QCJ+2VX", &reference), "+2VX");
///
/// let further = LatLng::new(51.36, -1.2);
/// assert_eq!(shorten("9C3W9QCJ+2VX", &further), "9QCJ+2VX");
/// ```
pub fn shorten(code: &str, reference: &impl Coordinate) -> String {
    if !is_full(code) || code.contains(PADDING_CHARACTER) {
        return code.to_string();
    }

    let digits = code_length(code);
    let center = decode_unchecked(code).center();
    let latitude = adjust_latitude(reference.latitude(), digits);
    let longitude = normalize_longitude(reference.longitude());

    let range = (center.latitude - latitude)
        .abs()
        .max((center.longitude - longitude).abs());

    for removal_length in REMOVAL_LENGTHS {
        // Removing every digit before the separator would leave a bare "+".
        if removal_length >= digits {
            continue;
        }
        let area_edge = compute_precision_for_length(removal_length) * SAFETY_FACTOR;
        if range < area_edge {
            debug!(code, removal_length, range, "shortened plus code");
            return code[removal_length..].to_string();
        }
    }

    debug!(code, range, "reference too far to shorten plus code");
    code.to_string()
}
