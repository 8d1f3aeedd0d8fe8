use crate::codec::{
    code_length, decode, encode, is_full, is_short, is_valid, recover_nearest, shorten,
};
use crate::core::area::CodeArea;
use crate::util::coord::Coordinate;
use crate::util::error::PlusCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A syntactically valid Plus Code, full or short, stored upper-case.
///
/// `PlusCode` wraps the free functions of this crate for callers that want to
/// validate once and then pass codes around. It serializes as a plain string.
///
/// # Example
///
/// ```
/// use pluscode_rs::{LatLng, PlusCode};
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let code = PlusCode::from_coord(&LatLng::new(51.3701125, -1.217765625), 11);
/// assert_eq!(code.as_str(), "9C3W9QCJ+2VX");
///
/// let parsed: PlusCode = "9c3w9qcj+2vx".parse()?;
/// assert_eq!(parsed, code);
///
/// let area = code.decode()?;
/// assert_eq!(area.code_length(), 11);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlusCode(String);

impl PlusCode {
    /// Encodes a location with `code_length` digits. See [`crate::encode`].
    pub fn from_coord(coord: &impl Coordinate, code_length: usize) -> Self {
        Self(encode(coord, code_length))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_short(&self) -> bool {
        is_short(&self.0)
    }

    pub fn is_full(&self) -> bool {
        is_full(&self.0)
    }

    /// Number of significant digits, ignoring separator and padding.
    pub fn code_length(&self) -> usize {
        code_length(&self.0)
    }

    /// Decodes the code. Short codes must be recovered first.
    pub fn decode(&self) -> Result<CodeArea, PlusCodeError> {
        decode(&self.0)
    }

    /// Shortens the code relative to `reference`. See [`crate::shorten`].
    pub fn shorten(&self, reference: &impl Coordinate) -> Self {
        Self(shorten(&self.0, reference))
    }

    /// Recovers the nearest full code to `reference`. Full codes are returned as they are.
    pub fn recover_nearest(&self, reference: &impl Coordinate) -> Self {
        Self(recover_nearest(&self.0, reference))
    }
}

impl FromStr for PlusCode {
    type Err = PlusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid(s) {
            return Err(PlusCodeError::InvalidCode(s.to_string()));
        }
        Ok(Self(s.to_uppercase()))
    }
}

impl TryFrom<String> for PlusCode {
    type Error = PlusCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlusCode> for String {
    fn from(code: PlusCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PlusCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
