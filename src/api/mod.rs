pub mod batch;
pub mod geolocation;
pub mod plus_code;

pub use batch::{CoordinatesToPlusCodes, encode_many};
pub use geolocation::{Geolocation, NOT_VALID};
pub use plus_code::PlusCode;
