pub mod coord;
pub mod error;

pub use coord::{Coordinate, LatLng};
pub use error::PlusCodeError;
