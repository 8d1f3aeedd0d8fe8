mod decode;
mod encode;
mod recover;
mod shorten;
mod validate;

pub use decode::decode;
pub use encode::{encode, encode_default};
pub use recover::recover_nearest;
pub use shorten::shorten;
pub use validate::{code_length, is_full, is_short, is_valid};
