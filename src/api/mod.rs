pub mod cell;
pub mod codec;
pub mod postcode;

pub use cell::PostcodeCell;
pub use codec::{CodecConfig, PostcodeCodec, decode, encode, validate};
pub use postcode::Postcode;
