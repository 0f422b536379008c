pub mod codec;
pub mod resolve;
