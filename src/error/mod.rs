pub mod decode;
pub mod encode;
pub mod parser;

pub use decode::DecodeError;
pub use encode::EncodeError;
pub use parser::ParseError;
