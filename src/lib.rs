/// Binary codec: tagged framing, compression policy, encode/decode.
pub mod codec;
/// Codec configuration (compression threshold and depth range).
pub mod config;
/// Common error types: encoding, decoding, text parsing.
pub mod error;
/// JSON text codec: recursive-descent parser and printer.
pub mod text;
/// The in-memory value model (`Value` and friends).
pub mod value;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Binary encode/decode entry points.
pub use codec::{decode_value, encode_value, read_value, write_value};
/// Codec configuration.
pub use config::CodecConfig;
/// Operation errors.
pub use error::{DecodeError, EncodeError, ParseError};
/// Text codec entry points.
pub use text::{parse_value, print_value};
/// Value model.
pub use value::{Value, ValueKind};
