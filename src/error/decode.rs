use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown tag byte: {0:#04x}")]
    UnknownTag(u8),

    #[error("Unknown framing flag: {0:#04x}")]
    UnknownFlag(u8),

    #[error("Declared length {declared} exceeds remaining input ({remaining} bytes)")]
    LengthOverflow { declared: u64, remaining: u64 },

    #[error("Decompression failed: {0}")]
    Decompression(#[source] io::Error),

    #[error("Invalid UTF-8 in string payload: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
