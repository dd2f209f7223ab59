use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Compression failed: {0}")]
    Compression(#[source] io::Error),
}
