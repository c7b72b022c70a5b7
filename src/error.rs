use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("not enough arguments (input file, output file)")]
    InsufficientArguments,

    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("ROM too large: {rom_len} bytes (maximum {max})")]
    CapacityExceeded { rom_len: usize, max: usize },

    #[error("Invalid hex token {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },
}
