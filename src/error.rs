//! Error types shared across the crate.

use thiserror::Error;

use crate::cli::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Requested minimum entropy was zero, negative, NaN or infinite.
    #[error("Invalid entropy request: {0} (expected a positive number of bits)")]
    InvalidEntropyRequest(f64),
    /// Exact length above `pass::MAX_LENGTH`.
    #[error("Invalid password length: {0}")]
    InvalidLength(usize),
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(#[source] std::io::Error),
    #[error("Invalid symbol set: {0}")]
    InvalidSymbols(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Settings file error: {0}")]
    Settings(#[source] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
