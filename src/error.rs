//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for configuration and input validation, and a
//! catch-all for errors surfaced by the underlying resampling collaborator.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rounding multiple {value} is not one of the allowed set {allowed:?}")]
    InvalidMultiple { value: u32, allowed: &'static [u32] },

    #[error("Input batch is empty")]
    EmptyBatch,

    #[error("Source image has zero extent: {width}x{height}")]
    ZeroSizeImage { width: usize, height: usize },

    #[error("Malformed pixel buffer: {detail}")]
    InvalidShape { detail: String },

    #[error("Image codec error: {0}")]
    Image(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
