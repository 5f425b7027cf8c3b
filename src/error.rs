//! Crate-wide error type

use std::io;

use thiserror::Error;

/// Error type covering every failure mode of the assembly pipelines.
///
/// All errors are fatal to the current run: nothing is retried, and no
/// partial artifact is left behind.
#[derive(Debug, Error)]
pub enum PackError {
    /// Input path missing or of the wrong type, or an invalid numeric
    /// parameter (zero fps, zero frame width, strip narrower than one frame)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No qualifying images found, or zero frames derived from a strip
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Image decoding or encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// GIF encoding error
    #[error("GIF encoding error: {0}")]
    Encode(#[from] gif::EncodingError),
}
