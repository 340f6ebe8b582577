use std::time::Duration;
use thiserror::Error;

/// Why a remote translation attempt was discarded. Never leaves the
/// translation client: every variant ends in the lookup fallback.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request timed out after {0:?}")]
    Timeout(Duration),
    #[error("translation transport error: {0}")]
    Transport(String),
    #[error("translation service returned HTTP {0}")]
    Status(u16),
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
}

/// Failures of the image-generation endpoint. These propagate to the
/// workflow controller, which decides what the user sees.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("image generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("image service rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("image request transport error: {0}")]
    Transport(String),
    #[error("malformed image response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, GenerationError::Timeout(_))
    }
}

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Client error: {0}")]
    ClientError(String),
    #[error("Logger error: {0}")]
    LoggerError(String),
    #[error("No generated image to save")]
    NoImage,
    #[error("Image payload is not valid base64: {0}")]
    DecodeError(#[from] base64::DecodeError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;
