use thiserror::Error;

/// Main error type for the caption server
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Invalid YouTube URL.")]
    InvalidUrl,

    #[error("Failed to fetch transcript: {0}")]
    Fetch(String),

    #[error("Failed to initialize transcript client: {0}")]
    Client(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CaptionError>;
