use std::io;
use thiserror::Error;

/// Custom error type for the pimon application
#[derive(Error, Debug)]
pub enum PimonError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("History store error: {0}")]
    History(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the pimon application
pub type Result<T> = std::result::Result<T, PimonError>;

impl PimonError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PimonError::Config(msg.into())
    }

    /// Create a history store error
    pub fn history<S: Into<String>>(msg: S) -> Self {
        PimonError::History(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PimonError::Other(msg.into())
    }
}
