//! Centralized error handling for sentiment-hue.
//!
//! Resolving a color never fails; these errors only come from the outer
//! surfaces (command line, HTTP server, file output and serialization).

use thiserror::Error;

/// Unified error type for the sentiment-hue application.
#[derive(Error, Debug)]
pub enum SentimentHueError {
    /// Server/HTTP related errors
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// CLI/argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Server/HTTP specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// Failed to bind to address
    #[error("Failed to bind to address: {0}")]
    BindError(String),

    /// Server stopped with an error
    #[error("Failed to start server: {0}")]
    StartError(String),

    /// Invalid address format
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),
}

/// CLI specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// `--output` names a single file, so only one label may be rendered into it
    #[error("--output requires exactly one label, got {0}")]
    OutputRequiresSingleLabel(usize),

    #[error("No sentiment labels provided")]
    NoLabels,
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, SentimentHueError>;
