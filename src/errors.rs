//! Unified application error type.
//! The collector, the log store and the CLI handlers all return AppError so
//! that `main` can turn any failure into a status line and an exit code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Network
    // ---------------------------
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    // ---------------------------
    // Response decoding
    // ---------------------------
    #[error("Response from {url} is not valid JSON ({reason}). Body: {snippet}")]
    Parse {
        url: String,
        reason: String,
        snippet: String,
    },

    #[error("Key '{key}' not found in response. Body: {snippet}")]
    Schema { key: String, snippet: String },

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Process exit code reported by `main` for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Transport { .. } => 2,
            AppError::Parse { .. } => 3,
            AppError::Schema { .. } => 4,
            AppError::Io(_) | AppError::Csv(_) => 5,
            AppError::Config(_) => 6,
            AppError::Other(_) => 1,
        }
    }

    /// Short label used in per-room status lines.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Transport { .. } => "transport error",
            AppError::Parse { .. } => "parse error",
            AppError::Schema { .. } => "schema error",
            AppError::Io(_) | AppError::Csv(_) => "I/O failure",
            AppError::Config(_) => "configuration error",
            AppError::Other(_) => "error",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
