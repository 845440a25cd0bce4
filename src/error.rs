// src/error.rs

//! Unified error handling for the ingest application.

use std::fmt;

use thiserror::Error;

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Non-success status retrieving a remote archive
    #[error("Download of {url} failed with status {status}")]
    Download { url: String, status: u16 },

    /// Malformed or truncated archive
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Document store failure
    #[error("Store error for {accession}: {message}")]
    Store { accession: String, message: String },
}

impl AppError {
    /// Create a download error for a non-success response.
    pub fn download(url: impl Into<String>, status: u16) -> Self {
        Self::Download {
            url: url.into(),
            status,
        }
    }

    /// Create an extraction error.
    pub fn extraction(message: impl fmt::Display) -> Self {
        Self::Extraction(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a store error scoped to a single accession.
    pub fn store(accession: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Store {
            accession: accession.into(),
            message: message.to_string(),
        }
    }
}
