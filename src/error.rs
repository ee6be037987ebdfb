//! Error handling for LibreLink export conversion.
//!
//! Provides error types with context for configuration validation,
//! header resolution, and per-row data conversion failures. Every variant
//! is fatal to the run; unrecognised record types are filtered, not errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Export file not found at path: {path}")]
    ExportNotFound { path: PathBuf },

    #[error("Export has no header row (expected title on line 1 and headers on line 2)")]
    MissingHeaderRow,

    #[error("Required columns not found in header row: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Line {line}: no value in column '{column}'")]
    MissingField { line: usize, column: String },

    #[error("Line {line}: invalid glucose value '{value}'")]
    InvalidGlucoseValue { line: usize, value: String },

    #[error("Line {line}: invalid device timestamp '{value}' - {reason}")]
    InvalidTimestamp {
        line: usize,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error was raised before any row data was touched
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
