//! Custom error types for txconvert
//!
//! This module defines the error hierarchy for the converter using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A value did not match the expected format
    #[error("Format error: '{value}' does not match {expected}")]
    Format {
        value: String,
        expected: &'static str,
    },

    /// An expected column is absent from the source file
    #[error("Missing field '{field}' in row {row}")]
    MissingField { field: &'static str, row: usize },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV content
    #[error("CSV error: {0}")]
    Csv(String),
}

impl ConvertError {
    /// Create a format error for a date that is not month/day/2-digit-year
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::Format {
            value: value.into(),
            expected: "month/day/2-digit-year",
        }
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is a missing field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return Self::Io(err.to_string());
        }
        Self::Csv(err.to_string())
    }
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
