//! Error types for the Minnesota lakes data library
use thiserror::Error;

/// Main error type for lake data operations
#[derive(Error, Debug)]
pub enum LakeDataError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Type alias for Results using LakeDataError
pub type Result<T> = std::result::Result<T, LakeDataError>;
