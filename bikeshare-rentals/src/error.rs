/// Error types for the rentals library
use thiserror::Error;

/// Main error type for rental dataset operations
#[derive(Error, Debug)]
pub enum RentalError {
    /// Failed to open or read a dataset file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the CSV header
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),
}

/// Type alias for Results using RentalError
pub type Result<T> = std::result::Result<T, RentalError>;
