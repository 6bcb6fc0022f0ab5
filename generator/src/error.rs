//! Error types for the example data generator.
//!
//! - [`DatasetError`] - Malformed literal datasets or header
//! - [`WriteError`] - Failures while emitting the delimited file
//! - [`ConfigError`] - Invalid override values
//! - [`GenerateError`] - Top-level errors returned to the CLI
//!
//! Conversion is automatic via `From`, so `?` works across boundaries.

use thiserror::Error;

// =============================================================================
// Dataset Errors
// =============================================================================

/// Errors while building datasets or checking them against the header.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    /// A record does not have as many cells as its dataset has columns.
    #[error("Dataset '{dataset}', row {row}: expected {expected} values, found {found}")]
    WidthMismatch {
        dataset: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A dataset declares no columns at all.
    #[error("Dataset '{0}' has no columns")]
    NoColumns(String),

    /// The fixed header does not match the columns contributed by the datasets.
    #[error("Header mismatch at column {index}: expected '{expected}', found '{found}'")]
    HeaderMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    /// The fixed header and the datasets disagree on the total width.
    #[error("Header has {header} columns but datasets provide {datasets}")]
    HeaderWidth { header: usize, datasets: usize },
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while writing a table as delimited text.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Opening, writing or flushing the destination failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV encoder rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while resolving generator configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The delimiter must be a single ASCII character.
    #[error("Invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),

    /// The delimiter cannot be the quote character or a line break.
    #[error("Delimiter '{0}' conflicts with CSV quoting")]
    ReservedDelimiter(String),
}

// =============================================================================
// Generate Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::pipeline::generate`] and the CLI.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Dataset or header error.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Output error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// JSON rendering of the schema failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for dataset construction.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for the top-level pipeline.
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let write_err: WriteError = io.into();
        let generate_err: GenerateError = write_err.into();
        assert!(generate_err.to_string().contains("no such directory"));

        let dataset_err = DatasetError::NoColumns("violin".into());
        let generate_err: GenerateError = dataset_err.into();
        assert!(generate_err.to_string().contains("violin"));
    }

    #[test]
    fn test_width_mismatch_format() {
        let err = DatasetError::WidthMismatch {
            dataset: "map".into(),
            row: 3,
            expected: 4,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'map'"));
        assert!(msg.contains("row 3"));
        assert!(msg.contains("expected 4"));
    }
}
