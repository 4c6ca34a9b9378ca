//! Error types for claim data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading source records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Malformed pharmacy CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column absent from a CSV header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    /// Malformed claim or revert JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Record Errors ===
    /// A claim or revert lacks a required attribute.
    #[error("{kind} #{index} in {path} is missing required field '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
        index: usize,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/data/claims"),
        };
        assert_eq!(err.to_string(), "directory not found: /data/claims");
    }

    #[test]
    fn test_missing_field_display() {
        let err = IngestError::MissingField {
            kind: "claim",
            field: "price",
            index: 3,
            path: PathBuf::from("claims/a.json"),
        };
        assert_eq!(
            err.to_string(),
            "claim #3 in claims/a.json is missing required field 'price'"
        );
    }
}
