//! Custom error types for Dompet
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Every error is recoverable: the ledger file and the in-memory session
//! structures are left untouched when an operation fails.

use thiserror::Error;

/// The main error type for Dompet operations
#[derive(Error, Debug)]
pub enum DompetError {
    /// Malformed kind or amount; the caller should re-prompt
    #[error("Validation error: {0}")]
    Validation(String),

    /// A row index that is stale or out of range of the current ledger
    #[error("Index {index} is out of range (ledger has {len} records)")]
    Index { index: usize, len: usize },

    /// Undo requested with nothing to undo
    #[error("Nothing to undo")]
    EmptyUndo,

    /// Operation not allowed in the current selection state
    #[error("Invalid state: {0}")]
    State(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Ledger file read/write errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl DompetError {
    /// Create an index error for `index` against a ledger of `len` records
    pub fn index(index: usize, len: usize) -> Self {
        Self::Index { index, len }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an index error
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    /// Check if this is a selection-state error
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Check if this is the empty-undo error
    pub fn is_empty_undo(&self) -> bool {
        matches!(self, Self::EmptyUndo)
    }
}

impl From<std::io::Error> for DompetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for DompetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for DompetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Dompet operations
pub type DompetResult<T> = Result<T, DompetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DompetError::Validation("amount must be a whole number".into());
        assert_eq!(
            err.to_string(),
            "Validation error: amount must be a whole number"
        );
    }

    #[test]
    fn test_index_error() {
        let err = DompetError::index(4, 2);
        assert_eq!(err.to_string(), "Index 4 is out of range (ledger has 2 records)");
        assert!(err.is_index());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_predicates() {
        assert!(DompetError::EmptyUndo.is_empty_undo());
        assert!(DompetError::State("editing".into()).is_state());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DompetError = io_err.into();
        assert!(matches!(err, DompetError::Io(_)));
    }
}
