//! Error types for file-based curve loading.

use thiserror::Error;

/// A specialized Result type for file loading operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors that can occur while loading curve data from files.
#[derive(Error, Debug, Clone)]
pub enum FileError {
    /// File could not be opened or read.
    #[error("I/O error: {0}")]
    Io(String),

    /// A row could not be parsed into the expected record shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A row parsed but carries an invalid value.
    #[error("Invalid row {line}: {reason}")]
    InvalidRow {
        /// 1-based data row number (excluding the header).
        line: usize,
        /// Description of the invalid value.
        reason: String,
    },
}

impl FileError {
    /// Creates an invalid row error.
    #[must_use]
    pub fn invalid_row(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FileError::invalid_row(3, "negative Days: -5");
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("negative Days"));
    }
}
