//! Analyzer error types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a feedback analysis run
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Input file not found: {}\n  Check the path and try again.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Permission denied: {}\n  Check the file permissions or choose another location.", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Malformed input in {}: {message}\n  Fix the file structure and try again.", .path.display())]
    MalformedInput { path: PathBuf, message: String },

    #[error("Cannot create output directory {}: {source}\n  Check that the location is writable.", .path.display())]
    OutputDirectoryFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}\n  Check free disk space and file permissions.", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AnalyzerError {
    /// Process exit status reported by the CLI for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalyzerError::InputNotFound { .. } => 1,
            AnalyzerError::PermissionDenied { .. } => 2,
            AnalyzerError::MalformedInput { .. } => 3,
            AnalyzerError::OutputDirectoryFailure { .. } => 4,
            AnalyzerError::WriteFailure { .. } => 5,
            AnalyzerError::Unexpected(_) => 10,
        }
    }

    /// Classify an I/O error raised while reading `path`
    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AnalyzerError::InputNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => AnalyzerError::PermissionDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => AnalyzerError::MalformedInput {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            _ => AnalyzerError::Unexpected(format!("reading {}: {}", path.display(), err)),
        }
    }

    /// Classify an I/O error raised while writing `path`
    pub(crate) fn from_write(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => AnalyzerError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => AnalyzerError::WriteFailure {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub(crate) fn malformed(path: &Path, message: impl Into<String>) -> Self {
        AnalyzerError::MalformedInput {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Per-entry scoring failure; the entry is skipped and the batch continues
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Sentiment scoring failed: {0}")]
pub struct OracleError(pub String);

/// Fields that cannot form a feedback result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidResult {
    #[error("feedback text is empty")]
    BlankText,

    #[error("sentiment score {0} is outside [-1, 1]")]
    ScoreOutOfRange(f64),
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
