//! # Data Module
//!
//! Feedback input loading and the CSV result codec.

mod codec;
mod loader;

pub use codec::TabularCodec;
pub use loader::{is_valid_entry, FeedbackLoader, InputFormat, LoadedFeedback};

use crate::error::AnalyzerError;
use std::path::Path;

/// Map a csv crate error raised while reading `path`
pub(crate) fn csv_read_error(path: &Path, err: csv::Error) -> AnalyzerError {
    let position = err
        .position()
        .map(|pos| format!(" (line {})", pos.line()))
        .unwrap_or_default();

    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => AnalyzerError::from_read(path, io_err),
        kind => AnalyzerError::malformed(path, format!("{}{}", csv_kind_message(&kind), position)),
    }
}

/// Map a csv crate error raised while writing `path`
pub(crate) fn csv_write_error(path: &Path, err: csv::Error) -> AnalyzerError {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => AnalyzerError::from_write(path, io_err),
        kind => AnalyzerError::Unexpected(format!(
            "serializing {}: {}",
            path.display(),
            csv_kind_message(&kind)
        )),
    }
}

fn csv_kind_message(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields but found {}", expected_len, len),
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::Serialize(message) => message.clone(),
        other => format!("{:?}", other),
    }
}
