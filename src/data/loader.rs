//! Feedback loading utilities
//!
//! Reads raw feedback entries from plain text (one entry per line) or from
//! a named column of a CSV file, dropping blank entries.

use super::csv_read_error;
use crate::defaults::CSV_COLUMN;
use crate::error::{AnalyzerError, Result};
use csv::ReaderBuilder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// True when the entry has content besides whitespace
pub fn is_valid_entry(text: &str) -> bool {
    !text.trim().is_empty()
}

/// How an input file is parsed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// One feedback entry per line
    #[default]
    PlainText,
    /// CSV with feedback in the named column
    Csv { column: String },
}

impl InputFormat {
    /// Pick the format from the file extension: `.csv` means CSV
    pub fn detect(path: &Path, column: &str) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            InputFormat::Csv {
                column: column.to_string(),
            }
        } else {
            InputFormat::PlainText
        }
    }

    /// CSV using the default `feedback` column
    pub fn csv() -> Self {
        InputFormat::Csv {
            column: CSV_COLUMN.to_string(),
        }
    }
}

/// Entries that passed validation, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedFeedback {
    pub entries: Vec<String>,
    /// Blank or whitespace-only entries that were dropped
    pub skipped_blank: usize,
}

impl LoadedFeedback {
    fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut loaded = LoadedFeedback::default();
        for entry in raw {
            if is_valid_entry(&entry) {
                loaded.entries.push(entry);
            } else {
                loaded.skipped_blank += 1;
            }
        }
        loaded
    }
}

/// Feedback loader for text and CSV files
pub struct FeedbackLoader;

impl FeedbackLoader {
    /// Load feedback from a file in the given format
    pub fn load<P: AsRef<Path>>(path: P, format: &InputFormat) -> Result<LoadedFeedback> {
        let path = path.as_ref();
        let loaded = match format {
            InputFormat::PlainText => Self::load_from_text(path)?,
            InputFormat::Csv { column } => Self::load_from_csv(path, column)?,
        };

        debug!(
            path = %path.display(),
            entries = loaded.entries.len(),
            skipped_blank = loaded.skipped_blank,
            "loaded feedback"
        );
        Ok(loaded)
    }

    /// Load feedback from a text file, one entry per line.
    ///
    /// Only the line terminator is removed; the entry text is kept as-is.
    pub fn load_from_text<P: AsRef<Path>>(path: P) -> Result<LoadedFeedback> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AnalyzerError::from_read(path, e))?;
        Ok(Self::parse_text(&content))
    }

    /// Split text content into entries
    pub fn parse_text(content: &str) -> LoadedFeedback {
        LoadedFeedback::from_raw(content.lines().map(String::from))
    }

    /// Load feedback from the named column of a CSV file
    pub fn load_from_csv<P: AsRef<Path>>(path: P, column: &str) -> Result<LoadedFeedback> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AnalyzerError::from_read(path, e))?;
        Self::parse_csv(file, column, path)
    }

    /// Read entries from CSV data; `origin` names the source in errors
    pub fn parse_csv<R: Read>(reader: R, column: &str, origin: &Path) -> Result<LoadedFeedback> {
        let mut reader = ReaderBuilder::new().from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| csv_read_error(origin, e))?
            .clone();

        // A completely empty file has no rows to look at
        if headers.is_empty() {
            return Ok(LoadedFeedback::default());
        }

        let index = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| {
                AnalyzerError::malformed(
                    origin,
                    format!("Column '{}' not found in CSV file", column),
                )
            })?;

        let mut raw = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| csv_read_error(origin, e))?;
            raw.push(record.get(index).unwrap_or_default().to_string());
        }

        Ok(LoadedFeedback::from_raw(raw))
    }
}
