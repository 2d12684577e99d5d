//! Result file codec
//!
//! Writes analysis results as `feedback,category,sentiment_score` CSV and
//! reads such files back without re-analyzing anything.

use super::{csv_read_error, csv_write_error};
use crate::defaults::RESULT_HEADER;
use crate::error::{AnalyzerError, Result};
use crate::sentiment::{Category, FeedbackResult};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Output row, borrowed from a result
#[derive(Serialize)]
struct ResultRow<'a> {
    feedback: &'a str,
    category: Category,
    sentiment_score: f64,
}

/// Input row, checked before it becomes a result
#[derive(Deserialize)]
struct ResultRecord {
    feedback: String,
    category: String,
    sentiment_score: String,
}

/// CSV codec for feedback results
pub struct TabularCodec;

impl TabularCodec {
    /// Write results to a CSV file, creating missing parent directories.
    ///
    /// An existing file is overwritten.
    pub fn write<P: AsRef<Path>>(results: &[FeedbackResult], path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AnalyzerError::OutputDirectoryFailure {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(path).map_err(|e| AnalyzerError::from_write(path, e))?;
        Self::write_to(results, file, path)?;

        info!(path = %path.display(), rows = results.len(), "results written");
        Ok(())
    }

    /// Write results as CSV to any writer; `origin` names the target in errors
    pub fn write_to<W: Write>(results: &[FeedbackResult], writer: W, origin: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        // Written by hand so an empty result set still gets a header
        writer
            .write_record(RESULT_HEADER)
            .map_err(|e| csv_write_error(origin, e))?;

        for result in results {
            writer
                .serialize(ResultRow {
                    feedback: result.feedback_text(),
                    category: result.category(),
                    sentiment_score: result.sentiment_score(),
                })
                .map_err(|e| csv_write_error(origin, e))?;
        }

        writer
            .flush()
            .map_err(|e| AnalyzerError::from_write(origin, e))?;
        Ok(())
    }

    /// Read results back from a CSV file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<FeedbackResult>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AnalyzerError::from_read(path, e))?;
        Self::read_from(file, path)
    }

    /// Read results from CSV data; `origin` names the source in errors
    pub fn read_from<R: Read>(reader: R, origin: &Path) -> Result<Vec<FeedbackResult>> {
        let mut reader = ReaderBuilder::new().from_reader(reader);

        let headers = reader.headers().map_err(|e| csv_read_error(origin, e))?;
        if headers.iter().ne(RESULT_HEADER) {
            return Err(AnalyzerError::malformed(
                origin,
                format!(
                    "expected header '{}', found '{}'",
                    RESULT_HEADER.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        let mut results = Vec::new();
        for (index, record) in reader.deserialize::<ResultRecord>().enumerate() {
            let record = record.map_err(|e| csv_read_error(origin, e))?;
            // Row 1 is the header
            let row = index + 2;
            results.push(Self::parse_record(record, row, origin)?);
        }

        Ok(results)
    }

    fn parse_record(record: ResultRecord, row: usize, origin: &Path) -> Result<FeedbackResult> {
        let malformed = |message: String| AnalyzerError::malformed(origin, format!("row {}: {}", row, message));

        let category: Category = record.category.parse().map_err(malformed)?;

        let score: f64 = record
            .sentiment_score
            .trim()
            .parse()
            .map_err(|_| malformed(format!("invalid sentiment score '{}'", record.sentiment_score)))?;

        let result = FeedbackResult::try_new(record.feedback, score)
            .map_err(|e| malformed(e.to_string()))?;

        if result.category() != category {
            return Err(malformed(format!(
                "category {} does not match sentiment score {}",
                category, score
            )));
        }

        Ok(result)
    }
}
