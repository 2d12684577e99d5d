//! # Analysis Pipeline
//!
//! One batch run: load feedback, score every valid entry, summarize and
//! write the result file.

use crate::data::{is_valid_entry, FeedbackLoader, InputFormat, TabularCodec};
use crate::defaults::CSV_COLUMN;
use crate::error::{OracleError, Result};
use crate::sentiment::{AnalysisSummary, FeedbackResult, PolarityOracle, ResultAggregator};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Column read from CSV input
    pub csv_column: String,
    /// Force an input format instead of detecting it from the extension
    pub format: Option<InputFormat>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            csv_column: CSV_COLUMN.to_string(),
            format: None,
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Analyzed entries in input order
    pub results: Vec<FeedbackResult>,
    pub summary: AnalysisSummary,
    /// Blank or whitespace-only entries dropped before analysis
    pub skipped_blank: usize,
    /// Entries the oracle could not score
    pub skipped_failed: usize,
    /// Where the results were written, if they were
    pub output: Option<PathBuf>,
}

/// Analysis of scored entries before anything is written
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub results: Vec<FeedbackResult>,
    pub skipped_blank: usize,
    pub skipped_failed: usize,
}

/// Feedback analysis pipeline over a polarity oracle
pub struct Pipeline<'a, O: PolarityOracle + ?Sized> {
    oracle: &'a O,
    options: PipelineOptions,
}

impl<'a, O: PolarityOracle + ?Sized> Pipeline<'a, O> {
    pub fn new(oracle: &'a O, options: PipelineOptions) -> Self {
        Self { oracle, options }
    }

    /// Input format used for `path`
    pub fn input_format(&self, path: &Path) -> InputFormat {
        self.options
            .format
            .clone()
            .unwrap_or_else(|| InputFormat::detect(path, &self.options.csv_column))
    }

    /// Score valid entries in order.
    ///
    /// Blank entries are dropped without consulting the oracle. Entries the
    /// oracle fails on, or scores outside [-1, 1], are skipped and counted.
    pub fn analyze<S: AsRef<str>>(&self, entries: &[S]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (index, entry) in entries.iter().enumerate() {
            let text = entry.as_ref();
            if !is_valid_entry(text) {
                outcome.skipped_blank += 1;
                continue;
            }

            match self.score_entry(text) {
                Ok(result) => {
                    debug!(
                        index,
                        score = result.sentiment_score(),
                        category = %result.category(),
                        "entry analyzed"
                    );
                    outcome.results.push(result);
                }
                Err(e) => {
                    warn!(index, error = %e, "skipping entry");
                    outcome.skipped_failed += 1;
                }
            }
        }

        outcome
    }

    fn score_entry(&self, text: &str) -> std::result::Result<FeedbackResult, OracleError> {
        let score = self.oracle.score(text)?;
        ResultAggregator::build_result(text, score).map_err(|e| OracleError(e.to_string()))
    }

    /// Load, analyze and summarize without writing anything
    pub fn evaluate<P: AsRef<Path>>(&self, input: P) -> Result<RunReport> {
        let input = input.as_ref();
        let format = self.input_format(input);
        info!(path = %input.display(), ?format, "loading feedback");

        let loaded = FeedbackLoader::load(input, &format)?;
        if loaded.skipped_blank > 0 {
            debug!(skipped = loaded.skipped_blank, "dropped blank entries");
        }
        if loaded.entries.is_empty() {
            warn!("No valid feedback entries found in {}", input.display());
        }

        let outcome = self.analyze(&loaded.entries);
        let skipped_blank = loaded.skipped_blank + outcome.skipped_blank;
        let summary = ResultAggregator::summarize(&outcome.results);

        info!(
            analyzed = summary.total_count(),
            happy = summary.happy_count(),
            sad = summary.sad_count(),
            mild = summary.mild_count(),
            skipped_failed = outcome.skipped_failed,
            "analysis complete"
        );

        Ok(RunReport {
            results: outcome.results,
            summary,
            skipped_blank,
            skipped_failed: outcome.skipped_failed,
            output: None,
        })
    }

    /// Full run: evaluate `input` and write the results to `output`
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<RunReport> {
        let mut report = self.evaluate(input)?;
        let output = output.as_ref();

        TabularCodec::write(&report.results, output)?;
        report.output = Some(output.to_path_buf());

        Ok(report)
    }
}
