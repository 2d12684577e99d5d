//! # Result Aggregator
//!
//! Builds per-entry feedback results and the category breakdown of a batch.

use super::categorizer::{Categorizer, Category};
use crate::data::is_valid_entry;
use crate::defaults::{MAX_SCORE, MIN_SCORE};
use crate::error::InvalidResult;

/// Analysis result for a single feedback entry
///
/// The text is never blank, the score lies in [-1, 1] and the category is
/// always the one [`Categorizer`] assigns to the score.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackResult {
    feedback_text: String,
    category: Category,
    sentiment_score: f64,
}

impl FeedbackResult {
    /// Create a result, deriving the category from the score
    pub fn try_new(
        feedback_text: impl Into<String>,
        sentiment_score: f64,
    ) -> Result<Self, InvalidResult> {
        let feedback_text = feedback_text.into();
        if !is_valid_entry(&feedback_text) {
            return Err(InvalidResult::BlankText);
        }
        // NaN fails the range check too
        if !(MIN_SCORE..=MAX_SCORE).contains(&sentiment_score) {
            return Err(InvalidResult::ScoreOutOfRange(sentiment_score));
        }

        Ok(Self {
            feedback_text,
            category: Categorizer::categorize(sentiment_score),
            sentiment_score,
        })
    }

    /// Feedback text exactly as it was analyzed
    pub fn feedback_text(&self) -> &str {
        &self.feedback_text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sentiment_score(&self) -> f64 {
        self.sentiment_score
    }
}

/// Category counts for a batch of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisSummary {
    total_count: usize,
    happy_count: usize,
    sad_count: usize,
    mild_count: usize,
}

impl AnalysisSummary {
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn happy_count(&self) -> usize {
        self.happy_count
    }

    pub fn sad_count(&self) -> usize {
        self.sad_count
    }

    pub fn mild_count(&self) -> usize {
        self.mild_count
    }

    /// Number of results in a category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Happy => self.happy_count,
            Category::Sad => self.sad_count,
            Category::Mild => self.mild_count,
        }
    }

    /// Share of results in a category (0-100), 0.0 for an empty batch
    pub fn percentage(&self, category: Category) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        100.0 * self.count(category) as f64 / self.total_count as f64
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Stateless builder for results and summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAggregator;

impl ResultAggregator {
    /// Build the result for one entry, keeping the text untouched
    pub fn build_result(text: &str, oracle_score: f64) -> Result<FeedbackResult, InvalidResult> {
        FeedbackResult::try_new(text, oracle_score)
    }

    /// Count results per category
    pub fn summarize(results: &[FeedbackResult]) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            total_count: results.len(),
            ..AnalysisSummary::default()
        };

        for result in results {
            match result.category() {
                Category::Happy => summary.happy_count += 1,
                Category::Sad => summary.sad_count += 1,
                Category::Mild => summary.mild_count += 1,
            }
        }

        summary
    }
}
