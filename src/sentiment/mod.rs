//! # Sentiment Module
//!
//! Polarity scoring, three-way categorization and result aggregation.

mod aggregator;
mod analyzer;
mod categorizer;
mod lexicon;

pub use aggregator::{AnalysisSummary, FeedbackResult, ResultAggregator};
pub use analyzer::PolarityOracle;
pub use categorizer::{Categorizer, Category};
pub use lexicon::{LexiconOracle, LexiconResult};
