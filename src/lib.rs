//! # Feedback Analyzer
//!
//! Library for categorizing customer feedback into Happy / Sad / Mild
//! sentiment buckets from a polarity score, summarizing the results and
//! persisting them as CSV.
//!
//! ## Modules
//!
//! - `sentiment` - Polarity oracle, lexicon scorer, categorizer and aggregation
//! - `data` - Feedback loading and the CSV result codec
//! - `pipeline` - One batch run from input file to output file
//! - `report` - Console rendering of results and summary
//! - `config` - TOML configuration
//! - `logging` - Tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```no_run
//! use feedback_analyzer::{LexiconOracle, Pipeline, PipelineOptions};
//!
//! let oracle = LexiconOracle::new();
//! let pipeline = Pipeline::new(&oracle, PipelineOptions::default());
//!
//! let report = pipeline.run("feedback.txt", "results/output.csv").unwrap();
//! println!("Happy: {:.2}%", report.summary.percentage(feedback_analyzer::Category::Happy));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod sentiment;

// Re-exports for convenience
pub use config::AppConfig;
pub use data::{FeedbackLoader, InputFormat, TabularCodec};
pub use error::{AnalyzerError, InvalidResult, OracleError, Result};
pub use pipeline::{Pipeline, PipelineOptions, RunReport};
pub use sentiment::{
    AnalysisSummary, Categorizer, Category, FeedbackResult, LexiconOracle, PolarityOracle,
    ResultAggregator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Scores strictly above this are Happy
    pub const HAPPY_THRESHOLD: f64 = 0.1;

    /// Scores strictly below this are Sad
    pub const SAD_THRESHOLD: f64 = -0.1;

    /// Lowest polarity an oracle may report
    pub const MIN_SCORE: f64 = -1.0;

    /// Highest polarity an oracle may report
    pub const MAX_SCORE: f64 = 1.0;

    /// Output file used when none is given
    pub const OUTPUT_PATH: &str = "output.csv";

    /// CSV column holding feedback text in CSV input
    pub const CSV_COLUMN: &str = "feedback";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Header row of the result file
    pub const RESULT_HEADER: [&str; 3] = ["feedback", "category", "sentiment_score"];
}
