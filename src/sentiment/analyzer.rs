//! # Polarity Oracle
//!
//! The scoring seam between the pipeline and whatever computes sentiment.

use crate::error::OracleError;

/// Source of polarity scores for feedback text.
///
/// Implementations return a score in [-1.0, 1.0] where +1.0 is the most
/// positive. A returned error skips the entry without aborting the batch.
pub trait PolarityOracle {
    fn score(&self, text: &str) -> Result<f64, OracleError>;
}

impl<F> PolarityOracle for F
where
    F: Fn(&str) -> Result<f64, OracleError>,
{
    fn score(&self, text: &str) -> Result<f64, OracleError> {
        self(text)
    }
}
