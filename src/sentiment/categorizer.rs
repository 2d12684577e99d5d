//! # Categorizer
//!
//! Maps a polarity score onto the three feedback categories.

use crate::defaults::{HAPPY_THRESHOLD, MAX_SCORE, MIN_SCORE, SAD_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Feedback sentiment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Positive feedback (score > 0.1)
    Happy,
    /// Negative feedback (score < -0.1)
    Sad,
    /// Neutral feedback (-0.1 <= score <= 0.1)
    Mild,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Happy, Category::Sad, Category::Mild];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Happy => "Happy",
            Category::Sad => "Sad",
            Category::Mild => "Mild",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Happy" => Ok(Category::Happy),
            "Sad" => Ok(Category::Sad),
            "Mild" => Ok(Category::Mild),
            other => Err(format!(
                "unknown category '{}', expected Happy, Sad or Mild",
                other
            )),
        }
    }
}

/// Threshold classifier from polarity score to category
#[derive(Debug, Clone, Copy, Default)]
pub struct Categorizer;

impl Categorizer {
    /// Convert a polarity score in [-1, 1] to a category
    pub fn categorize(score: f64) -> Category {
        if score > HAPPY_THRESHOLD {
            Category::Happy
        } else if score < SAD_THRESHOLD {
            Category::Sad
        } else {
            Category::Mild
        }
    }

    /// Score range per category as `(low, high)`.
    ///
    /// Happy excludes its low end, Sad excludes its high end and Mild
    /// includes both ends.
    pub fn thresholds() -> BTreeMap<Category, (f64, f64)> {
        BTreeMap::from([
            (Category::Happy, (HAPPY_THRESHOLD, MAX_SCORE)),
            (Category::Sad, (MIN_SCORE, SAD_THRESHOLD)),
            (Category::Mild, (SAD_THRESHOLD, HAPPY_THRESHOLD)),
        ])
    }

    /// One line per category describing its score range, for help text
    pub fn describe_thresholds() -> String {
        format!(
            "Happy: score > {h}\nSad:   score < {s}\nMild:  {s} <= score <= {h}",
            h = HAPPY_THRESHOLD,
            s = SAD_THRESHOLD
        )
    }
}
