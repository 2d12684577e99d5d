//! # Lexicon Oracle
//!
//! Rule-based English polarity lexicon used as the default
//! [`PolarityOracle`](super::PolarityOracle).

use super::analyzer::PolarityOracle;
use crate::defaults::{MAX_SCORE, MIN_SCORE};
use crate::error::OracleError;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

/// Polarity multiplier applied to a word following a negation
const NEGATION_FACTOR: f64 = -0.5;

/// Amplification applied when the text contains an exclamation mark
const EXCLAMATION_BOOST: f64 = 1.1;

/// Feedback polarity lexicon
///
/// Contains word-polarity mappings for everyday customer feedback.
pub struct LexiconOracle {
    /// Word to polarity mapping
    words: HashMap<String, f64>,
    /// Negation words
    negations: HashSet<String>,
    /// Intensifier words
    intensifiers: HashMap<String, f64>,
    /// Word token pattern
    token_regex: Regex,
}

impl Default for LexiconOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconOracle {
    /// Create a new lexicon with the default word list
    pub fn new() -> Self {
        let positive_words = [
            ("excellent", 1.0),
            ("outstanding", 0.9),
            ("perfect", 1.0),
            ("amazing", 0.8),
            ("awesome", 0.9),
            ("fantastic", 0.8),
            ("wonderful", 0.9),
            ("superb", 0.9),
            ("brilliant", 0.8),
            ("great", 0.8),
            ("best", 1.0),
            ("love", 0.7),
            ("loved", 0.7),
            ("loves", 0.7),
            ("lovely", 0.6),
            ("good", 0.7),
            ("nice", 0.6),
            ("happy", 0.8),
            ("glad", 0.5),
            ("pleased", 0.6),
            ("satisfied", 0.5),
            ("impressive", 0.8),
            ("impressed", 0.7),
            ("helpful", 0.6),
            ("friendly", 0.5),
            ("easy", 0.4),
            ("fast", 0.3),
            ("quick", 0.3),
            ("reliable", 0.5),
            ("smooth", 0.4),
            ("beautiful", 0.85),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("recommend", 0.5),
            ("recommended", 0.5),
            ("worth", 0.3),
            ("useful", 0.3),
            ("thanks", 0.2),
            ("thank", 0.2),
            ("delighted", 0.8),
            ("fine", 0.4),
            ("positive", 0.2),
            ("better", 0.5),
            ("improved", 0.4),
            ("convenient", 0.4),
            ("comfortable", 0.4),
            ("solid", 0.3),
            ("pleasant", 0.7),
            ("efficient", 0.4),
        ];

        let negative_words = [
            ("terrible", -1.0),
            ("horrible", -1.0),
            ("awful", -1.0),
            ("worst", -1.0),
            ("bad", -0.7),
            ("poor", -0.4),
            ("hate", -0.8),
            ("hated", -0.8),
            ("disappointing", -0.6),
            ("disappointed", -0.75),
            ("useless", -0.5),
            ("broken", -0.4),
            ("slow", -0.3),
            ("sad", -0.5),
            ("angry", -0.5),
            ("annoying", -0.8),
            ("annoyed", -0.6),
            ("frustrating", -0.6),
            ("frustrated", -0.7),
            ("rude", -0.3),
            ("unhelpful", -0.5),
            ("difficult", -0.5),
            ("confusing", -0.3),
            ("expensive", -0.5),
            ("overpriced", -0.6),
            ("waste", -0.4),
            ("wasted", -0.4),
            ("problem", -0.3),
            ("problems", -0.3),
            ("issue", -0.2),
            ("issues", -0.2),
            ("fail", -0.5),
            ("failed", -0.5),
            ("fails", -0.5),
            ("failure", -0.5),
            ("crash", -0.5),
            ("crashes", -0.5),
            ("buggy", -0.5),
            ("unreliable", -0.5),
            ("unhappy", -0.6),
            ("dissatisfied", -0.6),
            ("mediocre", -0.3),
            ("negative", -0.3),
            ("worse", -0.4),
            ("ugly", -0.7),
            ("dirty", -0.6),
            ("defective", -0.6),
            ("nasty", -0.8),
            ("pathetic", -1.0),
            ("refund", -0.2),
        ];

        let words = positive_words
            .into_iter()
            .chain(negative_words)
            .map(|(word, score)| (word.to_string(), score))
            .collect();

        let negations = [
            "not", "no", "never", "neither", "nor", "nobody", "nothing", "none",
            "cannot", "cant", "can't", "don't", "dont", "doesn't", "doesnt",
            "didn't", "didnt", "won't", "wont", "wouldn't", "wouldnt",
            "shouldn't", "shouldnt", "couldn't", "couldnt", "isn't", "isnt",
            "aren't", "arent", "wasn't", "wasnt", "weren't", "werent",
            "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("incredibly", 1.5),
            ("absolutely", 1.5),
            ("totally", 1.4),
            ("highly", 1.4),
            ("so", 1.3),
            ("super", 1.4),
            ("quite", 1.1),
            ("pretty", 1.1),
            ("slightly", 0.5),
            ("somewhat", 0.7),
        ]
        .into_iter()
        .map(|(word, mult)| (word.to_string(), mult))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
            token_regex: Regex::new(r"[\p{L}\p{N}']+").expect("token pattern is valid"),
        }
    }

    /// Get polarity for a word
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get intensifier multiplier
    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add or replace a word in the lexicon; the score is clamped to [-1, 1]
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words
            .insert(word.to_lowercase(), score.clamp(MIN_SCORE, MAX_SCORE));
    }

    /// Add several words at once
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (word, score) in words {
            self.add_word(word.as_ref(), score);
        }
        self
    }

    /// Split text into lowercase word tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfc().collect::<String>().to_lowercase();
        self.token_regex
            .find_iter(&normalized)
            .map(|m| m.as_str().trim_matches('\'').to_string())
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Calculate polarity for a text
    ///
    /// 1. Look up word polarities
    /// 2. Scale by a preceding intensifier
    /// 3. Flip and dampen words after a negation
    /// 4. Average the matched words and amplify on `!`
    pub fn analyze(&self, text: &str) -> LexiconResult {
        let mut scores: Vec<f64> = Vec::new();
        let mut matched_words: Vec<(String, f64)> = Vec::new();

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for word in self.tokenize(text) {
            if self.is_negation(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.get_intensifier(&word) {
                intensifier = mult;
                continue;
            }

            if let Some(mut score) = self.get_score(&word) {
                score = (score * intensifier).clamp(MIN_SCORE, MAX_SCORE);
                if negate_next {
                    score *= NEGATION_FACTOR;
                }
                negate_next = false;
                intensifier = 1.0;

                scores.push(score);
                matched_words.push((word, score));
            } else {
                // Modifiers only reach the next word
                negate_next = false;
                intensifier = 1.0;
            }
        }

        let mut sentiment_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        if text.contains('!') {
            sentiment_score *= EXCLAMATION_BOOST;
        }

        LexiconResult {
            score: sentiment_score.clamp(MIN_SCORE, MAX_SCORE),
            matched_words,
            word_count: scores.len(),
        }
    }
}

impl PolarityOracle for LexiconOracle {
    fn score(&self, text: &str) -> Result<f64, OracleError> {
        let result = self.analyze(text);
        trace!(
            score = result.score,
            matched = result.word_count,
            "lexicon polarity computed"
        );
        Ok(result.score)
    }
}

/// Result from lexicon-based analysis
#[derive(Debug, Clone)]
pub struct LexiconResult {
    /// Overall polarity (-1 to 1)
    pub score: f64,
    /// Words that matched with their adjusted scores
    pub matched_words: Vec<(String, f64)>,
    /// Number of lexicon words found
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_words() {
        let lexicon = LexiconOracle::new();
        assert!(lexicon.get_score("excellent").unwrap() > 0.0);
        assert!(lexicon.get_score("Great").unwrap() > 0.0);
    }

    #[test]
    fn test_negative_words() {
        let lexicon = LexiconOracle::new();
        assert!(lexicon.get_score("terrible").unwrap() < 0.0);
        assert!(lexicon.get_score("awful").unwrap() < 0.0);
    }

    #[test]
    fn test_clearly_positive_feedback() {
        let lexicon = LexiconOracle::new();
        let score = lexicon.score("This product is excellent! I love it.").unwrap();
        assert!(score > 0.1);
    }

    #[test]
    fn test_clearly_negative_feedback() {
        let lexicon = LexiconOracle::new();
        let score = lexicon.score("Terrible, would not recommend.").unwrap();
        assert!(score < -0.1);
    }

    #[test]
    fn test_neutral_feedback() {
        let lexicon = LexiconOracle::new();
        let score = lexicon.score("It works as expected.").unwrap();
        assert!((-0.1..=0.1).contains(&score));
    }

    #[test]
    fn test_very_short_feedback() {
        let lexicon = LexiconOracle::new();
        let score = lexicon.score("Great!").unwrap();
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_negation_handling() {
        let lexicon = LexiconOracle::new();
        let positive = lexicon.analyze("the service was good");
        let negated = lexicon.analyze("the service was not good");
        assert!(positive.score > 0.0);
        assert!(negated.score < 0.0);
        assert!(negated.score.abs() < positive.score);
    }

    #[test]
    fn test_contraction_negation() {
        let lexicon = LexiconOracle::new();
        let result = lexicon.analyze("I don't love it");
        assert!(result.score < 0.0);
    }

    #[test]
    fn test_intensifier_handling() {
        let lexicon = LexiconOracle::new();
        let normal = lexicon.analyze("the staff is helpful");
        let intensified = lexicon.analyze("the staff is very helpful");
        assert!(intensified.score > normal.score);
    }

    #[test]
    fn test_scores_stay_bounded() {
        let lexicon = LexiconOracle::new();
        let result = lexicon.analyze("absolutely perfect!!! extremely excellent!!!");
        assert!(result.score <= 1.0);
        let result = lexicon.analyze("absolutely terrible!!! extremely awful!!!");
        assert!(result.score >= -1.0);
    }

    #[test]
    fn test_no_matches_is_zero() {
        let lexicon = LexiconOracle::new();
        let result = lexicon.analyze("The package arrived on Tuesday.");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_custom_words() {
        let lexicon = LexiconOracle::new().with_words([("snappy", 0.6), ("laggy", -3.0)]);
        assert_eq!(lexicon.get_score("snappy"), Some(0.6));
        assert_eq!(lexicon.get_score("laggy"), Some(-1.0));
        assert!(lexicon.analyze("the app feels snappy").score > 0.1);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let lexicon = LexiconOracle::new();
        let tokens = lexicon.tokenize("Great, 'really' GOOD!");
        assert_eq!(tokens, vec!["great", "really", "good"]);
    }
}
