//! Rule-based lexical metrics for a transcript.
//!
//! Everything here is deterministic text math: word count, speech rate,
//! grammar-error density, type-token ratio, filler rate and positivity, each
//! mapped to a banded sub-score through the thresholds in [`crate::rubric`].

pub mod calculator;
pub mod capability;
pub mod types;


pub use calculator::{LexicalCalculator, tokenize};
pub use capability::{GrammarChecker, SentimentAnalyzer};
#[cfg(any(test, feature = "mock"))]
pub use capability::{MockGrammarChecker, MockSentimentAnalyzer};
pub use types::{
    ClarityMetric, EngagementMetric, GrammarMetric, LexicalMetrics, SpeechBand, SpeechRateMetric,
    VocabularyMetric,
};
