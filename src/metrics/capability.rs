//! Optional linguistic capabilities injected into the calculator.
//!
//! Presence or absence is decided at construction time. When a capability is
//! absent the calculator falls back to the documented maximum-score default
//! instead of failing (degraded mode).

/// Counts flagged grammar issues in a text.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> usize;
}

/// Produces a compound polarity score in `[-1, 1]` for a text.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Grammar checker returning a fixed error count per call.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Copy)]
pub struct MockGrammarChecker {
    pub errors: usize,
}

#[cfg(any(test, feature = "mock"))]
impl GrammarChecker for MockGrammarChecker {
    fn check(&self, _text: &str) -> usize {
        self.errors
    }
}

/// Sentiment analyzer returning a fixed compound polarity per call.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Copy)]
pub struct MockSentimentAnalyzer {
    pub compound: f64,
}

#[cfg(any(test, feature = "mock"))]
impl SentimentAnalyzer for MockSentimentAnalyzer {
    fn polarity(&self, _text: &str) -> f64 {
        self.compound
    }
}
