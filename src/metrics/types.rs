use std::fmt;

/// Speech-rate band a measured WPM value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechBand {
    TooSlow,
    Slow,
    Ideal,
    Fast,
    TooFast,
    /// No usable duration was supplied; the speaker is not penalized.
    NotProvided,
}

impl fmt::Display for SpeechBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpeechBand::TooSlow => "Too Slow",
            SpeechBand::Slow => "Slow",
            SpeechBand::Ideal => "Ideal",
            SpeechBand::Fast => "Fast",
            SpeechBand::TooFast => "Too Fast",
            SpeechBand::NotProvided => "Duration not provided (Assumed Ideal)",
        };
        f.write_str(label)
    }
}

/// Speech-rate measurement and its banded sub-score (0-10).
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRateMetric {
    /// Measured words per minute. `None` when no usable duration was given.
    pub wpm: Option<f64>,
    pub score: u32,
    pub band: SpeechBand,
}

/// Grammar-error measurement and its banded sub-score (2-10, or 10 in
/// degraded mode when no checker capability is available).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMetric {
    pub error_count: usize,
    pub score: u32,
}

/// Vocabulary-diversity measurement (type-token ratio) and sub-score (2-10).
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyMetric {
    pub type_token_ratio: f64,
    pub score: u32,
}

/// Filler-word measurement and its banded sub-score (3-15).
#[derive(Debug, Clone, PartialEq)]
pub struct ClarityMetric {
    pub filler_count: usize,
    /// Filler occurrences per 100 words.
    pub filler_rate: f64,
    pub score: u32,
}

/// Rule-based positivity measurement and sub-score (3-15, or 15 in degraded
/// mode when no sentiment capability is available).
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementMetric {
    /// Compound polarity normalized to `[0, 1]`. `None` in degraded mode.
    pub positivity: Option<f64>,
    pub score: u32,
}

/// All rule-based measurements for one transcript. Computed once, immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalMetrics {
    pub word_count: usize,
    pub speech_rate: SpeechRateMetric,
    pub grammar: GrammarMetric,
    pub vocabulary: VocabularyMetric,
    pub clarity: ClarityMetric,
    pub engagement: EngagementMetric,
}
