use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::rubric;

use super::capability::{GrammarChecker, SentimentAnalyzer};
use super::types::{
    ClarityMetric, EngagementMetric, GrammarMetric, LexicalMetrics, SpeechBand, SpeechRateMetric,
    VocabularyMetric,
};

/// Computes rule-based lexical metrics for a transcript.
///
/// Grammar and sentiment capabilities are optional; when absent the
/// corresponding sub-score defaults to its maximum so a missing library never
/// penalizes the speaker.
pub struct LexicalCalculator {
    grammar: Option<Arc<dyn GrammarChecker>>,
    sentiment: Option<Arc<dyn SentimentAnalyzer>>,
}

impl std::fmt::Debug for LexicalCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalCalculator")
            .field("grammar", &self.grammar.is_some())
            .field("sentiment", &self.sentiment.is_some())
            .finish()
    }
}

impl Default for LexicalCalculator {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl LexicalCalculator {
    pub fn new(
        grammar: Option<Arc<dyn GrammarChecker>>,
        sentiment: Option<Arc<dyn SentimentAnalyzer>>,
    ) -> Self {
        if grammar.is_none() {
            warn!("no grammar capability configured, grammar sub-score runs degraded");
        }
        if sentiment.is_none() {
            warn!("no sentiment capability configured, engagement sub-score runs degraded");
        }
        Self { grammar, sentiment }
    }

    /// Computes all metrics for `transcript`. Returns `None` when the
    /// transcript tokenizes to zero words; every other input produces a value.
    pub fn compute(&self, transcript: &str, duration_secs: Option<u32>) -> Option<LexicalMetrics> {
        let words = tokenize(transcript);
        let word_count = words.len();
        if word_count == 0 {
            return None;
        }

        let speech_rate = speech_rate_metric(word_count, duration_secs);
        let grammar = self.grammar_metric(transcript, word_count);
        let vocabulary = vocabulary_metric(&words);
        let clarity = clarity_metric(&words);
        let engagement = self.engagement_metric(transcript);

        debug!(
            word_count,
            wpm = ?speech_rate.wpm,
            ttr = vocabulary.type_token_ratio,
            filler_rate = clarity.filler_rate,
            "lexical metrics computed"
        );

        Some(LexicalMetrics {
            word_count,
            speech_rate,
            grammar,
            vocabulary,
            clarity,
            engagement,
        })
    }

    fn grammar_metric(&self, transcript: &str, word_count: usize) -> GrammarMetric {
        let Some(checker) = &self.grammar else {
            return GrammarMetric {
                error_count: 0,
                score: 10,
            };
        };

        let error_count = checker.check(transcript);
        let density = error_count as f64 / word_count as f64 * 100.0;
        let quality = 1.0 - (density / rubric::GRAMMAR_DENSITY_CEILING).min(1.0);

        GrammarMetric {
            error_count,
            score: quality_band(quality, [10, 8, 6, 4, 2]),
        }
    }

    fn engagement_metric(&self, transcript: &str) -> EngagementMetric {
        let Some(analyzer) = &self.sentiment else {
            return EngagementMetric {
                positivity: None,
                score: 15,
            };
        };

        let compound = analyzer.polarity(transcript);
        let positivity = (compound + 1.0) / 2.0;

        EngagementMetric {
            positivity: Some(positivity),
            score: quality_band(positivity, [15, 12, 9, 6, 3]),
        }
    }
}

/// Splits a transcript into lowercase word tokens (maximal runs of
/// alphanumerics or underscores).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps a quality value in `[0, 1]` onto five descending band scores using
/// the shared rubric thresholds.
fn quality_band(quality: f64, scores: [u32; 5]) -> u32 {
    if quality >= rubric::QUALITY_EXCELLENT {
        scores[0]
    } else if quality >= rubric::QUALITY_GOOD {
        scores[1]
    } else if quality >= rubric::QUALITY_AVERAGE {
        scores[2]
    } else if quality >= rubric::QUALITY_POOR {
        scores[3]
    } else {
        scores[4]
    }
}

fn speech_rate_metric(word_count: usize, duration_secs: Option<u32>) -> SpeechRateMetric {
    // Zero or negative-equivalent durations are treated the same as absent
    // ones; see DESIGN.md for why this conflation is kept.
    let Some(duration) = duration_secs.filter(|d| *d > 0) else {
        return SpeechRateMetric {
            wpm: None,
            score: 10,
            band: SpeechBand::NotProvided,
        };
    };

    let wpm = word_count as f64 / duration as f64 * 60.0;
    let (score, band) = if wpm < rubric::WPM_SLOW_MIN {
        (2, SpeechBand::TooSlow)
    } else if wpm < rubric::WPM_IDEAL_MIN {
        (6, SpeechBand::Slow)
    } else if wpm < rubric::WPM_FAST_MIN {
        (10, SpeechBand::Ideal)
    } else if wpm < rubric::WPM_TOO_FAST_MIN {
        (6, SpeechBand::Fast)
    } else {
        (2, SpeechBand::TooFast)
    };

    SpeechRateMetric {
        wpm: Some(wpm),
        score,
        band,
    }
}

fn vocabulary_metric(words: &[String]) -> VocabularyMetric {
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    let ttr = unique.len() as f64 / words.len() as f64;

    VocabularyMetric {
        type_token_ratio: ttr,
        score: quality_band(ttr, [10, 8, 6, 4, 2]),
    }
}

fn clarity_metric(words: &[String]) -> ClarityMetric {
    let filler_count = words
        .iter()
        .filter(|w| rubric::FILLER_WORDS.contains(&w.as_str()))
        .count();
    let filler_rate = filler_count as f64 / words.len() as f64 * 100.0;

    let score = if filler_rate <= rubric::FILLER_EXCELLENT {
        15
    } else if filler_rate <= rubric::FILLER_GOOD {
        12
    } else if filler_rate <= rubric::FILLER_AVERAGE {
        9
    } else if filler_rate <= rubric::FILLER_POOR {
        6
    } else {
        3
    };

    ClarityMetric {
        filler_count,
        filler_rate,
        score,
    }
}
