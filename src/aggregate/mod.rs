//! Merging of lexical metrics and the normalized verdict into the five
//! rubric dimensions.

pub mod types;


pub use types::{BreakdownEntry, ScoringResult, TranscriptStats};

use crate::metrics::LexicalMetrics;
use crate::normalize::NormalizedVerdict;
use crate::rubric;

pub const CONTENT_CRITERION: &str = "Content & Structure";
pub const SPEECH_RATE_CRITERION: &str = "Speech Rate";
pub const LANGUAGE_CRITERION: &str = "Language & Grammar";
pub const CLARITY_CRITERION: &str = "Clarity";
pub const ENGAGEMENT_CRITERION: &str = "Engagement";

/// Combines both signal sources into the final breakdown. Pure, total and
/// deterministic: the same inputs always produce the same result.
///
/// The judge's tone label only shows up in feedback text; the engagement
/// score comes exclusively from the rule-based metric.
pub fn aggregate(
    metrics: &LexicalMetrics,
    verdict: &NormalizedVerdict,
    duration: Option<u32>,
) -> ScoringResult {
    let flow_score = if verdict.flow_followed {
        rubric::FLOW_POINTS
    } else {
        0
    };
    let content_score = verdict.salutation_score + verdict.keyword_score + flow_score;

    let language_score = metrics.grammar.score + metrics.vocabulary.score;

    let breakdown = vec![
        BreakdownEntry {
            criterion: CONTENT_CRITERION,
            score: content_score,
            max: rubric::CONTENT_MAX,
            feedback: format!(
                "Salutation: {}, Keywords found: {} items, Flow: {}",
                verdict.salutation_level,
                verdict.found_keywords.len(),
                verdict.flow_status
            ),
        },
        BreakdownEntry {
            criterion: SPEECH_RATE_CRITERION,
            score: metrics.speech_rate.score,
            max: rubric::SPEECH_RATE_MAX,
            feedback: format!(
                "{:.0} WPM ({})",
                metrics.speech_rate.wpm.unwrap_or(0.0),
                metrics.speech_rate.band
            ),
        },
        BreakdownEntry {
            criterion: LANGUAGE_CRITERION,
            score: language_score,
            max: rubric::LANGUAGE_MAX,
            feedback: format!(
                "Grammar Score: {}/10, Vocabulary Score: {}/10 (TTR: {:.2})",
                metrics.grammar.score,
                metrics.vocabulary.score,
                metrics.vocabulary.type_token_ratio
            ),
        },
        BreakdownEntry {
            criterion: CLARITY_CRITERION,
            score: metrics.clarity.score,
            max: rubric::CLARITY_MAX,
            feedback: format!("Filler Word Rate: {:.1}%", metrics.clarity.filler_rate),
        },
        BreakdownEntry {
            criterion: ENGAGEMENT_CRITERION,
            score: metrics.engagement.score,
            max: rubric::ENGAGEMENT_MAX,
            feedback: format!(
                "Sentiment: {} (Score based on positivity probability)",
                verdict.engagement_tone
            ),
        },
    ];

    let overall_score = breakdown.iter().map(|e| e.score).sum();

    ScoringResult {
        overall_score,
        breakdown,
        transcript_stats: TranscriptStats {
            word_count: metrics.word_count,
            duration,
        },
    }
}
