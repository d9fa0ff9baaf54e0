//! End-to-end scoring orchestration.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::EngineError;

use std::time::Duration;

use tracing::{info, instrument};

use crate::aggregate::{ScoringResult, aggregate};
use crate::config::Config;
use crate::judge::{JudgeBackend, JudgeClient};
use crate::metrics::LexicalCalculator;
use crate::normalize::normalize;

/// Scores transcripts by combining rule-based lexical metrics with the
/// semantic judge's normalized verdict.
///
/// Each call is independent; the only state shared across concurrent calls
/// is the judge client's atomic rotation cursor.
#[derive(Debug)]
pub struct ScoringEngine<B> {
    calculator: LexicalCalculator,
    judge: JudgeClient<B>,
}

impl<B: JudgeBackend> ScoringEngine<B> {
    pub fn new(calculator: LexicalCalculator, judge: JudgeClient<B>) -> Self {
        Self { calculator, judge }
    }

    /// Builds an engine from configuration. Fails only when no evaluator
    /// credentials are configured.
    pub fn from_config(
        config: &Config,
        backend: B,
        calculator: LexicalCalculator,
    ) -> Result<Self, EngineError> {
        let judge = JudgeClient::new(
            backend,
            config.api_keys.clone(),
            Duration::from_secs(config.judge_timeout_secs),
        )?;
        Ok(Self::new(calculator, judge))
    }

    /// Scores one transcript. `duration_secs` is optional; when absent the
    /// speech-rate dimension is not penalized.
    #[instrument(skip(self, transcript), fields(transcript_len = transcript.len()))]
    pub async fn score(
        &self,
        transcript: &str,
        duration_secs: Option<u32>,
    ) -> Result<ScoringResult, EngineError> {
        let metrics = self
            .calculator
            .compute(transcript, duration_secs)
            .ok_or(EngineError::EmptyTranscript)?;

        let outcome = self.judge.evaluate(transcript).await;
        let verdict = normalize(outcome.verdict());

        let result = aggregate(&metrics, &verdict, duration_secs);

        info!(
            overall_score = result.overall_score,
            word_count = result.transcript_stats.word_count,
            judge_degraded = outcome.is_degraded(),
            "transcript scored"
        );

        Ok(result)
    }
}
