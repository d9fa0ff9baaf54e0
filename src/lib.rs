//! Introscore library crate (used by the CLI binary and integration tests).
//!
//! Scores a spoken self-introduction transcript on five weighted rubric
//! dimensions (content/structure, speech rate, grammar/vocabulary, clarity,
//! engagement) by combining deterministic rule-based text metrics with a
//! normalized verdict from an external semantic judge.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Environment-backed engine configuration
//! - [`LexicalCalculator`], [`LexicalMetrics`] - Rule-based text metrics
//! - [`JudgeClient`], [`GenaiJudge`], [`JudgeOutcome`] - Credential-rotating
//!   evaluator client with retry-with-failover
//! - [`normalize`], [`NormalizedVerdict`] - Defensive coercion of the judge's
//!   loosely-typed verdict
//! - [`aggregate`], [`ScoringResult`] - Score merging and the final breakdown
//! - [`ScoringEngine`], [`EngineError`] - End-to-end orchestration
//!
//! Mock implementations are available behind `#[cfg(any(test, feature =
//! "mock"))]`.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod judge;
pub mod metrics;
pub mod normalize;
pub mod rubric;

pub use aggregate::{BreakdownEntry, ScoringResult, TranscriptStats, aggregate};
pub use config::{Config, ConfigError};
pub use engine::{EngineError, ScoringEngine};
pub use judge::{GenaiJudge, JudgeBackend, JudgeClient, JudgeError, JudgeOutcome};
#[cfg(any(test, feature = "mock"))]
pub use judge::MockJudgeBackend;
pub use metrics::{GrammarChecker, LexicalCalculator, LexicalMetrics, SentimentAnalyzer};
#[cfg(any(test, feature = "mock"))]
pub use metrics::{MockGrammarChecker, MockSentimentAnalyzer};
pub use normalize::{NormalizedVerdict, SalutationLevel, normalize};
