use thiserror::Error;

use crate::judge::JudgeError;

/// Errors the scoring engine surfaces to callers.
///
/// Only invalid input and configuration problems reach this level; evaluator
/// and capability degradation is absorbed internally and shows up in feedback
/// text instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The transcript tokenized to zero words.
    #[error("transcript contains no scoreable words")]
    EmptyTranscript,

    /// Evaluator configuration error (no credentials).
    #[error(transparent)]
    Judge(#[from] JudgeError),
}
