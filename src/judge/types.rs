use serde_json::{Value, json};

/// Outcome of one evaluator invocation.
///
/// `Exhausted` carries the fixed neutral fallback verdict, so callers always
/// receive a well-formed verdict and can still tell a degraded result from a
/// real one without inspecting logs.
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeOutcome {
    /// The judge answered within the retry budget.
    Answered {
        /// Raw, untyped verdict as returned by the judge.
        verdict: Value,
        /// Number of attempts consumed (1-based).
        attempts: usize,
    },
    /// Every credential failed; `verdict` is the neutral fallback.
    Exhausted {
        verdict: Value,
        attempts: usize,
        last_error: String,
    },
}

impl JudgeOutcome {
    /// The verdict to normalize, fallback or not.
    pub fn verdict(&self) -> &Value {
        match self {
            JudgeOutcome::Answered { verdict, .. } | JudgeOutcome::Exhausted { verdict, .. } => {
                verdict
            }
        }
    }

    /// Attempts consumed before this outcome was reached.
    pub fn attempts(&self) -> usize {
        match self {
            JudgeOutcome::Answered { attempts, .. } | JudgeOutcome::Exhausted { attempts, .. } => {
                *attempts
            }
        }
    }

    /// Returns `true` when the fallback verdict is in play.
    pub fn is_degraded(&self) -> bool {
        matches!(self, JudgeOutcome::Exhausted { .. })
    }
}

/// The neutral verdict substituted when every credential is exhausted.
pub fn fallback_verdict() -> Value {
    json!({
        "Salutation Level": "Normal",
        "Keyword Presence": [],
        "Flow": "Order Not followed",
        "Engagement": "Neutral",
    })
}
