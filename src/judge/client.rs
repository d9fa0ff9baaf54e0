use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::rubric;

use super::backend::JudgeBackend;
use super::error::JudgeError;
use super::types::{JudgeOutcome, fallback_verdict};

/// Evaluator client with round-robin credential rotation and retry-with-
/// failover.
///
/// One call makes at most N attempts, N being the number of configured
/// credentials; each attempt consumes the next credential. The rotation
/// cursor is an atomic counter, so concurrent scoring requests advance it
/// without racing.
pub struct JudgeClient<B> {
    backend: B,
    credentials: Vec<String>,
    cursor: AtomicUsize,
    attempt_timeout: Duration,
}

impl<B> std::fmt::Debug for JudgeClient<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JudgeClient")
            .field("credentials", &self.credentials.len())
            .field("attempt_timeout", &self.attempt_timeout)
            .finish()
    }
}

impl<B: JudgeBackend> JudgeClient<B> {
    /// Creates a client over `credentials`. Blank entries are dropped;
    /// failing with [`JudgeError::NoCredentials`] when none remain is the
    /// only error this component ever propagates.
    pub fn new(
        backend: B,
        credentials: Vec<String>,
        attempt_timeout: Duration,
    ) -> Result<Self, JudgeError> {
        let credentials: Vec<String> = credentials
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        if credentials.is_empty() {
            return Err(JudgeError::NoCredentials);
        }

        Ok(Self {
            backend,
            credentials,
            cursor: AtomicUsize::new(0),
            attempt_timeout,
        })
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    fn next_credential(&self) -> &str {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.credentials.len();
        &self.credentials[index]
    }

    /// Asks the judge for a verdict on `transcript`.
    ///
    /// Never fails: exhaustion of all credentials yields
    /// [`JudgeOutcome::Exhausted`] carrying the neutral fallback verdict.
    pub async fn evaluate(&self, transcript: &str) -> JudgeOutcome {
        let prompt = format!("{}\n\nTranscript:\n{}", rubric::JUDGE_PROMPT, transcript);
        let max_attempts = self.credentials.len();
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            let credential = self.next_credential();

            let result =
                tokio::time::timeout(self.attempt_timeout, self.backend.evaluate(credential, &prompt))
                    .await;

            match result {
                Ok(Ok(verdict)) => {
                    info!(attempt, max_attempts, "judge verdict received");
                    return JudgeOutcome::Answered { verdict, attempts: attempt };
                }
                Ok(Err(e)) => {
                    warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "judge attempt failed, rotating credential"
                    );
                    last_error = e.to_string();
                }
                Err(_) => {
                    let e = JudgeError::Timeout {
                        seconds: self.attempt_timeout.as_secs(),
                    };
                    warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "judge attempt timed out, rotating credential"
                    );
                    last_error = e.to_string();
                }
            }
        }

        error!(
            attempts = max_attempts,
            last_error = %last_error,
            "all judge credentials exhausted, using neutral fallback verdict"
        );

        JudgeOutcome::Exhausted {
            verdict: fallback_verdict(),
            attempts: max_attempts,
            last_error,
        }
    }
}
