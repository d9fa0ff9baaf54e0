//! Scripted judge backend for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::backend::JudgeBackend;
use super::error::JudgeError;

/// Judge backend that replays a scripted queue of responses and records the
/// credential used for every attempt.
///
/// When the queue runs dry, further attempts fail, which makes exhaustion
/// scenarios trivial to set up (an empty script fails every attempt).
#[derive(Clone, Debug, Default)]
pub struct MockJudgeBackend {
    script: Arc<Mutex<VecDeque<Result<Value, JudgeError>>>>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockJudgeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful verdict.
    pub fn push_verdict(&self, verdict: Value) {
        self.script.lock().push_back(Ok(verdict));
    }

    /// Queues a failing attempt.
    pub fn push_failure(&self, reason: &str) {
        self.script.lock().push_back(Err(JudgeError::RequestFailed {
            reason: reason.to_string(),
        }));
    }

    /// Credentials observed so far, in attempt order.
    pub fn seen_credentials(&self) -> Vec<String> {
        self.seen.lock().clone()
    }

    /// Number of attempts made against this backend.
    pub fn attempt_count(&self) -> usize {
        self.seen.lock().len()
    }
}

#[async_trait]
impl JudgeBackend for MockJudgeBackend {
    async fn evaluate(&self, credential: &str, _prompt: &str) -> Result<Value, JudgeError> {
        self.seen.lock().push(credential.to_string());
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| {
                Err(JudgeError::RequestFailed {
                    reason: "scripted responses exhausted".to_string(),
                })
            })
    }
}
