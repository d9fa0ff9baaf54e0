use thiserror::Error;

/// Errors from the evaluator client and its backends.
///
/// Only [`JudgeError::NoCredentials`] ever escapes the client boundary; it is
/// a configuration error raised at construction time. Everything else is a
/// per-attempt failure absorbed by credential rotation.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// No credentials were configured at all. Not retryable.
    #[error("no evaluator credentials configured")]
    NoCredentials,

    /// The backend call itself failed (network, auth, provider error).
    #[error("evaluator request failed: {reason}")]
    RequestFailed { reason: String },

    /// The backend returned a body that could not be parsed as JSON.
    #[error("evaluator response was not valid JSON: {reason}")]
    MalformedResponse { reason: String },

    /// A single attempt exceeded the per-attempt deadline.
    #[error("evaluator attempt timed out after {seconds}s")]
    Timeout { seconds: u64 },
}
