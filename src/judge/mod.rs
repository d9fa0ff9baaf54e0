//! Credential-rotating client for the external semantic judge.
//!
//! The judge is asked for a structured JSON assessment of the transcript
//! (salutation strength, topic keywords, ordering, tone). Provider access
//! rotates round-robin over the configured credentials; a failed attempt
//! rotates to the next credential until the budget (one attempt per
//! credential) is spent, at which point a fixed neutral fallback verdict is
//! returned instead of an error.

pub mod backend;
pub mod client;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use backend::{GenaiJudge, JudgeBackend};
pub use client::JudgeClient;
pub use error::JudgeError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockJudgeBackend;
pub use types::{JudgeOutcome, fallback_verdict};
