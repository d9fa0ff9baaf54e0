use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ChatResponseFormat};
use genai::resolver::{AuthData, AuthResolver};
use serde_json::Value;
use tracing::debug;

use super::error::JudgeError;

/// One attempt against the semantic judge with a specific credential.
///
/// Implementations must not retry internally; rotation and the retry budget
/// belong to [`JudgeClient`](super::client::JudgeClient).
#[async_trait]
pub trait JudgeBackend: Send + Sync {
    async fn evaluate(&self, credential: &str, prompt: &str) -> Result<Value, JudgeError>;
}

/// Judge backend that talks to an LLM provider through `genai`.
///
/// A fresh client is built per attempt so the rotated credential can be bound
/// through an auth resolver instead of ambient environment variables.
#[derive(Debug, Clone)]
pub struct GenaiJudge {
    model: String,
}

impl GenaiJudge {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl JudgeBackend for GenaiJudge {
    async fn evaluate(&self, credential: &str, prompt: &str) -> Result<Value, JudgeError> {
        let key = credential.to_string();
        let auth = AuthResolver::from_resolver_fn(
            move |_model_iden: genai::ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(key.clone())))
            },
        );
        let client = Client::builder().with_auth_resolver(auth).build();

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        let options = ChatOptions::default().with_response_format(ChatResponseFormat::JsonMode);

        debug!(model = %self.model, "sending judge request");

        let response = client
            .exec_chat(&self.model, request, Some(&options))
            .await
            .map_err(|e| JudgeError::RequestFailed {
                reason: e.to_string(),
            })?;

        let text = response
            .first_text()
            .ok_or_else(|| JudgeError::MalformedResponse {
                reason: "empty response body".to_string(),
            })?;

        parse_verdict_text(text)
    }
}

/// Parses the judge's reply into a JSON value, stripping Markdown code fences
/// some providers wrap around JSON-mode output.
pub(crate) fn parse_verdict_text(text: &str) -> Result<Value, JudgeError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    serde_json::from_str(body).map_err(|e| JudgeError::MalformedResponse {
        reason: e.to_string(),
    })
}
