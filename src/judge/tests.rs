use std::time::Duration;

use serde_json::json;

use super::backend::parse_verdict_text;
use super::*;

const TIMEOUT: Duration = Duration::from_secs(5);

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_zero_credentials_is_a_construction_error() {
    let backend = MockJudgeBackend::new();
    let err = JudgeClient::new(backend, vec![], TIMEOUT).unwrap_err();
    assert!(matches!(err, JudgeError::NoCredentials));
}

#[test]
fn test_blank_credentials_are_filtered_out() {
    let backend = MockJudgeBackend::new();
    let err = JudgeClient::new(backend, keys(&["", "   "]), TIMEOUT).unwrap_err();
    assert!(matches!(err, JudgeError::NoCredentials));

    let backend = MockJudgeBackend::new();
    let client = JudgeClient::new(backend, keys(&["", "k1", " "]), TIMEOUT).unwrap();
    assert_eq!(client.credential_count(), 1);
}

#[tokio::test]
async fn test_first_attempt_success_consumes_one_credential() {
    let backend = MockJudgeBackend::new();
    backend.push_verdict(json!({"Salutation Level": "Good"}));
    let client = JudgeClient::new(backend.clone(), keys(&["k1", "k2"]), TIMEOUT).unwrap();

    let outcome = client.evaluate("hello everyone").await;
    assert!(!outcome.is_degraded());
    assert_eq!(outcome.attempts(), 1);
    assert_eq!(outcome.verdict()["Salutation Level"], "Good");
    assert_eq!(backend.seen_credentials(), vec!["k1"]);
}

#[tokio::test]
async fn test_failover_rotates_to_next_credential() {
    let backend = MockJudgeBackend::new();
    backend.push_failure("rate limited");
    backend.push_verdict(json!({"Flow": "Order followed"}));
    let client = JudgeClient::new(backend.clone(), keys(&["k1", "k2", "k3"]), TIMEOUT).unwrap();

    let outcome = client.evaluate("hello").await;
    assert!(!outcome.is_degraded());
    assert_eq!(outcome.attempts(), 2);
    assert_eq!(backend.seen_credentials(), vec!["k1", "k2"]);
}

#[tokio::test]
async fn test_exhaustion_makes_exactly_k_attempts_then_falls_back() {
    let backend = MockJudgeBackend::new();
    // Empty script: every attempt fails.
    let client = JudgeClient::new(backend.clone(), keys(&["k1", "k2", "k3"]), TIMEOUT).unwrap();

    let outcome = client.evaluate("hello").await;
    assert!(outcome.is_degraded());
    assert_eq!(outcome.attempts(), 3);
    assert_eq!(backend.attempt_count(), 3);
    assert_eq!(backend.seen_credentials(), vec!["k1", "k2", "k3"]);
    assert_eq!(outcome.verdict(), &fallback_verdict());

    match outcome {
        JudgeOutcome::Exhausted { last_error, .. } => {
            assert!(last_error.contains("scripted responses exhausted"));
        }
        other => panic!("expected Exhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cursor_wraps_across_calls() {
    let backend = MockJudgeBackend::new();
    backend.push_verdict(json!({}));
    backend.push_verdict(json!({}));
    backend.push_verdict(json!({}));
    let client = JudgeClient::new(backend.clone(), keys(&["k1", "k2"]), TIMEOUT).unwrap();

    client.evaluate("a").await;
    client.evaluate("b").await;
    client.evaluate("c").await;

    // Round-robin across calls: k1, k2, then wrap back to k1.
    assert_eq!(backend.seen_credentials(), vec!["k1", "k2", "k1"]);
}

#[test]
fn test_fallback_verdict_shape() {
    let v = fallback_verdict();
    assert_eq!(v["Salutation Level"], "Normal");
    assert_eq!(v["Keyword Presence"], json!([]));
    assert_eq!(v["Flow"], "Order Not followed");
    assert_eq!(v["Engagement"], "Neutral");
}

#[test]
fn test_parse_verdict_text_plain_json() {
    let v = parse_verdict_text(r#"{"Flow": 5}"#).unwrap();
    assert_eq!(v["Flow"], 5);
}

#[test]
fn test_parse_verdict_text_strips_code_fences() {
    let fenced = "```json\n{\"Flow\": \"Order followed\"}\n```";
    let v = parse_verdict_text(fenced).unwrap();
    assert_eq!(v["Flow"], "Order followed");

    let bare_fence = "```\n{\"Engagement\": \"Positive\"}\n```";
    let v = parse_verdict_text(bare_fence).unwrap();
    assert_eq!(v["Engagement"], "Positive");
}

#[test]
fn test_parse_verdict_text_rejects_non_json() {
    let err = parse_verdict_text("definitely not json").unwrap_err();
    assert!(matches!(err, JudgeError::MalformedResponse { .. }));
}
