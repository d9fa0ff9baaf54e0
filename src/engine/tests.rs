use std::time::Duration;

use serde_json::json;

use crate::judge::{JudgeClient, MockJudgeBackend};
use crate::metrics::LexicalCalculator;

use super::*;

fn engine_with(backend: MockJudgeBackend) -> ScoringEngine<MockJudgeBackend> {
    let judge = JudgeClient::new(
        backend,
        vec!["k1".to_string(), "k2".to_string()],
        Duration::from_secs(5),
    )
    .unwrap();
    ScoringEngine::new(LexicalCalculator::default(), judge)
}

#[tokio::test]
async fn test_empty_transcript_is_an_invalid_input_error() {
    let backend = MockJudgeBackend::new();
    let engine = engine_with(backend.clone());

    let err = engine.score("", Some(6)).await.unwrap_err();
    assert!(matches!(err, EngineError::EmptyTranscript));
    // The judge is never consulted for unscoreable input.
    assert_eq!(backend.attempt_count(), 0);
}

#[tokio::test]
async fn test_full_scoring_path_with_answered_judge() {
    let backend = MockJudgeBackend::new();
    backend.push_verdict(json!({
        "Salutation Level": "Good",
        "Keyword Presence": ["name", "age"],
        "Flow": "Order followed",
        "Engagement": "Positive"
    }));
    let engine = engine_with(backend);

    let result = engine
        .score("Hello everyone, my name is Asha, I am 10 years old", Some(6))
        .await
        .unwrap();

    assert_eq!(result.transcript_stats.word_count, 11);
    let sum: u32 = result.breakdown.iter().map(|e| e.score).sum();
    assert_eq!(result.overall_score, sum);
    assert!(result.overall_score <= 100);

    // Content: salutation 4 + keywords 8 + flow 5.
    assert_eq!(result.entry("Content & Structure").unwrap().score, 17);
    // 110 WPM sits in the slow band.
    assert_eq!(result.entry("Speech Rate").unwrap().score, 6);
    // Degraded grammar/sentiment capabilities default to maxima.
    assert_eq!(result.entry("Language & Grammar").unwrap().score, 20);
    assert_eq!(result.entry("Engagement").unwrap().score, 15);
}

#[tokio::test]
async fn test_judge_exhaustion_degrades_but_still_scores() {
    let backend = MockJudgeBackend::new();
    // Empty script: both credentials fail, fallback verdict applies.
    let engine = engine_with(backend.clone());

    let result = engine
        .score("Hello everyone, my name is Asha, I am 10 years old", Some(6))
        .await
        .unwrap();

    assert_eq!(backend.attempt_count(), 2);
    let content = result.entry("Content & Structure").unwrap();
    assert_eq!(content.score, 2);
    assert!(content.feedback.contains("Order Not followed"));
}

#[tokio::test]
async fn test_from_config_requires_credentials() {
    let config = crate::config::Config {
        api_keys: vec![],
        ..Default::default()
    };
    let err = ScoringEngine::from_config(
        &config,
        MockJudgeBackend::new(),
        LexicalCalculator::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Judge(crate::judge::JudgeError::NoCredentials)
    ));
}
