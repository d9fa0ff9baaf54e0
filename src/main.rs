//! Introscore CLI entrypoint.
//!
//! Usage: `introscore <transcript-file|-> [duration-secs]`
//!
//! Reads a transcript (from a file, or stdin when the path is `-`), scores it
//! and prints the result as pretty JSON. Evaluator credentials and the judge
//! model come from `INTROSCORE_*` environment variables.

use std::io::Read;

use anyhow::Context;

use introscore::{Config, GenaiJudge, LexicalCalculator, ScoringEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: introscore <transcript-file|-> [duration-secs]");
        std::process::exit(2);
    };

    let duration_secs = match args.next() {
        Some(raw) => Some(
            raw.parse::<u32>()
                .with_context(|| format!("invalid duration '{raw}'"))?,
        ),
        None => None,
    };

    let transcript = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read transcript from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read transcript file '{path}'"))?
    };

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        model = %config.model,
        credentials = config.api_keys.len(),
        "introscore starting"
    );

    // No grammar/sentiment capabilities are wired by default; those
    // sub-scores run in degraded mode and default to their maxima.
    let backend = GenaiJudge::new(config.model.clone());
    let engine = ScoringEngine::from_config(&config, backend, LexicalCalculator::default())?;

    let result = engine.score(&transcript, duration_secs).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
