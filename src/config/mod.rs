//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `INTROSCORE_*` environment
//! variables. Rubric thresholds and keyword tables are compile-time constants
//! in [`crate::rubric`], not deployment knobs.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `INTROSCORE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Evaluator credentials, primary slot plus up to four alternates.
    /// Blank slots are skipped; the retry budget equals the list length.
    pub api_keys: Vec<String>,

    /// Judge model name. Default: `llama-3.3-70b-versatile`.
    pub model: String,

    /// Per-attempt judge timeout in seconds. Default: `30`.
    pub judge_timeout_secs: u64,
}

/// Default judge model used when `INTROSCORE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default per-attempt judge timeout in seconds.
pub const DEFAULT_JUDGE_TIMEOUT_SECS: u64 = 30;

impl Default for Config {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            model: DEFAULT_MODEL.to_string(),
            judge_timeout_secs: DEFAULT_JUDGE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const ENV_API_KEY: &'static str = "INTROSCORE_API_KEY";
    const ENV_API_KEY_ALTS: [&'static str; 4] = [
        "INTROSCORE_API_KEY_ALT_1",
        "INTROSCORE_API_KEY_ALT_2",
        "INTROSCORE_API_KEY_ALT_3",
        "INTROSCORE_API_KEY_ALT_4",
    ];
    const ENV_MODEL: &'static str = "INTROSCORE_MODEL";
    const ENV_JUDGE_TIMEOUT_SECS: &'static str = "INTROSCORE_JUDGE_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_keys = Self::collect_api_keys_from_env();
        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let judge_timeout_secs = Self::parse_timeout_from_env(defaults.judge_timeout_secs)?;

        Ok(Self {
            api_keys,
            model,
            judge_timeout_secs,
        })
    }

    /// Validates basic invariants. An empty credential list is deliberately
    /// not an error here: it only becomes fatal when the judge client is
    /// constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if self.judge_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.judge_timeout_secs.to_string(),
            });
        }

        Ok(())
    }

    fn collect_api_keys_from_env() -> Vec<String> {
        std::iter::once(Self::ENV_API_KEY)
            .chain(Self::ENV_API_KEY_ALTS)
            .filter_map(|var| env::var(var).ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_timeout_from_env(default: u64) -> Result<u64, ConfigError> {
        match env::var(Self::ENV_JUDGE_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 =
                    value
                        .parse()
                        .map_err(|e| ConfigError::TimeoutParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(secs)
            }
            Err(_) => Ok(default),
        }
    }
}
