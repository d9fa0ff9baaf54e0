use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_introscore_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("INTROSCORE_API_KEY");
        env::remove_var("INTROSCORE_API_KEY_ALT_1");
        env::remove_var("INTROSCORE_API_KEY_ALT_2");
        env::remove_var("INTROSCORE_API_KEY_ALT_3");
        env::remove_var("INTROSCORE_API_KEY_ALT_4");
        env::remove_var("INTROSCORE_MODEL");
        env::remove_var("INTROSCORE_JUDGE_TIMEOUT_SECS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.api_keys.is_empty());
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.judge_timeout_secs, DEFAULT_JUDGE_TIMEOUT_SECS);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_introscore_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert!(config.api_keys.is_empty());
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.judge_timeout_secs, 30);
}

#[test]
#[serial]
fn test_api_keys_collected_in_slot_order() {
    clear_introscore_env();

    let config = with_env_vars(
        &[
            ("INTROSCORE_API_KEY", "primary"),
            ("INTROSCORE_API_KEY_ALT_1", "alt1"),
            ("INTROSCORE_API_KEY_ALT_3", "alt3"),
        ],
        || Config::from_env().expect("should parse"),
    );

    assert_eq!(config.api_keys, vec!["primary", "alt1", "alt3"]);
}

#[test]
#[serial]
fn test_blank_api_key_slots_filtered() {
    clear_introscore_env();

    let config = with_env_vars(
        &[
            ("INTROSCORE_API_KEY", "   "),
            ("INTROSCORE_API_KEY_ALT_2", "alt2"),
        ],
        || Config::from_env().expect("should parse"),
    );

    assert_eq!(config.api_keys, vec!["alt2"]);
}

#[test]
#[serial]
fn test_model_override() {
    clear_introscore_env();

    let config = with_env_vars(&[("INTROSCORE_MODEL", "gpt-4o-mini")], || {
        Config::from_env().expect("should parse")
    });

    assert_eq!(config.model, "gpt-4o-mini");
}

#[test]
#[serial]
fn test_timeout_override_and_errors() {
    clear_introscore_env();

    let config = with_env_vars(&[("INTROSCORE_JUDGE_TIMEOUT_SECS", "7")], || {
        Config::from_env().expect("should parse")
    });
    assert_eq!(config.judge_timeout_secs, 7);

    let err = with_env_vars(&[("INTROSCORE_JUDGE_TIMEOUT_SECS", "soon")], || {
        Config::from_env().unwrap_err()
    });
    assert!(matches!(err, ConfigError::TimeoutParseError { .. }));

    let err = with_env_vars(&[("INTROSCORE_JUDGE_TIMEOUT_SECS", "0")], || {
        Config::from_env().unwrap_err()
    });
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_validate() {
    let config = Config::default();
    assert!(config.validate().is_ok());

    let config = Config {
        model: "  ".to_string(),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyModel)));

    let config = Config {
        judge_timeout_secs: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimeout { .. })
    ));
}
