// Integration tests for environment-backed configuration loading.
//
// Everything goes through `Config::from_lookup` with an in-memory variable
// map, so tests never touch (or race on) the real process environment.

use meeting_recap::config::{Config, ConfigError, DEV_SECRET_KEY};
use std::collections::HashMap;

const BASE_ENV: [(&str, &str); 4] = [
    ("GROQ_API_KEY", "gsk-test-key"),
    ("MAIL_SERVER", "smtp.example.com"),
    ("MAIL_USERNAME", "notes@example.com"),
    ("MAIL_PASSWORD", "hunter2"),
];

fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

fn base_plus<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut pairs: Vec<(&str, &str)> = BASE_ENV.to_vec();
    pairs.extend_from_slice(extra);
    pairs
}

#[test]
fn test_loads_with_only_required_vars() {
    let config = load(&BASE_ENV).unwrap();

    assert_eq!(config.groq_api_key, "gsk-test-key");
    assert_eq!(config.mail_server, "smtp.example.com");
    assert_eq!(config.mail_username, "notes@example.com");
    assert_eq!(config.mail_password, "hunter2");

    // Optional settings fall back to their documented defaults.
    assert_eq!(config.mail_port, 587);
    assert!(config.mail_use_tls);
    assert_eq!(config.http_port, 5000);
    assert_eq!(config.secret_key, DEV_SECRET_KEY);
}

#[test]
fn test_missing_everything_lists_all_names() {
    let err = load(&[]).unwrap_err();

    match err {
        ConfigError::MissingVars(names) => {
            assert_eq!(
                names,
                ["GROQ_API_KEY", "MAIL_SERVER", "MAIL_USERNAME", "MAIL_PASSWORD"]
            );
        }
        other => panic!("expected MissingVars, got {other:?}"),
    }
}

#[test]
fn test_missing_vars_error_names_each_one() {
    // Only two of the four required variables are set; the error must name
    // both absent ones in a single message rather than failing one at a time.
    let err = load(&[
        ("MAIL_SERVER", "smtp.example.com"),
        ("MAIL_USERNAME", "notes@example.com"),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Missing environment variables: GROQ_API_KEY, MAIL_PASSWORD"
    );
}

#[test]
fn test_empty_value_counts_as_missing() {
    let mut pairs = BASE_ENV.to_vec();
    pairs[1] = ("MAIL_SERVER", "");

    let err = load(&pairs).unwrap_err();
    assert_eq!(err.to_string(), "Missing environment variables: MAIL_SERVER");
}

#[test]
fn test_mail_port_override() {
    let config = load(&base_plus(&[("MAIL_PORT", "2525")])).unwrap();
    assert_eq!(config.mail_port, 2525);
}

#[test]
fn test_mail_port_tolerates_surrounding_whitespace() {
    let config = load(&base_plus(&[("MAIL_PORT", " 465 ")])).unwrap();
    assert_eq!(config.mail_port, 465);
}

#[test]
fn test_invalid_mail_port_is_rejected() {
    let err = load(&base_plus(&[("MAIL_PORT", "smtp")])).unwrap_err();

    match err {
        ConfigError::InvalidValue { name, value } => {
            assert_eq!(name, "MAIL_PORT");
            assert_eq!(value, "smtp");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_invalid_http_port_is_rejected() {
    let err = load(&base_plus(&[("PORT", "65536")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_http_port_override() {
    let config = load(&base_plus(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.http_port, 8080);
}

#[test]
fn test_tls_flag_truthy_forms() {
    for form in ["true", "True", "TRUE", "1", "t", "T"] {
        let config = load(&base_plus(&[("MAIL_USE_TLS", form)])).unwrap();
        assert!(config.mail_use_tls, "{form:?} should enable TLS");
    }
}

#[test]
fn test_tls_flag_other_values_disable() {
    // Anything outside the truthy set means "off", including values that
    // look affirmative and the set-but-empty case.
    for form in ["false", "0", "no", "yes", "enabled", ""] {
        let config = load(&base_plus(&[("MAIL_USE_TLS", form)])).unwrap();
        assert!(!config.mail_use_tls, "{form:?} should disable TLS");
    }
}

#[test]
fn test_secret_key_override() {
    let config = load(&base_plus(&[("SECRET_KEY", "prod-secret")])).unwrap();

    assert_eq!(config.secret_key, "prod-secret");
    assert!(!config.uses_dev_secret_key());
}

#[test]
fn test_default_secret_key_is_flagged() {
    let config = load(&BASE_ENV).unwrap();
    assert!(config.uses_dev_secret_key());
}
