use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn config_with(var: &str, value: &str) -> Result<AppConfig, ConfigError> {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert(var, value);
    build_app_config(lookup_from_map(&map))
}

fn assert_invalid(result: Result<AppConfig, ConfigError>, expected_var: &str) {
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == expected_var),
        "expected InvalidEnvVar({expected_var}), got: {result:?}"
    );
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "HERITAGE_ENV"));
}

#[test]
fn build_app_config_defaults_from_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "heritage/0.1 (site-catalog)");
    assert!(!cfg.require_success_status);
    assert_eq!(cfg.marker_class, "col-sm-12");
    assert_eq!(
        cfg.container_filter,
        ContainerFilterKind::Positional {
            leading: 2,
            trailing: 2
        }
    );
    assert_eq!(cfg.state_key, KeyPolicy::Title);
    assert_eq!(cfg.summary_chars, 100);
}

#[test]
fn trim_counts_override_positional_filter() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("HERITAGE_TRIM_LEADING", "1");
    map.insert("HERITAGE_TRIM_TRAILING", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.container_filter,
        ContainerFilterKind::Positional {
            leading: 1,
            trailing: 0
        }
    );
}

#[test]
fn content_shape_filter_selected() {
    let cfg = config_with("HERITAGE_CONTAINER_FILTER", "content-shape").unwrap();
    assert_eq!(cfg.container_filter, ContainerFilterKind::ContentShape);
}

#[test]
fn unknown_container_filter_fails() {
    assert_invalid(
        config_with("HERITAGE_CONTAINER_FILTER", "heuristic"),
        "HERITAGE_CONTAINER_FILTER",
    );
}

#[test]
fn invalid_trim_count_fails() {
    assert_invalid(
        config_with("HERITAGE_TRIM_LEADING", "-1"),
        "HERITAGE_TRIM_LEADING",
    );
}

#[test]
fn state_key_policies_parse() {
    assert_eq!(
        config_with("HERITAGE_STATE_KEY", "position")
            .unwrap()
            .state_key,
        KeyPolicy::Position
    );
    assert_eq!(
        config_with("HERITAGE_STATE_KEY", "content-hash")
            .unwrap()
            .state_key,
        KeyPolicy::ContentHash
    );
}

#[test]
fn unknown_state_key_fails() {
    assert_invalid(config_with("HERITAGE_STATE_KEY", "uuid"), "HERITAGE_STATE_KEY");
}

#[test]
fn require_success_status_accepts_boolean_spellings() {
    assert!(
        config_with("HERITAGE_REQUIRE_SUCCESS_STATUS", "true")
            .unwrap()
            .require_success_status
    );
    assert!(
        config_with("HERITAGE_REQUIRE_SUCCESS_STATUS", "1")
            .unwrap()
            .require_success_status
    );
    assert!(
        !config_with("HERITAGE_REQUIRE_SUCCESS_STATUS", "no")
            .unwrap()
            .require_success_status
    );
}

#[test]
fn require_success_status_rejects_garbage() {
    assert_invalid(
        config_with("HERITAGE_REQUIRE_SUCCESS_STATUS", "sometimes"),
        "HERITAGE_REQUIRE_SUCCESS_STATUS",
    );
}

#[test]
fn request_timeout_override_and_invalid() {
    let cfg = config_with("HERITAGE_REQUEST_TIMEOUT_SECS", "5").unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_invalid(
        config_with("HERITAGE_REQUEST_TIMEOUT_SECS", "soon"),
        "HERITAGE_REQUEST_TIMEOUT_SECS",
    );
}

#[test]
fn summary_chars_override() {
    let cfg = config_with("HERITAGE_SUMMARY_CHARS", "40").unwrap();
    assert_eq!(cfg.summary_chars, 40);
}

#[test]
fn empty_marker_class_fails() {
    assert_invalid(config_with("HERITAGE_MARKER_CLASS", "  "), "HERITAGE_MARKER_CLASS");
}

#[test]
fn source_url_must_be_absolute_http() {
    assert_invalid(
        config_with("HERITAGE_SOURCE_URL", "/about-ethiopia"),
        "HERITAGE_SOURCE_URL",
    );
    assert_invalid(
        config_with("HERITAGE_SOURCE_URL", "ftp://example.com/page"),
        "HERITAGE_SOURCE_URL",
    );
    assert_invalid(
        config_with("HERITAGE_SOURCE_URL", "https://"),
        "HERITAGE_SOURCE_URL",
    );
}

#[test]
fn source_url_with_malformed_host_fails() {
    assert_invalid(
        config_with("HERITAGE_SOURCE_URL", "https://bad host/x"),
        "HERITAGE_SOURCE_URL",
    );
    assert_invalid(
        config_with("HERITAGE_SOURCE_URL", "http://[::1/sites"),
        "HERITAGE_SOURCE_URL",
    );
}

#[test]
fn source_url_override_accepted() {
    let cfg = config_with("HERITAGE_SOURCE_URL", "http://127.0.0.1:8080/sites").unwrap();
    assert_eq!(cfg.source_url, "http://127.0.0.1:8080/sites");
}
