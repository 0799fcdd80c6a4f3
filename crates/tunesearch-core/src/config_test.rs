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

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.search_base_url.as_str(), "https://itunes.apple.com/search");
    assert_eq!(cfg.request_timeout_secs, Some(30));
    assert_eq!(cfg.user_agent, "tunesearch/0.1 (catalog-search)");
    assert_eq!(cfg.default_country, "US");
    assert_eq!(cfg.default_lang, "en_us");
    assert_eq!(cfg.default_result_limit, 20);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_LOG_LEVEL", "debug");
    map.insert("TUNESEARCH_BASE_URL", "http://localhost:8080/search");
    map.insert("TUNESEARCH_USER_AGENT", "custom-agent/2.0");
    map.insert("TUNESEARCH_COUNTRY", "TW");
    map.insert("TUNESEARCH_LANG", "zh_tw");
    map.insert("TUNESEARCH_RESULT_LIMIT", "50");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.search_base_url.as_str(), "http://localhost:8080/search");
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.default_country, "TW");
    assert_eq!(cfg.default_lang, "zh_tw");
    assert_eq!(cfg.default_result_limit, 50);
}

#[test]
fn request_timeout_zero_disables_timeout() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_REQUEST_TIMEOUT_SECS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, None);
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUNESEARCH_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(TUNESEARCH_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn base_url_must_parse() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_BASE_URL", "not a url");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUNESEARCH_BASE_URL"),
        "expected InvalidEnvVar(TUNESEARCH_BASE_URL), got: {result:?}"
    );
}

#[test]
fn base_url_rejects_non_http_scheme() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_BASE_URL", "ftp://itunes.apple.com/search");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUNESEARCH_BASE_URL"),
        "expected InvalidEnvVar(TUNESEARCH_BASE_URL), got: {result:?}"
    );
}

#[test]
fn result_limit_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_RESULT_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUNESEARCH_RESULT_LIMIT"),
        "expected InvalidEnvVar(TUNESEARCH_RESULT_LIMIT), got: {result:?}"
    );
}

#[test]
fn result_limit_above_max_is_rejected() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_RESULT_LIMIT", "201");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUNESEARCH_RESULT_LIMIT"),
        "expected InvalidEnvVar(TUNESEARCH_RESULT_LIMIT), got: {result:?}"
    );
}

#[test]
fn result_limit_at_max_is_accepted() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_RESULT_LIMIT", "200");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_result_limit, 200);
}

#[test]
fn unrecognised_vars_do_not_affect_config() {
    let mut map = HashMap::new();
    map.insert("TUNESEARCH_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.default_result_limit, 20);
}
