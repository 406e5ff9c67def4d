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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("SHOPIFY_STORE_NAME", "jewels.myshopify.com");
    m.insert("SHOPIFY_ACCESS_TOKEN", "shpat_test");
    m
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
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "REPRICER_ENV"));
}

#[test]
fn build_app_config_fails_without_store_name() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPIFY_STORE_NAME"),
        "expected MissingEnvVar(SHOPIFY_STORE_NAME), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_access_token() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("SHOPIFY_STORE_NAME", "jewels.myshopify.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPIFY_ACCESS_TOKEN"),
        "expected MissingEnvVar(SHOPIFY_ACCESS_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map = full_env();
    map.insert("SHOPIFY_ACCESS_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPIFY_ACCESS_TOKEN"),
        "expected MissingEnvVar(SHOPIFY_ACCESS_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_vite_prefixed_fallbacks() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("VITE_SHOPIFY_STORE_NAME", "legacy.myshopify.com");
    map.insert("VITE_SHOPIFY_APP_ACCESS_TOKEN", "shpat_legacy");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.shopify_store_name, "legacy.myshopify.com");
    assert_eq!(cfg.shopify_access_token, "shpat_legacy");
}

#[test]
fn build_app_config_prefers_plain_names_over_fallbacks() {
    let mut map = full_env();
    map.insert("VITE_SHOPIFY_STORE_NAME", "legacy.myshopify.com");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.shopify_store_name, "jewels.myshopify.com");
}

#[test]
fn build_app_config_falls_back_when_plain_name_is_blank() {
    let mut map = full_env();
    map.insert("SHOPIFY_STORE_NAME", "   ");
    map.insert("VITE_SHOPIFY_STORE_NAME", "legacy.myshopify.com");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.shopify_store_name, "legacy.myshopify.com");
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.shopify_api_version, "2023-10");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "repricer/0.1 (catalog-sync)");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("REPRICER_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPRICER_BIND_ADDR"),
        "expected InvalidEnvVar(REPRICER_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = full_env();
    map.insert("REPRICER_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPRICER_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(REPRICER_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_overrides_api_version() {
    let mut map = full_env();
    map.insert("REPRICER_SHOPIFY_API_VERSION", "2024-07");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.shopify_api_version, "2024-07");
    assert_eq!(cfg.store_config().api_version, "2024-07");
}

#[test]
fn store_config_carries_credentials() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let store = cfg.store_config();
    assert_eq!(store.store_domain, "jewels.myshopify.com");
    assert_eq!(store.access_token, "shpat_test");
    assert_eq!(store.request_timeout_secs, 30);
}

#[test]
fn debug_output_redacts_access_token() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let app_debug = format!("{cfg:?}");
    let store_debug = format!("{:?}", cfg.store_config());
    assert!(!app_debug.contains("shpat_test"), "{app_debug}");
    assert!(!store_debug.contains("shpat_test"), "{store_debug}");
    assert!(store_debug.contains("[redacted]"));
}
