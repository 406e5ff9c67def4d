use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let non_blank = |var: &str| lookup(var).ok().filter(|v| !v.trim().is_empty());

    // The store credentials were historically exposed under `VITE_`-prefixed
    // names; those are still honoured when the plain names are unset or blank.
    let require_with_fallback = |var: &str, fallback: &str| -> Result<String, ConfigError> {
        non_blank(var)
            .or_else(|| non_blank(fallback))
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let shopify_store_name =
        require_with_fallback("SHOPIFY_STORE_NAME", "VITE_SHOPIFY_STORE_NAME")?;
    let shopify_access_token =
        require_with_fallback("SHOPIFY_ACCESS_TOKEN", "VITE_SHOPIFY_APP_ACCESS_TOKEN")?;
    let shopify_api_version = or_default("REPRICER_SHOPIFY_API_VERSION", "2023-10");

    let env = parse_environment(&or_default("REPRICER_ENV", "development"))?;
    let bind_addr = parse_addr("REPRICER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("REPRICER_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("REPRICER_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("REPRICER_USER_AGENT", "repricer/0.1 (catalog-sync)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        shopify_store_name,
        shopify_access_token,
        shopify_api_version,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "REPRICER_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
