use url::Url;

use crate::app_config::{AppConfig, DEFAULT_SEARCH_BASE_URL};
use crate::ConfigError;

/// Upper bound the search endpoint accepts for the `limit` parameter.
const MAX_RESULT_LIMIT: u32 = 200;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
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

    let log_level = or_default("TUNESEARCH_LOG_LEVEL", "info");

    let search_base_url = parse_base_url(
        "TUNESEARCH_BASE_URL",
        &or_default("TUNESEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL),
    )?;

    let request_timeout_secs = match parse_u64("TUNESEARCH_REQUEST_TIMEOUT_SECS", "30")? {
        0 => None,
        secs => Some(secs),
    };

    let user_agent = or_default("TUNESEARCH_USER_AGENT", "tunesearch/0.1 (catalog-search)");
    let default_country = or_default("TUNESEARCH_COUNTRY", "US");
    let default_lang = or_default("TUNESEARCH_LANG", "en_us");

    let default_result_limit = parse_u32("TUNESEARCH_RESULT_LIMIT", "20")?;
    if default_result_limit == 0 || default_result_limit > MAX_RESULT_LIMIT {
        return Err(ConfigError::InvalidEnvVar {
            var: "TUNESEARCH_RESULT_LIMIT".to_string(),
            reason: format!("must be between 1 and {MAX_RESULT_LIMIT}, got {default_result_limit}"),
        });
    }

    Ok(AppConfig {
        log_level,
        search_base_url,
        request_timeout_secs,
        user_agent,
        default_country,
        default_lang,
        default_result_limit,
    })
}

fn parse_base_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
