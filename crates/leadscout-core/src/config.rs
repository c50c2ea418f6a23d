use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_TOGETHER_BASE_URL: &str = "https://api.together.xyz/v1";
const DEFAULT_SEARCHAPI_BASE_URL: &str = "https://www.searchapi.io";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a credential is missing or a value is invalid.
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
/// Returns `ConfigError` if a credential is missing or a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // A credential that is set but blank is treated the same as an unset one.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let together_api_key = require("TOGETHER_API")?;
    let search_api_key = require("SEARCH_API")?;
    let openai_api_key = require("OPENAI_API")?;

    let together_base_url = or_default("LEADSCOUT_TOGETHER_BASE_URL", DEFAULT_TOGETHER_BASE_URL);
    let searchapi_base_url = or_default("LEADSCOUT_SEARCHAPI_BASE_URL", DEFAULT_SEARCHAPI_BASE_URL);
    let openai_base_url = or_default("LEADSCOUT_OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL);

    let request_timeout_secs = parse_u64("LEADSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let probe_timeout_secs = parse_u64("LEADSCOUT_PROBE_TIMEOUT_SECS", "120")?;
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "warn");

    Ok(AppConfig {
        together_api_key,
        search_api_key,
        openai_api_key,
        together_base_url,
        searchapi_base_url,
        openai_base_url,
        request_timeout_secs,
        probe_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
