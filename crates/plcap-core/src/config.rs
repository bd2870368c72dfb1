use crate::app_config::{AppConfig, DetectionLimits};
use crate::ConfigError;

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
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let store_path = PathBuf::from(or_default("PLCAP_STORE_PATH", "./plcap-store.json"));
    let log_level = or_default("PLCAP_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PLCAP_REQUEST_TIMEOUT_SECS", "30")?;
    let bulk_pause_ms = parse_u64("PLCAP_BULK_PAUSE_MS", "500")?;
    let retry_delays_ms = parse_delay_list(
        "PLCAP_RETRY_DELAYS_MS",
        &or_default("PLCAP_RETRY_DELAYS_MS", "2000,5000,10000"),
    )?;
    let source_name = or_default("PLCAP_SOURCE_NAME", "OS Hub Chrome Extension");

    let defaults = DetectionLimits::default();
    let limits = DetectionLimits {
        max_list_estimate: parse_usize(
            "PLCAP_MAX_LIST_ESTIMATE",
            &defaults.max_list_estimate.to_string(),
        )?,
        max_detail_lines: parse_usize(
            "PLCAP_MAX_DETAIL_LINES",
            &defaults.max_detail_lines.to_string(),
        )?,
        max_text_matches: parse_usize(
            "PLCAP_MAX_TEXT_MATCHES",
            &defaults.max_text_matches.to_string(),
        )?,
    };

    Ok(AppConfig {
        store_path,
        log_level,
        request_timeout_secs,
        bulk_pause_ms,
        retry_delays_ms,
        limits,
        source_name,
    })
}

/// Parse a comma-separated list of millisecond delays.
///
/// The list must be non-empty and non-decreasing: the detection schedule
/// only ever waits longer between attempts.
fn parse_delay_list(var: &str, raw: &str) -> Result<Vec<u64>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let delays = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().map_err(|e| invalid(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    if delays.is_empty() {
        return Err(invalid("expected at least one delay".to_string()));
    }
    if delays.windows(2).any(|w| w[1] < w[0]) {
        return Err(invalid("delays must be non-decreasing".to_string()));
    }
    Ok(delays)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
