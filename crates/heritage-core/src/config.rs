use url::Url;

use crate::app_config::{AppConfig, ContainerFilterKind, Environment};
use crate::site::{KeyPolicy, DEFAULT_SUMMARY_CHARS};
use crate::ConfigError;

pub const DEFAULT_SOURCE_URL: &str =
    "https://www.ethiopianadventuretours.com/about-ethiopia/unesco-world-heritage-sites-ethiopia";

pub const DEFAULT_MARKER_CLASS: &str = "col-sm-12";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a config that
/// targets the stock content source.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(invalid(var, format!("expected a boolean, got \"{raw}\""))),
        }
    };

    let env = parse_environment(&or_default("HERITAGE_ENV", "development"))?;
    let log_level = or_default("HERITAGE_LOG_LEVEL", "info");

    let source_url = or_default("HERITAGE_SOURCE_URL", DEFAULT_SOURCE_URL);
    validate_source_url(&source_url)?;

    let request_timeout_secs = parse_u64("HERITAGE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HERITAGE_USER_AGENT", "heritage/0.1 (site-catalog)");
    let require_success_status = parse_bool("HERITAGE_REQUIRE_SUCCESS_STATUS", "false")?;

    let marker_class = or_default("HERITAGE_MARKER_CLASS", DEFAULT_MARKER_CLASS);
    if marker_class.trim().is_empty() {
        return Err(invalid(
            "HERITAGE_MARKER_CLASS",
            "marker class must not be empty".to_string(),
        ));
    }

    let leading = parse_usize("HERITAGE_TRIM_LEADING", "2")?;
    let trailing = parse_usize("HERITAGE_TRIM_TRAILING", "2")?;
    let container_filter = parse_container_filter(
        &or_default("HERITAGE_CONTAINER_FILTER", "positional"),
        leading,
        trailing,
    )?;

    let state_key = parse_key_policy(&or_default("HERITAGE_STATE_KEY", "title"))?;
    let summary_chars =
        parse_usize("HERITAGE_SUMMARY_CHARS", &DEFAULT_SUMMARY_CHARS.to_string())?;

    Ok(AppConfig {
        env,
        log_level,
        source_url,
        request_timeout_secs,
        user_agent,
        require_success_status,
        marker_class,
        container_filter,
        state_key,
        summary_chars,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HERITAGE_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_container_filter(
    s: &str,
    leading: usize,
    trailing: usize,
) -> Result<ContainerFilterKind, ConfigError> {
    match s {
        "positional" => Ok(ContainerFilterKind::Positional { leading, trailing }),
        "content-shape" => Ok(ContainerFilterKind::ContentShape),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HERITAGE_CONTAINER_FILTER".to_string(),
            reason: format!("expected \"positional\" or \"content-shape\", got \"{other}\""),
        }),
    }
}

fn parse_key_policy(s: &str) -> Result<KeyPolicy, ConfigError> {
    match s {
        "title" => Ok(KeyPolicy::Title),
        "position" => Ok(KeyPolicy::Position),
        "content-hash" => Ok(KeyPolicy::ContentHash),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HERITAGE_STATE_KEY".to_string(),
            reason: format!("expected \"title\", \"position\" or \"content-hash\", got \"{other}\""),
        }),
    }
}

/// The source URL must be absolute http(s) with a host; image paths and share
/// links are built from it.
fn validate_source_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "HERITAGE_SOURCE_URL".to_string(),
        reason: format!("{reason}: \"{raw}\""),
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
