use crate::app_config::{AppConfig, Environment, GoogleAdsCredentials};
use crate::{ConfigError, Location, Network};

/// Credential variables that must be set together.
const GOOGLE_ADS_REQUIRED_VARS: [&str; 5] = [
    "GOOGLE_ADS_DEVELOPER_TOKEN",
    "GOOGLE_ADS_CLIENT_ID",
    "GOOGLE_ADS_CLIENT_SECRET",
    "GOOGLE_ADS_REFRESH_TOKEN",
    "GOOGLE_ADS_CUSTOMER_ID",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or credentials are only partly set.
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
/// Returns `ConfigError` if values are invalid or credentials are only partly set.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let env = parse_environment(&or_default("SOBS_ENV", "development"))?;
    let log_level = or_default("SOBS_LOG_LEVEL", "info");
    let brands_path = PathBuf::from(or_default("SOBS_BRANDS_PATH", "./config/brands.yaml"));

    let default_location = match or_default("SOBS_DEFAULT_LOCATION", "all").parse::<Location>() {
        Ok(location) => location,
        Err(never) => match never {},
    };
    let default_network = or_default("SOBS_DEFAULT_NETWORK", "GOOGLE_SEARCH")
        .parse::<Network>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "SOBS_DEFAULT_NETWORK".to_string(),
            reason: e.to_string(),
        })?;

    let request_timeout_secs = parse_u64("SOBS_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("SOBS_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("SOBS_RETRY_BACKOFF_BASE_MS", "1000")?;

    let google_ads_api_base_url = or_default(
        "GOOGLE_ADS_API_BASE_URL",
        "https://googleads.googleapis.com/",
    );
    let google_ads_api_version = or_default("GOOGLE_ADS_API_VERSION", "v19");
    let google_ads = build_google_ads_credentials(&lookup)?;

    Ok(AppConfig {
        env,
        log_level,
        brands_path,
        default_location,
        default_network,
        google_ads,
        google_ads_api_base_url,
        google_ads_api_version,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
    })
}

/// Credentials are all-or-nothing: none set yields `None`, a partial set is an error
/// naming the first missing variable.
fn build_google_ads_credentials<F>(lookup: &F) -> Result<Option<GoogleAdsCredentials>, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let present = |var: &str| lookup(var).ok().filter(|v| !v.trim().is_empty());

    if GOOGLE_ADS_REQUIRED_VARS.iter().all(|var| present(var).is_none()) {
        return Ok(None);
    }

    let require = |var: &str| -> Result<String, ConfigError> {
        present(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    Ok(Some(GoogleAdsCredentials {
        developer_token: require("GOOGLE_ADS_DEVELOPER_TOKEN")?,
        client_id: require("GOOGLE_ADS_CLIENT_ID")?,
        client_secret: require("GOOGLE_ADS_CLIENT_SECRET")?,
        refresh_token: require("GOOGLE_ADS_REFRESH_TOKEN")?,
        customer_id: require("GOOGLE_ADS_CUSTOMER_ID")?,
        login_customer_id: present("GOOGLE_ADS_LOGIN_CUSTOMER_ID"),
    }))
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SOBS_ENV".to_string(),
            reason: format!("unrecognized environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
