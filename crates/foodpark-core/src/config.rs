use chrono::{NaiveDate, Weekday};

use crate::app_config::{AppConfig, SelectorConfig, SlackSettings};
use crate::schedule::validate_date_format;
use crate::vendor::NameRule;
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
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let slack = SlackSettings {
        username: or_default("FP_SLACK_USERNAME", "foodPark"),
        channel: require("FP_SLACK_CHANNEL")?,
        icon_url: or_default("FP_SLACK_ICON", "https://foodparkcam.com/favicon.ico"),
        webhook_url: require("FP_SLACK_WEBHOOK")?,
    };

    let name_rule = or_default("FP_NAME_RULE", "preceding-sibling")
        .parse::<NameRule>()
        .map_err(|e| invalid("FP_NAME_RULE", e))?;

    let selectors = SelectorConfig {
        date_selector: or_default("FP_DATE_SELECTOR", "h1 > strong"),
        container_selector: or_default(
            "FP_OUTER_CONTAINER_SELECTOR",
            "div.sqs-layout.sqs-grid-12.columns-12[data-type=page-section]",
        ),
        location_selector: or_default("FP_LOCATION_SELECTOR", "h2 > strong"),
        anchor_selector: or_default("FP_ANCHOR_SELECTOR", ".sqs-block-button-element"),
        name_rule,
    };

    let target_date = match lookup("FP_TARGET_DATE") {
        Ok(raw) if !raw.trim().is_empty() => Some(
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| invalid("FP_TARGET_DATE", e.to_string()))?,
        ),
        _ => None,
    };

    let trading_weekday = or_default("FP_TRADING_WEEKDAY", "thu")
        .parse::<Weekday>()
        .map_err(|_| invalid("FP_TRADING_WEEKDAY", "not a weekday name".to_string()))?;

    let date_format = or_default("FP_DATE_FORMAT", "%a %d %B");
    validate_date_format(&date_format).map_err(|e| invalid("FP_DATE_FORMAT", e))?;

    Ok(AppConfig {
        page_url: or_default("FP_URL", "https://www.foodparkcam.com/whos-trading"),
        selectors,
        location_filter: or_default("FP_LOCATION_FILTER_VALUE", "Cambridge Science Park"),
        target_date,
        trading_weekday,
        date_format,
        slack,
        log_level: or_default("FP_LOG_LEVEL", "info"),
        request_timeout_secs: parse_u64("FP_REQUEST_TIMEOUT_SECS", "30")?,
        user_agent: or_default("FP_USER_AGENT", "foodpark/0.1 (vendor-digest)"),
        max_retries: parse_u32("FP_MAX_RETRIES", "2")?,
        retry_backoff_base_secs: parse_u64("FP_RETRY_BACKOFF_BASE_SECS", "1")?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
