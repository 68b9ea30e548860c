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

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("FP_SLACK_CHANNEL", "#lunch");
    m.insert("FP_SLACK_WEBHOOK", "https://hooks.slack.test/T000/B000/XXX");
    m
}

#[test]
fn fails_without_slack_channel() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("FP_SLACK_WEBHOOK", "https://hooks.slack.test/x");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "FP_SLACK_CHANNEL"),
        "expected MissingEnvVar(FP_SLACK_CHANNEL), got: {result:?}"
    );
}

#[test]
fn fails_without_slack_webhook() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("FP_SLACK_CHANNEL", "#lunch");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "FP_SLACK_WEBHOOK"),
        "expected MissingEnvVar(FP_SLACK_WEBHOOK), got: {result:?}"
    );
}

#[test]
fn defaults_apply_with_only_required_vars() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_url, "https://www.foodparkcam.com/whos-trading");
    assert_eq!(cfg.selectors.date_selector, "h1 > strong");
    assert_eq!(cfg.selectors.location_selector, "h2 > strong");
    assert_eq!(cfg.selectors.anchor_selector, ".sqs-block-button-element");
    assert_eq!(
        cfg.selectors.container_selector,
        "div.sqs-layout.sqs-grid-12.columns-12[data-type=page-section]"
    );
    assert_eq!(cfg.selectors.name_rule, NameRule::PrecedingSibling);
    assert_eq!(cfg.location_filter, "Cambridge Science Park");
    assert!(cfg.target_date.is_none());
    assert_eq!(cfg.trading_weekday, Weekday::Thu);
    assert_eq!(cfg.date_format, "%a %d %B");
    assert_eq!(cfg.slack.username, "foodPark");
    assert_eq!(cfg.slack.icon_url, "https://foodparkcam.com/favicon.ico");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.max_retries, 2);
    assert_eq!(cfg.retry_backoff_base_secs, 1);
}

#[test]
fn target_date_override_is_parsed() {
    let mut map = full_env();
    map.insert("FP_TARGET_DATE", "2024-01-04");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.target_date, NaiveDate::from_ymd_opt(2024, 1, 4));
}

#[test]
fn blank_target_date_means_unset() {
    let mut map = full_env();
    map.insert("FP_TARGET_DATE", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.target_date.is_none());
}

#[test]
fn invalid_target_date_is_rejected() {
    let mut map = full_env();
    map.insert("FP_TARGET_DATE", "04/01/2024");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FP_TARGET_DATE"),
        "expected InvalidEnvVar(FP_TARGET_DATE), got: {result:?}"
    );
}

#[test]
fn trading_weekday_override() {
    let mut map = full_env();
    map.insert("FP_TRADING_WEEKDAY", "Friday");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.trading_weekday, Weekday::Fri);
}

#[test]
fn invalid_trading_weekday_is_rejected() {
    let mut map = full_env();
    map.insert("FP_TRADING_WEEKDAY", "someday");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FP_TRADING_WEEKDAY"),
        "expected InvalidEnvVar(FP_TRADING_WEEKDAY), got: {result:?}"
    );
}

#[test]
fn invalid_date_format_is_rejected() {
    let mut map = full_env();
    map.insert("FP_DATE_FORMAT", "%a %Q");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FP_DATE_FORMAT"),
        "expected InvalidEnvVar(FP_DATE_FORMAT), got: {result:?}"
    );
}

#[test]
fn time_only_date_format_is_rejected() {
    let mut map = full_env();
    map.insert("FP_DATE_FORMAT", "%H");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FP_DATE_FORMAT"),
        "expected InvalidEnvVar(FP_DATE_FORMAT), got: {result:?}"
    );
}

#[test]
fn name_rule_override() {
    let mut map = full_env();
    map.insert("FP_NAME_RULE", "anchor-text");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.selectors.name_rule, NameRule::AnchorText);
}

#[test]
fn invalid_name_rule_is_rejected() {
    let mut map = full_env();
    map.insert("FP_NAME_RULE", "guess");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FP_NAME_RULE"),
        "expected InvalidEnvVar(FP_NAME_RULE), got: {result:?}"
    );
}

#[test]
fn invalid_max_retries_is_rejected() {
    let mut map = full_env();
    map.insert("FP_MAX_RETRIES", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FP_MAX_RETRIES"),
        "expected InvalidEnvVar(FP_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn request_timeout_override() {
    let mut map = full_env();
    map.insert("FP_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn debug_redacts_webhook_url() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("hooks.slack.test"), "webhook leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
