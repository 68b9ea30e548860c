use chrono::{NaiveDate, Weekday};

use crate::vendor::NameRule;

/// CSS selectors and the name rule describing one page-template revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub date_selector: String,
    pub container_selector: String,
    pub location_selector: String,
    pub anchor_selector: String,
    pub name_rule: NameRule,
}

/// Where and how the outgoing webhook message is posted.
#[derive(Clone)]
pub struct SlackSettings {
    pub username: String,
    pub channel: String,
    pub icon_url: String,
    pub webhook_url: String,
}

impl std::fmt::Debug for SlackSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackSettings")
            .field("username", &self.username)
            .field("channel", &self.channel)
            .field("icon_url", &self.icon_url)
            .field("webhook_url", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub page_url: String,
    pub selectors: SelectorConfig,
    pub location_filter: String,
    /// Explicit target date; `None` means the next trading weekday.
    pub target_date: Option<NaiveDate>,
    pub trading_weekday: Weekday,
    /// chrono strftime format of the page's date headers (before upper-casing).
    pub date_format: String,
    pub slack: SlackSettings,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}
