pub mod app_config;
pub mod config;
pub mod schedule;
pub mod vendor;

pub use app_config::{AppConfig, SelectorConfig, SlackSettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use schedule::{next_trading_day, validate_date_format, TargetDate};
pub use vendor::{NameRule, VendorListing, VendorRecord, WALK_UP_MARKER};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
