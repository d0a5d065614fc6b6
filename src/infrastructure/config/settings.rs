//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets (`CSFLOAT_API_KEY`,
//! `SMTP_PASSWORD`) come from the environment only.
//!
//! # Example
//!
//! ```no_run
//! use floatscout::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use super::notify::NotifyConfig;
use super::schedule::ScheduleConfig;
use super::shutdown::ShutdownConfig;
use crate::adapter::outbound::csfloat::CsfloatConfig;
use crate::domain::DealCriteria;
use crate::error::{ConfigError, Result};

/// Environment variable holding the feed API key.
pub const API_KEY_ENV: &str = "CSFLOAT_API_KEY";

/// Environment variable holding the SMTP password.
pub const SMTP_PASSWORD_ENV: &str = "SMTP_PASSWORD";

/// Upper bound on any poll or scan interval, in seconds.
const MAX_INTERVAL_SECS: u64 = 7 * 24 * 3600;

/// Upper bound on any lookahead window, in hours.
const MAX_LOOKAHEAD_HOURS: u32 = 24 * 14;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Listing feed endpoint and link prefixes.
    #[serde(default)]
    pub feed: CsfloatConfig,

    /// Deal criteria.
    #[serde(default)]
    pub filter: DealCriteria,

    /// Poll cadence and page sizing.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Email delivery.
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Exit-time auction scan.
    #[serde(default)]
    pub shutdown: ShutdownConfig,

    /// From `CSFLOAT_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            feed: CsfloatConfig::default(),
            filter: DealCriteria::default(),
            schedule: ScheduleConfig::default(),
            notify: NotifyConfig::default(),
            shutdown: ShutdownConfig::default(),
            api_key: None,
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Reads secrets from the environment, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        config.api_key = non_empty_env(API_KEY_ENV);
        config.notify.password = non_empty_env(SMTP_PASSWORD_ENV);

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Run again after applying command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] or [`ConfigError::MissingField`]
    /// naming the first offending field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(invalid("logging.format", "must be \"pretty\" or \"json\""));
        }
        if self.feed.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "feed.api_url" }.into());
        }

        let filter = &self.filter;
        if !(0.0..100.0).contains(&filter.min_discount) {
            return Err(invalid("filter.min_discount", "must be at least 0 and below 100"));
        }
        if filter.max_price == 0 {
            return Err(invalid("filter.max_price", "must be greater than 0"));
        }
        if filter.min_price > filter.max_price {
            return Err(invalid("filter.min_price", "must not exceed max_price"));
        }
        if filter.allow_list.is_empty() || filter.allow_list.iter().any(String::is_empty) {
            return Err(invalid("filter.allow_list", "must contain non-empty entries"));
        }

        let schedule = &self.schedule;
        if schedule.poll_interval_secs == 0 || schedule.poll_interval_secs > MAX_INTERVAL_SECS {
            return Err(invalid("schedule.poll_interval_secs", "must be between 1 and 604800"));
        }
        if schedule.auction_interval_mins == 0
            || schedule
                .auction_interval_mins
                .checked_mul(60)
                .map_or(true, |secs| secs > MAX_INTERVAL_SECS)
        {
            return Err(invalid("schedule.auction_interval_mins", "must be between 1 and 10080"));
        }
        if schedule.auction_lookahead_hours == 0
            || schedule.auction_lookahead_hours > MAX_LOOKAHEAD_HOURS
        {
            return Err(invalid("schedule.auction_lookahead_hours", "must be between 1 and 336"));
        }
        if schedule.page_size == 0 || schedule.initial_page_size == Some(0) {
            return Err(invalid("schedule.page_size", "must be greater than 0"));
        }
        if schedule.auction_page_size == 0 {
            return Err(invalid("schedule.auction_page_size", "must be greater than 0"));
        }
        if schedule.max_auction_pages == 0 {
            return Err(invalid("schedule.max_auction_pages", "must be greater than 0"));
        }
        if schedule.rate_limit_cooldown_secs == 0
            || schedule.rate_limit_cooldown_secs > MAX_INTERVAL_SECS
        {
            return Err(invalid(
                "schedule.rate_limit_cooldown_secs",
                "must be between 1 and 604800",
            ));
        }
        if schedule.tick_ms == 0 {
            return Err(invalid("schedule.tick_ms", "must be greater than 0"));
        }

        if self.shutdown.exit_scan_hours.is_some_and(|hours| hours > MAX_LOOKAHEAD_HOURS) {
            return Err(invalid("shutdown.exit_scan_hours", "must be at most 336"));
        }

        let notify = &self.notify;
        if notify.email_enabled {
            if notify.recipients.is_empty() {
                return Err(invalid("notify.recipients", "required when email is enabled"));
            }
            if notify.username.is_empty() {
                return Err(ConfigError::MissingField { field: "notify.username" }.into());
            }
            if notify.password.is_none() {
                return Err(ConfigError::MissingField { field: SMTP_PASSWORD_ENV }.into());
            }
        }

        Ok(())
    }

    /// Initialize the tracing subscriber from `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
