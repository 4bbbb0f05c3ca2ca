use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use super::format::CurrencyFormat;
use super::logging::{LogLevel, Logger};

/// Local storage key holding optional JSON overrides
pub const CONFIG_STORAGE_KEY: &str = "finance_tracker_config";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base path of the REST backend, without trailing slash
    pub api_base_url: String,
    /// Length of the trailing window shown by the trend chart
    pub trend_months: u32,
    /// Number of rows in the top expenses panel
    pub top_expenses_limit: u32,
    pub toast_duration_ms: u32,
    pub log_level: LogLevel,
    pub currency: CurrencyFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            trend_months: 6,
            top_expenses_limit: 5,
            toast_duration_ms: 3000,
            log_level: LogLevel::Info,
            currency: CurrencyFormat::default(),
        }
    }
}

/// Partial configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub trend_months: Option<u32>,
    pub top_expenses_limit: Option<u32>,
    pub toast_duration_ms: Option<u32>,
    pub log_level: Option<LogLevel>,
    pub currency: Option<CurrencyFormat>,
}

impl AppConfig {
    /// Defaults merged with the overrides found in local storage
    pub fn load() -> Self {
        match LocalStorage::get::<ConfigOverrides>(CONFIG_STORAGE_KEY) {
            Ok(overrides) => Self::default().with_overrides(overrides),
            Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => Self::default(),
            Err(e) => {
                Logger::warn_with_component("config", &format!("Ignoring stored config: {}", e));
                Self::default()
            }
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(months) = overrides.trend_months.filter(|m| *m > 0) {
            self.trend_months = months;
        }
        if let Some(limit) = overrides.top_expenses_limit.filter(|l| *l > 0) {
            self.top_expenses_limit = limit;
        }
        if let Some(ms) = overrides.toast_duration_ms {
            self.toast_duration_ms = ms;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(currency) = overrides.currency {
            self.currency = currency;
        }
        self
    }
}
