//! Build-time Configuration
//!
//! The bundle has no process environment at runtime, so settings are baked
//! in from `PORTAL_*` variables when the wasm is built.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every `/api/...` path; empty means same origin
    pub api_base_url: String,
    /// Badge refresh period
    pub poll_interval: Duration,
    /// Delay between the last keystroke and an admin search request
    pub search_debounce: Duration,
    pub page_size: u32,
    pub log_capacity: usize,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| match key {
            "PORTAL_API_BASE_URL" => option_env!("PORTAL_API_BASE_URL"),
            "PORTAL_POLL_SECS" => option_env!("PORTAL_POLL_SECS"),
            "PORTAL_SEARCH_DEBOUNCE_MS" => option_env!("PORTAL_SEARCH_DEBOUNCE_MS"),
            "PORTAL_PAGE_SIZE" => option_env!("PORTAL_PAGE_SIZE"),
            "PORTAL_LOG_CAPACITY" => option_env!("PORTAL_LOG_CAPACITY"),
            _ => None,
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<&'static str>) -> Self {
        let base = lookup("PORTAL_API_BASE_URL").unwrap_or_default();
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            poll_interval: Duration::from_secs(try_load(&lookup, "PORTAL_POLL_SECS", 30)),
            search_debounce: Duration::from_millis(try_load(&lookup, "PORTAL_SEARCH_DEBOUNCE_MS", 500)),
            page_size: try_load(&lookup, "PORTAL_PAGE_SIZE", 10).max(1),
            log_capacity: try_load(&lookup, "PORTAL_LOG_CAPACITY", 500),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<&'static str>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}; using default {default}");
            default
        }),
    }
}

/// Resolved once on startup
pub fn config() -> &'static AppConfig {
    use std::sync::OnceLock;
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let config = AppConfig::load();
        info!("Config loaded: api={:?}, poll={:?}", config.api_base_url, config.poll_interval);
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.search_debounce, Duration::from_millis(500));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORTAL_API_BASE_URL" => Some("https://portal.example.org/"),
            "PORTAL_POLL_SECS" => Some("45"),
            "PORTAL_PAGE_SIZE" => Some("0"),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://portal.example.org");
        assert_eq!(config.poll_interval, Duration::from_secs(45));
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORTAL_SEARCH_DEBOUNCE_MS" => Some("soon"),
            _ => None,
        });
        assert_eq!(config.search_debounce, Duration::from_millis(500));
    }
}
