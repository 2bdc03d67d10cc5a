//! Runtime configuration read from the page query string
//!
//! Example: `?role=admin&data=sample&port=9000`

use contracts::shared::api_endpoints::DEFAULT_API_PORT;
use contracts::system::roles::ViewerRole;
use serde::{Deserialize, Serialize};

/// Where attendance records come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Api,
    Sample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, rename = "data")]
    pub data_source: DataSource,
    #[serde(default)]
    pub role: ViewerRole,
}

fn default_port() -> u16 {
    DEFAULT_API_PORT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_API_PORT,
            data_source: DataSource::default(),
            role: ViewerRole::default(),
        }
    }
}

impl AppConfig {
    /// Parses a query string (with or without the leading `?`).
    /// Unknown keys are ignored; a malformed query falls back to defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        serde_qs::from_str(query).unwrap_or_else(|e| {
            log::warn!("invalid config query '{}': {}", query, e);
            Self::default()
        })
    }

    /// Reads the config of the current page.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_query("");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 9000);
        assert_eq!(config.role, ViewerRole::Employee);
        assert_eq!(config.data_source, DataSource::Api);
    }

    #[test]
    fn test_from_query() {
        let config = AppConfig::from_query("?role=admin&data=sample&port=8080");
        assert_eq!(config.role, ViewerRole::Admin);
        assert_eq!(config.data_source, DataSource::Sample);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_partial_query_keeps_defaults() {
        let config = AppConfig::from_query("role=admin&page=admin-attendance");
        assert_eq!(config.role, ViewerRole::Admin);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_malformed_query_falls_back() {
        let config = AppConfig::from_query("port=not-a-number");
        assert_eq!(config, AppConfig::default());
    }
}
