/// API endpoint configuration
///
/// Loaded from environment variables, with development defaults.
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            base_url: lookup("NOVA_API_URL")
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(default_base_url),
            timeout_secs: lookup("NOVA_API_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or_else(default_timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = ApiConfig::from_lookup(|_| None);

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NOVA_API_URL", "https://api.nova.dev/v1/"),
            ("NOVA_API_TIMEOUT_SECS", "3"),
        ]);
        let config = ApiConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "https://api.nova.dev/v1");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = ApiConfig::from_lookup(|key| match key {
            "NOVA_API_TIMEOUT_SECS" => Some("zero".to_string()),
            _ => None,
        });
        assert_eq!(config.timeout_secs, 10);
    }
}
