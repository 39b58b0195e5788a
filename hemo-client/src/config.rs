//! Client configuration

use std::path::PathBuf;

/// Backend used when `BLOOD_DONATION_API_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Storage directory used when `BLOOD_DONATION_STORAGE_DIR` is unset
pub const DEFAULT_STORAGE_DIR: &str = ".blood_donation";

/// Client configuration for connecting to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, endpoints are appended verbatim (e.g. "http://localhost:8000/api/v1")
    pub base_url: String,

    /// Directory of the durable session store
    pub storage_dir: PathBuf,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            timeout: None,
        }
    }

    /// Load configuration from the environment (and `.env`, if present)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("BLOOD_DONATION_API_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let mut config = Self::new(base_url);
        if let Some(dir) = lookup("BLOOD_DONATION_STORAGE_DIR").filter(|s| !s.is_empty()) {
            config.storage_dir = PathBuf::from(dir);
        }
        config.timeout = lookup("BLOOD_DONATION_TIMEOUT_SECS").and_then(|t| t.parse().ok());
        config
    }

    /// Set the storage directory
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BLOOD_DONATION_API_URL", "https://api.example.org/v1/"),
            ("BLOOD_DONATION_STORAGE_DIR", "/tmp/bd"),
            ("BLOOD_DONATION_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(config.base_url, "https://api.example.org/v1");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/bd"));
        assert_eq!(config.timeout, Some(15));
    }

    #[test]
    fn test_bad_timeout_ignored() {
        let config =
            ClientConfig::from_lookup(lookup(&[("BLOOD_DONATION_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout, None);
    }
}
