//! # Backend configuration — `vagali.toml`
//!
//! Defines the TOML configuration file a shell (web bundle, desktop wrapper)
//! can ship to point the client at a backend deployment.
//!
//! ```toml
//! [backend]
//! base_url = "https://api.vagali.example/api/v1"
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration (a local development backend).

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `vagali.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VagaliConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL the API paths are joined onto, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl VagaliConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            backend: BackendConfig { base_url },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "vagali.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default_config() {
        let config = VagaliConfig::from_toml("").unwrap();
        assert_eq!(config, VagaliConfig::default());
        assert_eq!(config.backend.base_url, "http://localhost:8000/api/v1");
    }

    #[test]
    fn toml_round_trip() {
        let config = VagaliConfig::new("https://api.vagali.example/api/v1".to_string());
        let text = config.to_toml().unwrap();
        let back = VagaliConfig::from_toml(&text).unwrap();
        assert_eq!(back, config);
    }
}
