//! Application configuration
//!
//! Configuration loaded from blip.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from blip.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the care platform API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Version shown in the footer (e.g. "0.9.3"), hidden when unset
    #[serde(default)]
    pub version: Option<String>,

    /// Address behind the "Send us feedback" footer link
    #[serde(default = "default_support_email")]
    pub support_email: String,

    /// Subject line used for feedback mails
    #[serde(default = "default_support_subject")]
    pub support_subject: String,

    /// Log every dispatched action together with the state slices it changed
    #[serde(default)]
    pub debug: bool,

    /// Artificial latency of the demo backend in milliseconds
    #[serde(default = "default_demo_latency_ms")]
    pub demo_latency_ms: u64,

    /// Route the application redirects to after login
    #[serde(default = "default_route")]
    pub default_route: String,
}

fn default_api_url() -> String {
    "https://api.tidepool.org".to_string()
}

fn default_support_email() -> String {
    "support@tidepool.org".to_string()
}

fn default_support_subject() -> String {
    "Feedback on Blip".to_string()
}

fn default_demo_latency_ms() -> u64 {
    300
}

fn default_route() -> String {
    "/patients".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            version: None,
            support_email: default_support_email(),
            support_subject: default_support_subject(),
            debug: false,
            demo_latency_ms: default_demo_latency_ms(),
            default_route: default_route(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Footer version label, e.g. "v0.9.3 beta"
    pub fn version_label(&self) -> Option<String> {
        self.version
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| format!("v{} beta", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.support_email, "support@tidepool.org");
        assert_eq!(config.default_route, "/patients");
        assert!(!config.debug);
        assert!(config.version.is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            version = "0.9.3"
            debug = true
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(config.debug);
        assert_eq!(config.version.as_deref(), Some("0.9.3"));
        // Other fields should use defaults
        assert_eq!(config.api_url, "https://api.tidepool.org");
        assert_eq!(config.demo_latency_ms, 300);
    }

    #[test]
    fn test_version_label() {
        let mut config = AppConfig::default();
        assert_eq!(config.version_label(), None);

        config.version = Some(String::new());
        assert_eq!(config.version_label(), None);

        config.version = Some("1.2.0".to_string());
        assert_eq!(config.version_label().as_deref(), Some("v1.2.0 beta"));
    }
}
