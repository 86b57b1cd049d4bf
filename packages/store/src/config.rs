//! # Client configuration: `kudos.toml`
//!
//! Defines the TOML configuration the web shell embeds at build time
//! (filename: [`KudosConfig::filename`] = `"kudos.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//! identity_header = "X-User-ID"
//!
//! [storage]
//! identity_key = "currentUserId"
//!
//! [ui]
//! success_banner_secs = 3     # 0 keeps the banner until the next action
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`KudosConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base address and identity header name. |
//! | [`StorageConfig`] | Key under which the identity reference is persisted. |
//! | [`UiConfig`] | How long the "Kudo sent" banner stays up. |
//!
//! Every section derives `Default`, so an empty file is the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `kudos.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KudosConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every request path is appended to. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Header carrying the remembered identity on authenticated calls.
    #[serde(default = "default_identity_header")]
    pub identity_header: String,
}

/// Client-side persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_identity_key")]
    pub identity_key: String,
}

/// View behaviour settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds before the success banner is dismissed. 0 disables auto-dismiss.
    #[serde(default = "default_success_banner_secs")]
    pub success_banner_secs: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_identity_header() -> String {
    "X-User-ID".to_string()
}

fn default_identity_key() -> String {
    "currentUserId".to_string()
}

fn default_success_banner_secs() -> u32 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            identity_header: default_identity_header(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            identity_key: default_identity_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_banner_secs: default_success_banner_secs(),
        }
    }
}

/// Errors raised while loading `kudos.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid kudos.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("api.base_url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

impl KudosConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "kudos.toml"
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = normalize_base_url(&config.api.base_url);
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(url.clone()))
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
