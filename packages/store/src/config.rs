//! # Client configuration: `madetect.toml`
//!
//! The web package embeds a small TOML file at compile time and parses it on
//! startup with [`ClientConfig::from_toml`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                 # empty = same origin as the page
//!
//! [detection]
//! free_tier_daily_limit = 20    # quoted in the quota-exceeded alert
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the default
//! configuration. [`ClientConfig::load`] additionally falls back to the default
//! on a parse error, logging a warning instead of failing startup.

use serde::Deserialize;

/// Top-level configuration stored in `madetect.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

/// Where the REST backend lives.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Absolute origin of the backend, e.g. `"http://localhost:5001"`.
    /// Empty string means the page's own origin.
    #[serde(default)]
    pub base_url: String,
}

/// Detection view settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetectionConfig {
    /// Daily request allowance of the backend's free tier.
    #[serde(default = "default_free_tier_daily_limit")]
    pub free_tier_daily_limit: u32,
}

fn default_free_tier_daily_limit() -> u32 {
    20
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            free_tier_daily_limit: default_free_tier_daily_limit(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "madetect.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse, falling back to defaults when the file is malformed.
    pub fn load(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed {}: {e}", Self::filename());
            Self::default()
        })
    }

    /// Backend origin, or `fallback` (normally `window.location.origin`) when unset.
    pub fn base_url_or(&self, fallback: &str) -> String {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            fallback.trim_end_matches('/').to_string()
        } else {
            base.trim_end_matches('/').to_string()
        }
    }
}
