//! Configuration file support for explore.
//!
//! Loads optional `.explore/config.toml` from the working directory. Every
//! key is optional; `EXPLORE_CMS_BASE_URL` overrides the CMS host.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{ExploreError, Result};
use crate::links::LinkFallback;
use crate::resolver::ResolveMode;
use crate::source::DEFAULT_CMS_BASE_URL;

/// Environment variable that wins over `cms_base_url`.
pub const CMS_BASE_URL_ENV: &str = "EXPLORE_CMS_BASE_URL";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// CMS host, without the `/api/...` path
    pub cms_base_url: String,
    /// Page loaded when no name is given
    pub default_page: String,
    /// Suffix of every document title
    pub site_name: String,
    /// Per-request timeout for CMS calls
    pub request_timeout_secs: u64,
    /// `"first"` or `"all"` populated content types per section
    pub resolve_mode: ResolveMode,
    /// `"positional"` or `"title"` when an item has nothing to link by
    pub link_fallback: LinkFallback,
    /// Use the section's `viewMoreText` as CTA label when set
    pub prefer_section_cta_text: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            cms_base_url: DEFAULT_CMS_BASE_URL.to_string(),
            default_page: "All Destinations".to_string(),
            site_name: "Holiday Tribe".to_string(),
            request_timeout_secs: 30,
            resolve_mode: ResolveMode::default(),
            link_fallback: LinkFallback::default(),
            prefer_section_cta_text: false,
        }
    }
}

impl ExploreConfig {
    /// Load config from `.explore/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".explore").join("config.toml");
        Self::load_from_path(&config_path).with_env()
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_strict(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a path the user named explicitly. Missing or
    /// malformed files are errors here.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ExploreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ExploreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Apply `EXPLORE_CMS_BASE_URL` from the process environment.
    pub fn with_env(self) -> Self {
        self.env_override(std::env::var(CMS_BASE_URL_ENV).ok())
    }

    /// Replace the CMS host when an override is present and non-empty.
    pub fn env_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.cms_base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
