//! # Dashboard Configuration
//!
//! Page-level settings applied once at startup. The resulting
//! [`DashboardConfig`] is never mutated afterwards.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`)
//! 3. Environment (`FB_INSIGHTS_*`)
//! 4. Command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Branding image shown in the header.
pub const DEFAULT_LOGO_URL: &str =
    "https://raw.githubusercontent.com/skye510/facebook-analytics/main/meta_ai_logo.png";

pub const ENV_USER: &str = "FB_INSIGHTS_USER";
pub const ENV_LOGO_URL: &str = "FB_INSIGHTS_LOGO_URL";
pub const ENV_LOG_FILE: &str = "FB_INSIGHTS_LOG_FILE";

/// Width policy for the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    /// Main panel takes all remaining width.
    #[default]
    Wide,
    /// Main panel is capped and centered.
    Centered,
}

/// Initial sidebar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Title shown in the header and the terminal window title.
    pub page_title: String,
    pub page_icon: String,
    pub layout: PageLayout,
    pub sidebar: SidebarState,
    /// Account name shown in captions and greetings.
    pub user: String,
    pub logo_url: String,
    /// Alt text rendered in place of the image once it has loaded.
    pub logo_alt: String,
    /// Whether to fetch the logo at all.
    pub fetch_logo: bool,
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: "Skye's AI-Enhanced Analytics".to_string(),
            page_icon: "🤖".to_string(),
            layout: PageLayout::Wide,
            sidebar: SidebarState::Expanded,
            user: "skye510".to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_alt: "Meta AI Logo".to_string(),
            fetch_logo: true,
            log_file: std::env::temp_dir().join("fb-insights.log"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("invalid logo URL '{url}': {reason}")]
    InvalidLogoUrl { url: String, reason: String },
}

/// Optional keys accepted in the TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    page_title: Option<String>,
    page_icon: Option<String>,
    layout: Option<PageLayout>,
    sidebar: Option<SidebarState>,
    user: Option<String>,
    logo_url: Option<String>,
    logo_alt: Option<String>,
    fetch_logo: Option<bool>,
    log_file: Option<PathBuf>,
}

/// Overrides taken from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub user: Option<String>,
    pub logo_url: Option<String>,
    pub no_logo: bool,
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Build the configuration from every source and validate it.
    pub fn load(
        file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = file {
            config.apply_file(path)?;
        }
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);

        config.validate()?;
        Ok(config)
    }

    /// Merge a TOML document into this configuration.
    pub fn apply_toml(&mut self, raw: &str, path: &Path) -> Result<(), ConfigError> {
        let file: FileConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(v) = file.page_title {
            self.page_title = v;
        }
        if let Some(v) = file.page_icon {
            self.page_icon = v;
        }
        if let Some(v) = file.layout {
            self.layout = v;
        }
        if let Some(v) = file.sidebar {
            self.sidebar = v;
        }
        if let Some(v) = file.user {
            self.user = v;
        }
        if let Some(v) = file.logo_url {
            self.logo_url = v;
        }
        if let Some(v) = file.logo_alt {
            self.logo_alt = v;
        }
        if let Some(v) = file.fetch_logo {
            self.fetch_logo = v;
        }
        if let Some(v) = file.log_file {
            self.log_file = v;
        }
        Ok(())
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_toml(&raw, path)
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_USER) {
            self.user = v;
        }
        if let Some(v) = lookup(ENV_LOGO_URL) {
            self.logo_url = v;
        }
        if let Some(v) = lookup(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(v);
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = &overrides.user {
            self.user = v.clone();
        }
        if let Some(v) = &overrides.logo_url {
            self.logo_url = v.clone();
        }
        if overrides.no_logo {
            self.fetch_logo = false;
        }
        if let Some(v) = &overrides.log_file {
            self.log_file = v.clone();
        }
    }

    /// Reject values the UI cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_title.trim().is_empty() {
            return Err(ConfigError::Empty { field: "page_title" });
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::Empty { field: "user" });
        }
        if self.fetch_logo {
            let url = Url::parse(&self.logo_url).map_err(|e| ConfigError::InvalidLogoUrl {
                url: self.logo_url.clone(),
                reason: e.to_string(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidLogoUrl {
                    url: self.logo_url.clone(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
        }
        Ok(())
    }

    /// Terminal window title: icon followed by the page title.
    pub fn window_title(&self) -> String {
        if self.page_icon.is_empty() {
            self.page_title.clone()
        } else {
            format!("{} {}", self.page_icon, self.page_title)
        }
    }
}
