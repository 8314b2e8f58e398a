//! Configuration management for lkdoc.
//!
//! Parses `lkdoc.toml` with serde and provides auto-discovery of the config
//! file in parent directories. Navigation records from `[theme]` are turned
//! into a validated [`SiteNavigation`] during load, so malformed navigation
//! fails at startup instead of at render time.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `theme.edit_link.pattern`

mod expand;
mod theme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lk_nav::{NavError, SiteNavigation};
use serde::Deserialize;

pub use theme::{FooterConfig, LogoConfig, SearchConfig, SearchProvider, SocialLink, ThemeConfig};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lkdoc.toml";

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Theme configuration (navigation, sidebar, links).
    pub theme: ThemeConfig,

    /// Validated navigation built from `theme` (set after loading).
    #[serde(skip)]
    navigation: SiteNavigation,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Canonical URL of the deployed site.
    pub url: Option<String>,
    /// Content language.
    pub lang: String,
    /// Extra tags injected into `<head>`.
    pub head: Vec<HeadTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "lkdoc".to_owned(),
            description: String::new(),
            url: None,
            lang: "en-US".to_owned(),
            head: Vec::new(),
        }
    }
}

/// Tag rendered into `<head>`, e.g. `<meta name="theme-color" content="#E6007A">`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadTag {
    /// Element name (`meta`, `link`, ...).
    pub tag: String,
    /// Element attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Navigation data failed validation.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`LKDOC_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !lk_nav::is_external(url) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lkdoc.toml` in current directory and parents,
    /// falling back to an empty configuration when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the configuration is invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, environment expansion or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;
        config.validate()?;
        config.navigation = config.theme.build_navigation()?;

        Ok(config)
    }

    /// Validated navigation for resolving page paths.
    pub fn navigation(&self) -> &SiteNavigation {
        &self.navigation
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            nav_items = config.navigation.nav_items().len(),
            sidebar_prefixes = config.navigation.sidebar().len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate site and theme values.
    ///
    /// Navigation records are validated separately while building
    /// [`SiteNavigation`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.theme.validate()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.lang, "site.lang")?;
        if let Some(url) = &self.site.url {
            require_http_url(url, "site.url")?;
        }
        for tag in &self.site.head {
            require_non_empty(&tag.tag, "site.head.tag")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.site.url, "site.url")?;
        self.theme.expand_env_vars()?;
        Ok(())
    }
}
