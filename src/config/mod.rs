//! Site configuration management for `canon.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── caching    # [caching]
//! │   ├── routes     # [routes]
//! │   ├── site       # [site]
//! │   └── slugs      # [slugs]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once and never mutated afterwards. Everything
//! that needs it borrows it; a reload means building a new `SiteConfig`.

pub mod section;
pub mod types;
mod util;

pub use util::url_path;

pub use section::{CachingConfig, RoutesConfig, SiteSectionConfig, SiteTimezone, SlugsConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing canon.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site addressing (url, admin_url, permalinks, timezone)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Route keywords
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Protected slugs
    #[serde(default)]
    pub slugs: SlugsConfig,

    /// Response caching
    #[serde(default)]
    pub caching: CachingConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file, applies `--site-url`,
    /// then validates. A missing file is allowed when `--site-url` is given.
    pub fn load(cli: &Cli) -> Result<Self> {
        let found = util::find_config_file(&cli.config);

        let mut config = match (&found, &cli.site_url) {
            (Some(path), _) => Self::from_path(path)?,
            (None, Some(_)) => Self::default(),
            (None, None) => return Err(ConfigError::NotFound(cli.config.clone()).into()),
        };

        if let Some(path) = found {
            config.config_path = path;
        }
        if let Some(url) = &cli.site_url {
            config.site.url = Some(url.clone());
        }

        config.validate()?;
        debug!("config"; "loaded site url {}", config.site.url());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            let mut diag = ConfigDiagnostics::new();
            for field in ignored {
                diag.unknown_field(field);
            }
            diag.print_warnings();
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate configuration, collecting all errors before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.routes.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a `[site]` url and optional extra TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(url: &str, extra: &str) -> SiteConfig {
    let config = format!("[site]\nurl = \"{url}\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
