//! Engine configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── hosts      # [hosts]
//! │   ├── limits     # [limits]
//! │   ├── robots     # [robots]
//! │   ├── site       # [site]
//! │   └── social     # [social]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SeoConfig (this file)
//! ```
//!
//! Every section is optional: a missing `seo.toml` yields the BiblioKit
//! production defaults.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{HostsConfig, LimitsConfig, RobotsConfig, SiteInfoConfig, SocialConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub social: SocialConfig,

    #[serde(default)]
    pub hosts: HostsConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub robots: RobotsConfig,
}

impl SeoConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// Falls back to defaults when no file exists. Validation errors are
    /// returned together as one [`ConfigError::Diagnostics`].
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config = match find_config_file(config_name, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", config_name.display());
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_field_status(&mut diag);

        self.site.validate(&mut diag);
        self.social.validate(&mut diag);
        self.hosts.validate(&mut diag);
        self.limits.validate(&mut diag);
        self.robots.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn validate_field_status(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate_field_status(diag);
        self.social.validate_field_status(diag);
        self.hosts.validate_field_status(diag);
        self.limits.validate_field_status(diag);
        self.robots.validate_field_status(diag);
    }

    /// Full `seo.toml` template with every section at its default.
    pub fn template() -> String {
        [
            SiteInfoConfig::template_with_header(),
            SocialConfig::template_with_header(),
            HostsConfig::template_with_header(),
            LimitsConfig::template_with_header(),
            RobotsConfig::template_with_header(),
        ]
        .join("\n")
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SeoConfig {
    let (parsed, ignored) = SeoConfig::parse_with_ignored(content).unwrap();
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
