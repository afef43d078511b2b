//! `[robots]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Robots directives for indexable and missing pages.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "robots")]
pub struct RobotsConfig {
    /// Directive for every page that resolved normally.
    #[config(default = "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1")]
    pub default: String,

    /// Directive for blog articles whose post could not be found.
    #[config(default = "noindex, follow", inline_doc)]
    pub missing: String,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            default: "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1"
                .into(),
            missing: "noindex, follow".into(),
        }
    }
}

impl RobotsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.missing.contains("noindex") {
            diag.error_with_hint(
                Self::FIELDS.missing,
                "missing pages must not be indexed",
                "include `noindex`, e.g. \"noindex, follow\"",
            );
        }
        if self.default.contains("noindex") {
            diag.warn(Self::FIELDS.default, "every page will be excluded from search");
        }
    }
}
