//! `[limits]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Length caps, counted in UTF-16 code units like search engines do.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "limits")]
pub struct LimitsConfig {
    #[config(default = "60", inline_doc = "Maximum title length")]
    pub title: usize,

    #[config(default = "155", inline_doc = "Maximum description length")]
    pub description: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            title: 60,
            description: 155,
        }
    }
}

impl LimitsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title == 0 {
            diag.error(Self::FIELDS.title, "must be greater than 0");
        }
        if self.description == 0 {
            diag.error(Self::FIELDS.description, "must be greater than 0");
        }
        if self.title > 70 {
            diag.warn(Self::FIELDS.title, "search results usually truncate past 60 characters");
        }
    }
}
