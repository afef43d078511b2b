//! `[social]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Social identities attached to the Organization node and Twitter cards.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "social")]
pub struct SocialConfig {
    /// Default `twitter:site` / `twitter:creator` handle.
    #[config(default = "@bibliokit", inline_doc)]
    pub twitter: String,

    /// Fixed profile URLs listed in the Organization `sameAs`.
    pub profiles: Vec<String>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            twitter: "@bibliokit".into(),
            profiles: vec![
                "https://twitter.com/bibliokit".into(),
                "https://github.com/bibliokit".into(),
                "https://www.figma.com/@bibliokit".into(),
            ],
        }
    }
}

impl SocialConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.twitter.is_empty() && !self.twitter.starts_with('@') {
            diag.warn(
                Self::FIELDS.twitter,
                format!("`{}` will be rendered as `@{}`", self.twitter, self.twitter),
            );
        }

        for profile in &self.profiles {
            let is_http = url::Url::parse(profile)
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !is_http {
                diag.error_with_hint(
                    Self::FIELDS.profiles,
                    format!("`{profile}` is not an absolute URL"),
                    "use format like https://github.com/bibliokit",
                );
            }
        }
    }
}
