//! `[hosts]` configuration.
//!
//! Requests arriving on a production host always resolve against the
//! canonical origin, whatever scheme or `www.` prefix they came in with.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "hosts")]
pub struct HostsConfig {
    /// Host names served by the production deployment.
    pub production: Vec<String>,

    /// Origin that production hosts are rewritten to.
    #[config(default = "https://bibliokit.com", inline_doc)]
    pub canonical: String,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            production: vec!["bibliokit.com".into(), "www.bibliokit.com".into()],
            canonical: "https://bibliokit.com".into(),
        }
    }
}

impl HostsConfig {
    /// Whether `host` belongs to the production deployment (case-insensitive).
    pub fn is_production(&self, host: &str) -> bool {
        self.production
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(host))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for host in &self.production {
            if host.contains('/') || host.contains(':') || host.trim().is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.production,
                    format!("`{host}` is not a bare host name"),
                    "list hosts without scheme or path, e.g. \"bibliokit.com\"",
                );
            }
        }

        match url::Url::parse(&self.canonical) {
            Ok(parsed) if parsed.scheme() == "https" && parsed.host_str().is_some() => {
                if parsed.path() != "/" {
                    diag.warn(Self::FIELDS.canonical, "path component is ignored");
                }
            }
            _ => diag.error_with_hint(
                Self::FIELDS.canonical,
                format!("`{}` is not an https origin", self.canonical),
                "use format like https://bibliokit.com",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_is_production_ignores_case() {
        let hosts = HostsConfig::default();
        assert!(hosts.is_production("WWW.BiblioKit.com"));
        assert!(!hosts.is_production("staging.bibliokit.com"));
    }

    #[test]
    fn test_validate_hosts() {
        let config = test_parse_config(
            "[hosts]\nproduction = [\"https://bibliokit.com\"]\ncanonical = \"http://bibliokit.com\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.hosts.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
