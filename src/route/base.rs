//! Base URL normalization.

use crate::config::SeoConfig;
use crate::debug;
use url::Url;

/// Reduce `raw` to a bare origin (`scheme://host[:port]`).
///
/// - default ports, paths, queries and fragments are dropped
/// - production hosts are rewritten to the configured canonical origin
/// - scheme-less input is treated as `https://`
/// - anything unparsable falls back to `[site] url`
///
/// The result never ends with `/`.
pub fn normalize_base_url(raw: &str, config: &SeoConfig) -> String {
    match origin_of(raw, config) {
        Some(origin) => origin,
        None => {
            debug!("seo"; "unusable base url `{}`, using {}", raw, config.site.url);
            origin_of(&config.site.url, config)
                .unwrap_or_else(|| config.site.url.trim_end_matches('/').to_string())
        }
    }
}

fn origin_of(raw: &str, config: &SeoConfig) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if trimmed.contains("://") {
        Url::parse(trimmed).ok()?
    } else {
        Url::parse(&format!("https://{trimmed}")).ok()?
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;

    if config.hosts.is_production(host) {
        return Some(config.hosts.canonical.trim_end_matches('/').to_string());
    }

    Some(parsed.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> String {
        normalize_base_url(raw, &SeoConfig::default())
    }

    #[test]
    fn test_production_hosts_canonicalize() {
        for raw in [
            "https://bibliokit.com",
            "https://bibliokit.com/",
            "http://bibliokit.com",
            "https://www.bibliokit.com/blog?x=1",
            "http://WWW.BIBLIOKIT.COM:80",
            "bibliokit.com",
        ] {
            assert_eq!(normalize(raw), "https://bibliokit.com", "raw: {raw}");
        }
    }

    #[test]
    fn test_strips_default_port_and_path() {
        assert_eq!(normalize("https://preview.example.com:443/app/"), "https://preview.example.com");
        assert_eq!(normalize("http://localhost:3000/blog"), "http://localhost:3000");
        assert_eq!(normalize("http://localhost:80"), "http://localhost");
    }

    #[test]
    fn test_unparsable_falls_back_to_site_url() {
        assert_eq!(normalize(""), "https://bibliokit.com");
        assert_eq!(normalize("ftp://files.example.com"), "https://bibliokit.com");
        assert_eq!(normalize("http://"), "https://bibliokit.com");
    }

    #[test]
    fn test_other_hosts_are_not_rewritten() {
        assert_eq!(normalize("https://staging.bibliokit.com"), "https://staging.bibliokit.com");
    }
}
