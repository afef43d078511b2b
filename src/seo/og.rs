//! Site-wide defaults: the first metadata layer.

use super::SeoMetadata;
use crate::config::SeoConfig;

/// Open Graph type for every page that is not an article.
pub const OG_TYPE_WEBSITE: &str = "website";
pub const OG_TYPE_ARTICLE: &str = "article";

/// Defaults drawn from `[site]`, `[social]` and `[robots]`.
///
/// Social copy (`og:title`, `twitter:*`) stays unset here; it is derived
/// from the final title/description after every layer has run.
pub struct OgDefaults<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
    pub robots: &'a str,
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub twitter_card: &'a str,
    pub twitter_handle: &'a str,
}

impl<'a> OgDefaults<'a> {
    pub fn from_config(config: &'a SeoConfig) -> Self {
        Self {
            title: &config.site.title,
            description: &config.site.description,
            keywords: &config.site.keywords,
            robots: &config.robots.default,
            og_type: OG_TYPE_WEBSITE,
            site_name: &config.site.name,
            locale: &config.site.locale,
            twitter_card: &config.site.twitter_card,
            twitter_handle: &config.social.twitter,
        }
    }

    /// Starting record for every resolution.
    pub fn to_metadata(&self) -> SeoMetadata {
        let handle = twitter_handle(self.twitter_handle);
        let mut meta = SeoMetadata {
            title: self.title.to_string(),
            description: self.description.to_string(),
            keywords: non_blank(self.keywords),
            og_type: Some(self.og_type.to_string()),
            site_name: non_blank(self.site_name),
            locale: non_blank(self.locale),
            twitter_card: non_blank(self.twitter_card),
            twitter_site: handle.clone(),
            twitter_creator: handle,
            ..SeoMetadata::default()
        };
        meta.set_robots(self.robots);
        meta
    }
}

/// Normalize a Twitter handle or profile URL to `@handle`.
///
/// `https://x.com/bibliokit` and `bibliokit` both become `@bibliokit`.
pub fn twitter_handle(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let bare = if raw.contains("://") {
        raw.split(['?', '#'])
            .next()
            .unwrap_or(raw)
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
    } else {
        raw
    };
    let bare = bare.trim_start_matches('@');
    (!bare.is_empty() && !bare.contains("://")).then(|| format!("@{bare}"))
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_config() {
        let config = SeoConfig::default();
        let meta = OgDefaults::from_config(&config).to_metadata();
        assert_eq!(meta.title, config.site.title);
        assert_eq!(meta.og_type.as_deref(), Some("website"));
        assert_eq!(meta.twitter_site.as_deref(), Some("@bibliokit"));
        assert_eq!(meta.bingbot, meta.robots);
        assert!(meta.og_title.is_none());
        assert!(meta.og_image.is_none());
    }

    #[test]
    fn test_twitter_handle_forms() {
        assert_eq!(twitter_handle("bibliokit").as_deref(), Some("@bibliokit"));
        assert_eq!(twitter_handle(" @bibliokit ").as_deref(), Some("@bibliokit"));
        assert_eq!(
            twitter_handle("https://twitter.com/bibliokit/").as_deref(),
            Some("@bibliokit")
        );
        assert_eq!(twitter_handle("https://x.com/bibliokit?s=20").as_deref(), Some("@bibliokit"));
        assert_eq!(twitter_handle("@"), None);
        assert_eq!(twitter_handle(""), None);
    }
}
