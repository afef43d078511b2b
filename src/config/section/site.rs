//! `[site]` configuration.
//!
//! Brand identity and the defaults every page starts from before route
//! and content overrides are layered on top.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site-wide defaults for titles, descriptions and social images.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Brand name, used as `og:site_name` and the title suffix.
    #[config(default = "BiblioKit", inline_doc)]
    pub name: String,

    /// Canonical origin used when no base URL is supplied.
    #[config(default = "https://bibliokit.com", inline_doc)]
    pub url: String,

    /// Default document title.
    #[config(default = "BiblioKit | Figma Plugins for Design Systems")]
    pub title: String,

    /// Default meta description.
    pub description: String,

    /// Default keyword list (comma separated).
    #[config(default = "Figma plugins, design systems, BiblioKit")]
    pub keywords: String,

    /// Open Graph locale.
    #[config(default = "en_US", inline_doc)]
    pub locale: String,

    /// `inLanguage` for WebSite and WebPage nodes.
    #[config(default = "en-US", inline_doc)]
    pub language: String,

    /// Organization logo, relative to the origin.
    #[config(default = "/logo.png", inline_doc)]
    pub logo: String,

    /// Default social image, relative to the origin.
    #[config(default = "/og/bibliokit-og.png", inline_doc)]
    pub og_image: String,

    #[config(default = "1200", inline_doc = "Default social image width")]
    pub og_image_width: u32,

    #[config(default = "630", inline_doc = "Default social image height")]
    pub og_image_height: u32,

    #[config(default = "summary_large_image", inline_doc = "Twitter card type")]
    pub twitter_card: String,

    /// Contact anchor, target of the WebSite ReadAction.
    #[config(default = "/#contact", inline_doc)]
    pub contact_anchor: String,
}

pub(crate) const DEFAULT_DESCRIPTION: &str = "BiblioKit builds Figma plugins that keep design systems tidy: \
rename component variants, audit styles and ship consistent libraries faster.";

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "BiblioKit".into(),
            url: "https://bibliokit.com".into(),
            title: "BiblioKit | Figma Plugins for Design Systems".into(),
            description: DEFAULT_DESCRIPTION.into(),
            keywords: "Figma plugins, design systems, BiblioKit".into(),
            locale: "en_US".into(),
            language: "en-US".into(),
            logo: "/logo.png".into(),
            og_image: "/og/bibliokit-og.png".into(),
            og_image_width: 1200,
            og_image_height: 630,
            twitter_card: "summary_large_image".into(),
            contact_anchor: "/#contact".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be an absolute http(s) URL with a host
    /// - `name`, `title` and `description` must not be blank
    /// - image paths must be root-relative or absolute URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://bibliokit.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://bibliokit.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://bibliokit.com",
                );
            }
        }

        for (field, value) in [
            (Self::FIELDS.name, &self.name),
            (Self::FIELDS.title, &self.title),
            (Self::FIELDS.description, &self.description),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        for (field, value) in [
            (Self::FIELDS.logo, &self.logo),
            (Self::FIELDS.og_image, &self.og_image),
        ] {
            if !is_image_ref(value) {
                diag.error_with_hint(
                    field,
                    format!("`{value}` is neither root-relative nor an absolute URL"),
                    "start the path with `/`, e.g. \"/og/bibliokit-og.png\"",
                );
            }
        }

        if self.og_image_width == 0 || self.og_image_height == 0 {
            diag.error(Self::FIELDS.og_image_width, "image dimensions must be positive");
        }

        if !self.contact_anchor.starts_with('/') {
            diag.warn(Self::FIELDS.contact_anchor, "expected a root-relative anchor");
        }
    }
}

fn is_image_ref(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("https://") || value.starts_with("http://")
}
