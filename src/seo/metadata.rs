//! The resolved metadata record and the partial patches layered onto it.

use crate::utils::text::non_empty;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a page head needs.
///
/// Serializes in camelCase with unset fields omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub googlebot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bingbot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_page_type: Option<String>,
    #[serde(default)]
    pub structured_data: Vec<Value>,
}

/// A partial [`SeoMetadata`]; every field is optional.
///
/// Route table entries and content overrides are expressed as patches so
/// the layering rule lives in one place: [`SeoMetadata::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub robots: Option<String>,
    pub googlebot: Option<String>,
    pub bingbot: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_image_alt: Option<String>,
    pub og_type: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub twitter_image_alt: Option<String>,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub web_page_type: Option<String>,
}

/// Copy every non-blank patch field over the target.
macro_rules! overlay {
    ($target:ident, $patch:ident; required: $($req:ident),*; optional: $($opt:ident),* $(,)?) => {
        $(
            if let Some(value) = $patch.$req.as_deref().and_then(non_empty) {
                $target.$req = value.to_string();
            }
        )*
        $(
            if let Some(value) = $patch.$opt.as_deref().and_then(non_empty) {
                $target.$opt = Some(value.to_string());
            }
        )*
    };
}

impl SeoMetadata {
    /// Layer `patch` on top: non-blank values win, blanks keep what is there.
    pub fn apply(&mut self, patch: &MetaPatch) {
        overlay!(self, patch;
            required: title, description;
            optional: keywords, robots, googlebot, bingbot,
                og_title, og_description, og_image, og_image_alt, og_type,
                twitter_title, twitter_description, twitter_image, twitter_image_alt,
                twitter_site, twitter_creator, web_page_type,
        );
    }

    /// Set all three robots directives.
    pub fn set_robots(&mut self, directive: &str) {
        self.robots = Some(directive.to_string());
        self.googlebot = Some(directive.to_string());
        self.bingbot = Some(directive.to_string());
    }
}

impl MetaPatch {
    /// Patch that sets title and description only.
    pub fn copy(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_og_image(mut self, image: impl Into<String>) -> Self {
        self.og_image = Some(image.into());
        self
    }

    pub fn with_page_type(mut self, page_type: impl Into<String>) -> Self {
        self.web_page_type = Some(page_type.into());
        self
    }

    pub fn with_robots(mut self, directive: impl Into<String>) -> Self {
        let directive = directive.into();
        self.robots = Some(directive.clone());
        self.googlebot = Some(directive.clone());
        self.bingbot = Some(directive);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_skips_blank_values() {
        let mut meta = SeoMetadata {
            title: "Base".into(),
            description: "Base description".into(),
            og_type: Some("website".into()),
            ..Default::default()
        };
        meta.apply(&MetaPatch {
            title: Some("   ".into()),
            description: Some(" Override ".into()),
            og_type: Some(String::new()),
            keywords: Some("a, b".into()),
            ..Default::default()
        });
        assert_eq!(meta.title, "Base");
        assert_eq!(meta.description, "Override");
        assert_eq!(meta.og_type.as_deref(), Some("website"));
        assert_eq!(meta.keywords.as_deref(), Some("a, b"));
    }

    #[test]
    fn test_serializes_camel_case_without_nones() {
        let meta = SeoMetadata {
            title: "T".into(),
            description: "D".into(),
            og_image_width: Some(1200),
            web_page_type: Some("WebPage".into()),
            structured_data: vec![json!({ "@type": "Thing" })],
            ..Default::default()
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "T",
                "description": "D",
                "ogImageWidth": 1200,
                "webPageType": "WebPage",
                "structuredData": [{ "@type": "Thing" }]
            })
        );
        let back: SeoMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_patch_builders() {
        let patch = MetaPatch::copy("About", "Who we are")
            .with_page_type("AboutPage")
            .with_robots("noindex, nofollow");
        assert_eq!(patch.web_page_type.as_deref(), Some("AboutPage"));
        assert_eq!(patch.bingbot.as_deref(), Some("noindex, nofollow"));
    }
}
