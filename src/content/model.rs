//! Typed view of the published CMS blob.

use super::guard;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A question/answer pair, both trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// `None` when either side is blank.
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let (question, answer) = (question.trim(), answer.trim());
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}

/// Home page hero copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hero {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// A product record keyed by its URL slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    /// Display price, e.g. `"$29.00/mo"` or `"Free"`.
    pub price: Option<String>,
    pub currency: Option<String>,
    pub images: Vec<String>,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    pub faqs: Vec<FaqEntry>,
}

/// Contact handles; each may be a bare handle or a full profile URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

/// A blog post, from the built-in catalog or inlined in the blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub hero_image: Option<String>,
    pub hero_image_alt: Option<String>,
    pub category: Option<String>,
    pub faqs: Vec<FaqEntry>,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The CMS blob, decoded leniently: malformed sections are dropped,
/// never rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct ContentData {
    pub hero: Option<Hero>,
    pub products: FxHashMap<String, Product>,
    pub contact: Option<Contact>,
    /// Inline post supplied alongside the blob.
    pub blog_post: Option<BlogPost>,
}

impl ContentData {
    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.get(slug)
    }

    /// Product slugs in sorted order.
    pub fn product_slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.products.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}

impl From<Value> for ContentData {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Value> for ContentData {
    fn from(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };
        Self {
            hero: guard::object(root, "hero").map(Hero::from_map),
            products: decode_products(root.get("products")),
            contact: guard::object(root, "contact").map(Contact::from_map),
            blog_post: guard::object(root, "blogPost").and_then(BlogPost::from_map),
        }
    }
}

/// Products arrive either as a slug map or as an array of records with `slug`.
fn decode_products(value: Option<&Value>) -> FxHashMap<String, Product> {
    let mut products = FxHashMap::default();
    match value {
        Some(Value::Object(map)) => {
            for (slug, record) in map {
                if let Some(product) = record.as_object().and_then(Product::from_map) {
                    products.insert(slug.clone(), product);
                }
            }
        }
        Some(Value::Array(items)) => {
            for record in items.iter().filter_map(Value::as_object) {
                if let Some(slug) = guard::text(record, "slug")
                    && let Some(product) = Product::from_map(record)
                {
                    products.insert(slug, product);
                }
            }
        }
        _ => {}
    }
    products
}

impl Hero {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            title: guard::text(map, "title"),
            subtitle: guard::text(map, "subtitle"),
            seo_title: guard::text(map, "seoTitle"),
            seo_description: guard::text(map, "seoDescription"),
        }
    }
}

impl Product {
    /// `None` without a title; everything else is optional.
    fn from_map(map: &Map<String, Value>) -> Option<Self> {
        let title = guard::text_any(map, &["title", "name"])?;
        let pricing = guard::object(map, "pricing");
        Some(Self {
            title,
            description: guard::text_any(map, &["description", "tagline"]),
            price: pricing
                .and_then(|p| guard::scalar(p, "price"))
                .or_else(|| guard::scalar(map, "price")),
            currency: pricing.and_then(|p| guard::text(p, "currency")),
            images: guard::strings(map, "images"),
            og_image: guard::text(map, "ogImage"),
            twitter_image: guard::text(map, "twitterImage"),
            faqs: guard::faqs(map, "faqs"),
        })
    }
}

impl Contact {
    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            email: guard::text(map, "email"),
            twitter: guard::text(map, "twitter"),
            github: guard::text(map, "github"),
            linkedin: guard::text(map, "linkedin"),
            youtube: guard::text(map, "youtube"),
        }
    }

    /// Profile URLs derived from the handles, in a fixed order.
    pub fn profiles(&self) -> Vec<String> {
        let sources = [
            (&self.twitter, "https://twitter.com/"),
            (&self.github, "https://github.com/"),
            (&self.linkedin, "https://www.linkedin.com/company/"),
            (&self.youtube, "https://www.youtube.com/@"),
        ];
        sources
            .into_iter()
            .filter_map(|(handle, prefix)| {
                let handle = handle.as_deref()?.trim();
                if handle.starts_with("https://") || handle.starts_with("http://") {
                    return Some(handle.to_string());
                }
                let bare = handle.trim_start_matches('@');
                (!bare.is_empty()).then(|| format!("{prefix}{bare}"))
            })
            .collect()
    }
}

impl BlogPost {
    /// `None` without a title.
    pub(crate) fn from_map(map: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            slug: guard::text(map, "slug"),
            title: guard::text(map, "title")?,
            excerpt: guard::text_any(map, &["excerpt", "summary"]),
            meta_title: guard::text(map, "metaTitle"),
            meta_description: guard::text(map, "metaDescription"),
            hero_image: guard::text(map, "heroImage"),
            hero_image_alt: guard::text(map, "heroImageAlt"),
            category: guard::text(map, "category"),
            faqs: guard::faqs(map, "faqs"),
            published_at: guard::text_any(map, &["publishedAt", "datePublished"]),
            updated_at: guard::text_any(map, &["updatedAt", "dateModified"]),
        })
    }
}
