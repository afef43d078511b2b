//! schema.org node constructors.
//!
//! Constructors emit every property they know about; blank or missing
//! values are left for `clean` to prune, so callers never branch on
//! optional fields.

use crate::config::SeoConfig;
use crate::content::{BlogPost, Contact, FaqEntry, Product};
use crate::route::join_url;
use crate::seo::SeoMetadata;
use crate::seo::tables::PluginApp;
use crate::utils::date::DateTimeUtc;
use crate::utils::text::title_case_slug;
use serde_json::{Value, json};

/// `{prefix}#{fragment}`
#[inline]
pub fn node_id(prefix: &str, fragment: &str) -> String {
    format!("{prefix}#{fragment}")
}

/// `{ "@id": id }`
#[inline]
pub fn reference(id: &str) -> Value {
    json!({ "@id": id })
}

/// Resolve a possibly relative URL against `base`.
///
/// Absolute http(s) URLs pass through; protocol-relative ones get `https:`.
pub fn absolute(base: &str, url: &str) -> String {
    let url = url.trim();
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
    }
}

// ============================================================================
// Site-scoped nodes
// ============================================================================

pub fn organization(config: &SeoConfig, base: &str, contact: Option<&Contact>) -> Value {
    let mut same_as: Vec<String> = Vec::new();
    let contact_profiles = contact.map(Contact::profiles).unwrap_or_default();
    for profile in config.social.profiles.iter().chain(&contact_profiles) {
        if !same_as.contains(profile) {
            same_as.push(profile.clone());
        }
    }

    let contact_point = contact.and_then(|c| c.email.as_deref()).map(|email| {
        json!({
            "@type": "ContactPoint",
            "contactType": "customer support",
            "email": email,
            "url": absolute(base, &config.site.contact_anchor),
        })
    });

    json!({
        "@type": "Organization",
        "@id": node_id(base, "organization"),
        "name": config.site.name,
        "url": base,
        "logo": {
            "@type": "ImageObject",
            "url": absolute(base, &config.site.logo),
        },
        "description": config.site.description,
        "sameAs": same_as,
        "contactPoint": contact_point,
    })
}

pub fn website(config: &SeoConfig, base: &str) -> Value {
    json!({
        "@type": "WebSite",
        "@id": node_id(base, "website"),
        "url": base,
        "name": config.site.name,
        "description": config.site.description,
        "inLanguage": config.site.language,
        "publisher": reference(&node_id(base, "organization")),
        "potentialAction": {
            "@type": "ReadAction",
            "target": absolute(base, &config.site.contact_anchor),
        },
    })
}

// ============================================================================
// Page-scoped nodes
// ============================================================================

/// `ImageObject` for the page's social image, if it has one.
pub fn primary_image(meta: &SeoMetadata, canonical: &str) -> Option<Value> {
    let url = meta.og_image.as_deref()?;
    Some(json!({
        "@type": "ImageObject",
        "@id": node_id(canonical, "primaryimage"),
        "url": url,
        "contentUrl": url,
        "width": meta.og_image_width,
        "height": meta.og_image_height,
        "caption": meta.og_image_alt,
    }))
}

pub struct WebPageRefs<'a> {
    pub base: &'a str,
    pub canonical: &'a str,
    pub language: &'a str,
    pub has_image: bool,
    pub breadcrumb: &'a str,
}

pub fn web_page(meta: &SeoMetadata, page_type: &str, refs: &WebPageRefs<'_>) -> Value {
    let image = refs
        .has_image
        .then(|| reference(&node_id(refs.canonical, "primaryimage")));
    json!({
        "@type": page_type,
        "@id": node_id(refs.canonical, "webpage"),
        "url": refs.canonical,
        "name": meta.title,
        "description": meta.description,
        "inLanguage": refs.language,
        "isPartOf": reference(&node_id(refs.base, "website")),
        "about": reference(&node_id(refs.base, "organization")),
        "primaryImageOfPage": image,
        "breadcrumb": reference(refs.breadcrumb),
    })
}

/// `BreadcrumbList` from `(label, url)` pairs, positions starting at 1.
pub fn breadcrumb(id: &str, crumbs: &[(String, String)]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();
    json!({
        "@type": "BreadcrumbList",
        "@id": id,
        "itemListElement": items,
    })
}

/// Home, then one crumb per segment of `path` with cumulative URLs.
pub fn path_crumbs(base: &str, path: &str) -> Vec<(String, String)> {
    let mut crumbs = vec![("Home".to_string(), base.to_string())];
    let mut cumulative = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        cumulative.push('/');
        cumulative.push_str(segment);
        crumbs.push((title_case_slug(segment), join_url(base, &cumulative)));
    }
    crumbs
}

pub fn article(meta: &SeoMetadata, post: &BlogPost, base: &str, canonical: &str) -> Value {
    let date = |raw: &Option<String>| {
        raw.as_deref()
            .and_then(DateTimeUtc::parse)
            .map(DateTimeUtc::to_iso8601)
    };
    json!({
        "@type": "Article",
        "@id": node_id(canonical, "article"),
        "headline": meta.title,
        "description": meta.description,
        "image": meta.og_image,
        "datePublished": date(&post.published_at),
        "dateModified": date(&post.updated_at),
        "articleSection": post.category,
        "keywords": meta.keywords,
        "author": reference(&node_id(base, "organization")),
        "publisher": reference(&node_id(base, "organization")),
        "mainEntityOfPage": reference(&node_id(canonical, "webpage")),
        "isPartOf": reference(&node_id(base, "website")),
    })
}

pub fn faq_page(canonical: &str, faqs: &[FaqEntry]) -> Option<Value> {
    if faqs.is_empty() {
        return None;
    }
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();
    Some(json!({
        "@type": "FAQPage",
        "@id": node_id(canonical, "faq"),
        "mainEntity": questions,
    }))
}

pub fn software_application(app: &PluginApp, base: &str, canonical: &str) -> Value {
    json!({
        "@type": "SoftwareApplication",
        "@id": node_id(canonical, "software"),
        "name": app.name,
        "description": app.description,
        "image": absolute(base, app.image),
        "url": canonical,
        "applicationCategory": app.category,
        "operatingSystem": "Figma",
        "isAccessibleForFree": true,
        "publisher": reference(&node_id(base, "organization")),
    })
}

/// `ItemList` of posts, linking each to its article URL.
pub fn item_list(canonical: &str, base: &str, posts: &[BlogPost]) -> Option<Value> {
    let items: Vec<Value> = posts
        .iter()
        .filter_map(|post| Some((post.slug.as_deref()?, post)))
        .enumerate()
        .map(|(i, (slug, post))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "url": join_url(base, &format!("/blog/{slug}")),
                "name": post.title,
            })
        })
        .collect();
    (!items.is_empty()).then(|| {
        json!({
            "@type": "ItemList",
            "@id": node_id(canonical, "posts"),
            "itemListElement": items,
        })
    })
}

// ============================================================================
// Product
// ============================================================================

pub fn product(
    product: &Product,
    site_name: &str,
    base: &str,
    canonical: &str,
    image: Option<&str>,
) -> Value {
    let images: Vec<String> = if product.images.is_empty() {
        image.map(str::to_string).into_iter().collect()
    } else {
        product.images.iter().map(|url| absolute(base, url)).collect()
    };
    let offer = product
        .price
        .as_deref()
        .and_then(|price| offer(price, product.currency.as_deref(), canonical));

    json!({
        "@type": "Product",
        "@id": node_id(canonical, "product"),
        "name": product.title,
        "description": product.description,
        "image": images,
        "url": canonical,
        "brand": {
            "@type": "Brand",
            "name": site_name,
        },
        "offers": offer,
    })
}

/// `Offer` for a display price; `None` when no number can be read.
pub fn offer(display_price: &str, currency: Option<&str>, url: &str) -> Option<Value> {
    let price = parse_price(display_price)?;
    Some(json!({
        "@type": "Offer",
        "price": price,
        "priceCurrency": price_currency(display_price, currency),
        "availability": "https://schema.org/InStock",
        "url": url,
    }))
}

/// Keep digits and dots: `"$29.00/mo"` → `"29.00"`, `"1,299"` → `"1299"`.
pub fn parse_price(display: &str) -> Option<String> {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let digits = digits.trim_end_matches('.');
    let value: f64 = digits.parse().ok()?;
    value.is_finite().then(|| digits.to_string())
}

/// Explicit ISO code, else a symbol in the display price, else USD.
pub fn price_currency(display: &str, explicit: Option<&str>) -> String {
    if let Some(code) = explicit.map(str::trim)
        && code.len() == 3
        && code.chars().all(|c| c.is_ascii_alphabetic())
    {
        return code.to_ascii_uppercase();
    }
    let code = match display.chars().find(|&c| matches!(c, '$' | '€' | '£' | '¥')) {
        Some('€') => "EUR",
        Some('£') => "GBP",
        Some('¥') => "JPY",
        _ => "USD",
    };
    code.to_string()
}

// ============================================================================
// Seeds
// ============================================================================

/// Anchor fragment `@id`s (`#howto`) to `canonical`, recursively.
pub fn anchor_ids(node: Value, canonical: &str) -> Value {
    match node {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| {
                    let value = match value {
                        Value::String(id) if key == "@id" && id.starts_with('#') => {
                            Value::String(format!("{canonical}{id}"))
                        }
                        other => anchor_ids(other, canonical),
                    };
                    (key, value)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| anchor_ids(item, canonical))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://bibliokit.com";

    #[test]
    fn test_absolute() {
        assert_eq!(absolute(BASE, "/og/a.png"), "https://bibliokit.com/og/a.png");
        assert_eq!(absolute(BASE, "og/a.png"), "https://bibliokit.com/og/a.png");
        assert_eq!(absolute(BASE, "https://cdn.x.com/a.png"), "https://cdn.x.com/a.png");
        assert_eq!(absolute(BASE, "//cdn.x.com/a.png"), "https://cdn.x.com/a.png");
    }

    mod price {
        use super::*;

        #[test]
        fn test_parse_price() {
            assert_eq!(parse_price("$29.00/mo").as_deref(), Some("29.00"));
            assert_eq!(parse_price("€1,299").as_deref(), Some("1299"));
            assert_eq!(parse_price("12").as_deref(), Some("12"));
            assert_eq!(parse_price("Free"), None);
            assert_eq!(parse_price(""), None);
            assert_eq!(parse_price("1.2.3"), None);
        }

        #[test]
        fn test_currency() {
            assert_eq!(price_currency("$29.00/mo", None), "USD");
            assert_eq!(price_currency("€19", None), "EUR");
            assert_eq!(price_currency("£5", None), "GBP");
            assert_eq!(price_currency("29", None), "USD");
            assert_eq!(price_currency("$29", Some("cad")), "CAD");
            assert_eq!(price_currency("$29", Some("dollars")), "USD");
        }

        #[test]
        fn test_offer() {
            let offer = offer("$29.00/mo", None, "https://bibliokit.com/pro").unwrap();
            assert_eq!(offer["price"], "29.00");
            assert_eq!(offer["priceCurrency"], "USD");
            assert!(super::offer("Free", None, "u").is_none());
        }
    }

    #[test]
    fn test_path_crumbs() {
        let crumbs = path_crumbs(BASE, "/blog/design-system_tips");
        assert_eq!(
            crumbs,
            [
                ("Home".to_string(), BASE.to_string()),
                ("Blog".to_string(), format!("{BASE}/blog")),
                (
                    "Design System Tips".to_string(),
                    format!("{BASE}/blog/design-system_tips")
                ),
            ]
        );
        assert_eq!(path_crumbs(BASE, "/").len(), 1);
    }

    #[test]
    fn test_organization_same_as_union() {
        let config = SeoConfig::default();
        let contact = Contact {
            email: Some("hello@bibliokit.com".into()),
            twitter: Some("@bibliokit".into()),
            linkedin: Some("bibliokit".into()),
            ..Default::default()
        };
        let org = organization(&config, BASE, Some(&contact));
        let same_as = org["sameAs"].as_array().unwrap();
        // twitter profile is already in the fixed set
        assert_eq!(same_as.len(), config.social.profiles.len() + 1);
        assert_eq!(org["contactPoint"]["email"], "hello@bibliokit.com");

        let org = organization(&config, BASE, None);
        assert!(org["contactPoint"].is_null());
    }

    #[test]
    fn test_article_dates() {
        let post = BlogPost {
            title: "T".into(),
            published_at: Some("2024-09-12T09:00:00Z".into()),
            updated_at: Some("not a date".into()),
            ..Default::default()
        };
        let meta = SeoMetadata::default();
        let node = article(&meta, &post, BASE, "https://bibliokit.com/blog/t");
        assert_eq!(node["datePublished"], "2024-09-12T09:00:00Z");
        assert!(node["dateModified"].is_null());
    }

    #[test]
    fn test_anchor_ids() {
        let seed = json!({
            "@id": "#howto",
            "step": [{ "@id": "#step-1" }],
            "about": { "@id": "https://elsewhere.com#x" }
        });
        let anchored = anchor_ids(seed, "https://bibliokit.com/p");
        assert_eq!(anchored["@id"], "https://bibliokit.com/p#howto");
        assert_eq!(anchored["step"][0]["@id"], "https://bibliokit.com/p#step-1");
        assert_eq!(anchored["about"]["@id"], "https://elsewhere.com#x");
    }

    #[test]
    fn test_item_list_skips_unslugged_posts() {
        let posts = vec![
            BlogPost {
                slug: Some("a".into()),
                title: "A".into(),
                ..Default::default()
            },
            BlogPost {
                title: "No slug".into(),
                ..Default::default()
            },
        ];
        let list = item_list("https://bibliokit.com/blog", BASE, &posts).unwrap();
        assert_eq!(list["itemListElement"].as_array().unwrap().len(), 1);
        assert_eq!(list["itemListElement"][0]["url"], "https://bibliokit.com/blog/a");
        assert!(item_list("c", BASE, &[]).is_none());
    }
}
