//! Server-side head rendering.
//!
//! Produces the HTML fragment injected into `<head>`:
//!
//! ```text
//! <title>…</title>
//! <meta name="description" content="…">
//! <meta property="og:title" content="…">
//! <link rel="canonical" href="…">
//! <script type="application/ld+json" data-seo-engine>{ "@context": …, "@graph": [ … ] }</script>
//! ```

use super::SeoMetadata;
use crate::debug;
use crate::utils::html::{escape, escape_attr, escape_script_json};
use serde_json::{Map, Value};
use thiserror::Error;

/// Attribute carried by every JSON-LD script this engine writes.
pub const ENGINE_MARKER: &str = "data-seo-engine";

/// Context used for nodes without their own `@context`.
pub const DEFAULT_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize JSON-LD: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which attribute keys a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

type Getter = fn(&SeoMetadata) -> Option<String>;

/// Every meta element the engine manages, in emission order.
///
/// Shared by the SSR renderer and the head sync so both write the same set.
pub const META_FIELDS: &[(MetaAttr, &str, Getter)] = &[
    (MetaAttr::Name, "description", |m| Some(m.description.clone())),
    (MetaAttr::Name, "keywords", |m| m.keywords.clone()),
    (MetaAttr::Name, "robots", |m| m.robots.clone()),
    (MetaAttr::Name, "googlebot", |m| m.googlebot.clone()),
    (MetaAttr::Name, "bingbot", |m| m.bingbot.clone()),
    (MetaAttr::Property, "og:title", |m| m.og_title.clone()),
    (MetaAttr::Property, "og:description", |m| m.og_description.clone()),
    (MetaAttr::Property, "og:type", |m| m.og_type.clone()),
    (MetaAttr::Property, "og:url", |m| m.canonical.clone()),
    (MetaAttr::Property, "og:site_name", |m| m.site_name.clone()),
    (MetaAttr::Property, "og:locale", |m| m.locale.clone()),
    (MetaAttr::Property, "og:image", |m| m.og_image.clone()),
    (MetaAttr::Property, "og:image:alt", |m| m.og_image_alt.clone()),
    (MetaAttr::Property, "og:image:width", |m| {
        m.og_image_width.map(|w| w.to_string())
    }),
    (MetaAttr::Property, "og:image:height", |m| {
        m.og_image_height.map(|h| h.to_string())
    }),
    (MetaAttr::Name, "twitter:card", |m| m.twitter_card.clone()),
    (MetaAttr::Name, "twitter:title", |m| m.twitter_title.clone()),
    (MetaAttr::Name, "twitter:description", |m| m.twitter_description.clone()),
    (MetaAttr::Name, "twitter:image", |m| m.twitter_image.clone()),
    (MetaAttr::Name, "twitter:image:alt", |m| m.twitter_image_alt.clone()),
    (MetaAttr::Name, "twitter:site", |m| m.twitter_site.clone()),
    (MetaAttr::Name, "twitter:creator", |m| m.twitter_creator.clone()),
];

/// Meta elements with content for `meta`, in emission order.
pub fn meta_tags(meta: &SeoMetadata) -> Vec<MetaTag> {
    META_FIELDS
        .iter()
        .filter_map(|&(attr, key, get)| {
            get(meta)
                .filter(|content| !content.trim().is_empty())
                .map(|content| MetaTag { attr, key, content })
        })
        .collect()
}

/// `<title>`, meta elements and the canonical link.
pub fn render_meta_tags(meta: &SeoMetadata) -> String {
    let mut out = format!("<title>{}</title>\n", escape(&meta.title));
    for tag in meta_tags(meta) {
        out.push_str(&format!(
            "<meta {}=\"{}\" content=\"{}\">\n",
            tag.attr.as_str(),
            tag.key,
            escape_attr(&tag.content)
        ));
    }
    if let Some(canonical) = &meta.canonical {
        out.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_attr(canonical)
        ));
    }
    out
}

/// JSON-LD scripts for the graph, or `""` when there is nothing to emit.
///
/// A serialization failure drops the structured data for this call only.
pub fn render_structured_data(meta: &SeoMetadata) -> String {
    match json_ld_payloads(meta) {
        Ok(payloads) => payloads
            .iter()
            .map(|json| {
                format!("<script type=\"application/ld+json\" {ENGINE_MARKER}>\n{json}\n</script>\n")
            })
            .collect(),
        Err(e) => {
            debug!("seo"; "structured data skipped: {}", e);
            String::new()
        }
    }
}

/// Full head fragment: meta tags followed by structured data.
pub fn render_head(meta: &SeoMetadata) -> String {
    let mut out = render_meta_tags(meta);
    out.push_str(&render_structured_data(meta));
    out
}

/// Script bodies for the graph, grouped by `@context`.
///
/// One context yields a single `{ @context, @graph }` document. Several
/// contexts yield one document per group in first-seen order, with a
/// lone node carrying its `@context` inline. Bodies are pretty-printed
/// and safe to place inside `<script>`.
pub fn json_ld_payloads(meta: &SeoMetadata) -> Result<Vec<String>, EmitError> {
    let groups = group_by_context(&meta.structured_data);
    let single = groups.len() == 1;

    groups
        .into_iter()
        .map(|(context, mut nodes)| {
            let document = if !single && nodes.len() == 1 {
                with_context(&context, nodes.remove(0))
            } else {
                let mut doc = Map::new();
                doc.insert("@context".into(), Value::String(context));
                doc.insert("@graph".into(), Value::Array(nodes));
                Value::Object(doc)
            };
            let json = serde_json::to_string_pretty(&document)?;
            Ok(escape_script_json(&json).into_owned())
        })
        .collect()
}

/// Split nodes by their `@context`, stripping it from each node.
fn group_by_context(nodes: &[Value]) -> Vec<(String, Vec<Value>)> {
    let mut groups: Vec<(String, Vec<Value>)> = Vec::new();
    for node in nodes {
        let mut node = node.clone();
        let context = node
            .as_object_mut()
            .and_then(|map| map.shift_remove("@context"))
            .and_then(|ctx| ctx.as_str().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

        match groups.iter_mut().find(|(ctx, _)| *ctx == context) {
            Some((_, members)) => members.push(node),
            None => groups.push((context, vec![node])),
        }
    }
    groups
}

/// Node with `@context` as its first key.
fn with_context(context: &str, node: Value) -> Value {
    let Value::Object(fields) = node else {
        return node;
    };
    let mut map = Map::with_capacity(fields.len() + 1);
    map.insert("@context".into(), Value::String(context.to_string()));
    map.extend(fields);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SeoMetadata {
        SeoMetadata {
            title: "Tools & <Plugins>".into(),
            description: "Say \"hi\"".into(),
            canonical: Some("https://bibliokit.com/about".into()),
            og_title: Some("Tools".into()),
            og_image_width: Some(1200),
            keywords: Some("   ".into()),
            ..Default::default()
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn test_escapes_text_and_attributes() {
            let html = render_meta_tags(&sample());
            assert!(html.starts_with("<title>Tools &amp; &lt;Plugins&gt;</title>\n"));
            assert!(html.contains("<meta name=\"description\" content=\"Say &quot;hi&quot;\">"));
            assert!(html.contains("<link rel=\"canonical\" href=\"https://bibliokit.com/about\">"));
        }

        #[test]
        fn test_skips_empty_fields() {
            let tags = meta_tags(&sample());
            let keys: Vec<_> = tags.iter().map(|t| t.key).collect();
            assert_eq!(
                keys,
                ["description", "og:title", "og:url", "og:image:width"]
            );
            assert_eq!(tags[3].content, "1200");
            assert_eq!(tags[1].attr, MetaAttr::Property);
        }
    }

    mod json_ld {
        use super::*;

        #[test]
        fn test_empty_graph_renders_nothing() {
            assert_eq!(render_structured_data(&SeoMetadata::default()), "");
        }

        #[test]
        fn test_single_context_single_script() {
            let meta = SeoMetadata {
                structured_data: vec![
                    json!({ "@type": "Organization", "name": "A" }),
                    json!({ "@context": "https://schema.org", "@type": "WebSite" }),
                ],
                ..Default::default()
            };
            let payloads = json_ld_payloads(&meta).unwrap();
            assert_eq!(payloads.len(), 1);
            let doc: Value = serde_json::from_str(&payloads[0]).unwrap();
            assert_eq!(doc["@context"], DEFAULT_CONTEXT);
            assert_eq!(doc["@graph"].as_array().unwrap().len(), 2);
            assert!(doc["@graph"][1].get("@context").is_none());
        }

        #[test]
        fn test_mixed_contexts_split() {
            let meta = SeoMetadata {
                structured_data: vec![
                    json!({ "@type": "Organization" }),
                    json!({ "@context": "https://example.org/ctx", "@type": "Custom" }),
                    json!({ "@type": "WebSite" }),
                ],
                ..Default::default()
            };
            let payloads = json_ld_payloads(&meta).unwrap();
            assert_eq!(payloads.len(), 2);

            let first: Value = serde_json::from_str(&payloads[0]).unwrap();
            assert_eq!(first["@graph"].as_array().unwrap().len(), 2);

            let second: Value = serde_json::from_str(&payloads[1]).unwrap();
            assert_eq!(second["@context"], "https://example.org/ctx");
            assert_eq!(second["@type"], "Custom");
            assert!(payloads[1].trim_start().starts_with("{\n  \"@context\""));
        }

        #[test]
        fn test_script_close_escaped() {
            let meta = SeoMetadata {
                structured_data: vec![json!({ "@type": "Thing", "name": "</script><b>" })],
                ..Default::default()
            };
            let html = render_structured_data(&meta);
            assert!(html.starts_with("<script type=\"application/ld+json\" data-seo-engine>"));
            assert!(html.contains("<\\/script><b>"));
            assert_eq!(html.matches("</script>").count(), 1);
        }
    }

    #[test]
    fn test_render_head_concatenates() {
        let mut meta = sample();
        meta.structured_data = vec![json!({ "@type": "Thing" })];
        let head = render_head(&meta);
        let title = head.find("<title>").unwrap();
        let script = head.find("<script").unwrap();
        assert!(title < script);
    }
}
