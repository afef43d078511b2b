//! Graph assembly: site nodes, page nodes, content nodes, then clean + dedupe.

use super::nodes::{self, WebPageRefs};
use super::{clean, dedupe};
use crate::config::SeoConfig;
use crate::content::{BlogPost, Contact, FaqEntry, PostSource, Product};
use crate::route::{BLOG_INDEX, Route};
use crate::seo::{SeoMetadata, tables};
use serde_json::Value;

/// Everything the builder reads. Produced by the resolver once metadata
/// layering is finished.
pub struct GraphInput<'a> {
    pub config: &'a SeoConfig,
    pub base: &'a str,
    pub route: &'a Route,
    pub meta: &'a SeoMetadata,
    pub contact: Option<&'a Contact>,
    /// Resolved blog post, for article routes only.
    pub post: Option<&'a BlogPost>,
    pub product: Option<&'a Product>,
    /// Route seeds and content nodes queued during layering.
    pub queued: &'a [Value],
    pub posts: &'a dyn PostSource,
}

/// Build the page graph.
///
/// Order: Organization, WebSite, primary ImageObject, WebPage,
/// BreadcrumbList, queued nodes, Article, FAQPage, SoftwareApplication,
/// ItemList. Every node is cleaned; duplicates by identity key are
/// dropped with the first occurrence kept.
pub fn build_graph(input: &GraphInput<'_>) -> Vec<Value> {
    let GraphInput {
        config,
        base,
        route,
        meta,
        ..
    } = *input;

    let canonical = meta
        .canonical
        .clone()
        .unwrap_or_else(|| route.canonical_url(base));
    let default_breadcrumb = nodes::node_id(&canonical, "breadcrumb");

    let queued: Vec<Value> = input
        .queued
        .iter()
        .map(|node| {
            let node = nodes::anchor_ids(node.clone(), &canonical);
            with_breadcrumb_id(node, &default_breadcrumb)
        })
        .collect();
    let queued_breadcrumb = queued
        .iter()
        .find(|node| is_type(node, "BreadcrumbList"))
        .and_then(|node| node.get("@id"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut graph = vec![
        nodes::organization(config, base, input.contact),
        nodes::website(config, base),
    ];

    let image = nodes::primary_image(meta, &canonical);
    let has_image = image.is_some();
    graph.extend(image);

    let page_type = meta.web_page_type.as_deref().unwrap_or("WebPage");
    graph.push(nodes::web_page(
        meta,
        page_type,
        &WebPageRefs {
            base,
            canonical: &canonical,
            language: &config.site.language,
            has_image,
            breadcrumb: queued_breadcrumb.as_deref().unwrap_or(&default_breadcrumb),
        },
    ));

    if queued_breadcrumb.is_none() {
        let crumbs = nodes::path_crumbs(base, &route.canonical_path);
        graph.push(nodes::breadcrumb(&default_breadcrumb, &crumbs));
    }

    graph.extend(queued);

    if let Some(post) = input.post {
        graph.push(nodes::article(meta, post, base, &canonical));
    }

    graph.extend(nodes::faq_page(&canonical, resolve_faqs(input)));

    if let Some(app) = tables::plugin(&route.canonical_path) {
        graph.push(nodes::software_application(app, base, &canonical));
    }

    if route.path == BLOG_INDEX {
        graph.extend(nodes::item_list(&canonical, base, input.posts.all()));
    }

    dedupe(graph.into_iter().filter_map(clean).collect())
}

/// First non-empty FAQ source: post, route table, product, then the
/// shared default set when a product exists.
fn resolve_faqs<'a>(input: &GraphInput<'a>) -> &'a [FaqEntry] {
    if let Some(post) = input.post
        && !post.faqs.is_empty()
    {
        return &post.faqs;
    }
    if let Some(faqs) = tables::route_faqs(&input.route.path)
        .or_else(|| tables::route_faqs(&input.route.canonical_path))
    {
        return faqs;
    }
    match input.product {
        Some(product) if !product.faqs.is_empty() => product.faqs.as_slice(),
        Some(_) => tables::default_faqs(),
        None => &[],
    }
}

fn is_type(node: &Value, ty: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == ty,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(ty)),
        _ => false,
    }
}

/// A queued breadcrumb without `@id` gets the page default so the
/// WebPage reference resolves.
fn with_breadcrumb_id(mut node: Value, default_id: &str) -> Value {
    if is_type(&node, "BreadcrumbList")
        && let Some(map) = node.as_object_mut()
        && !map.contains_key("@id")
    {
        map.insert("@id".into(), Value::String(default_id.to_string()));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostCatalog;
    use serde_json::json;

    const BASE: &str = "https://bibliokit.com";

    fn meta_for(canonical: &str) -> SeoMetadata {
        SeoMetadata {
            title: "Page".into(),
            description: "About the page".into(),
            canonical: Some(canonical.into()),
            og_image: Some(format!("{BASE}/og.png")),
            ..Default::default()
        }
    }

    fn types(graph: &[Value]) -> Vec<&str> {
        graph.iter().filter_map(|n| n["@type"].as_str()).collect()
    }

    #[test]
    fn test_base_graph_order() {
        let config = SeoConfig::default();
        let route = Route::parse("/about");
        let meta = meta_for(&format!("{BASE}/about"));
        let graph = build_graph(&GraphInput {
            config: &config,
            base: BASE,
            route: &route,
            meta: &meta,
            contact: None,
            post: None,
            product: None,
            queued: &[],
            posts: PostCatalog::builtin(),
        });
        assert_eq!(
            types(&graph),
            ["Organization", "WebSite", "ImageObject", "WebPage", "BreadcrumbList"]
        );
        assert_eq!(graph[3]["breadcrumb"]["@id"], format!("{BASE}/about#breadcrumb"));
    }

    #[test]
    fn test_queued_breadcrumb_replaces_synthesized() {
        let config = SeoConfig::default();
        let route = Route::parse("/kit");
        let meta = meta_for(&format!("{BASE}/kit"));
        let queued = [
            json!({ "@type": "Product", "name": "Kit" }),
            json!({ "@type": "BreadcrumbList", "itemListElement": [{ "@type": "ListItem", "position": 1 }] }),
        ];
        let graph = build_graph(&GraphInput {
            config: &config,
            base: BASE,
            route: &route,
            meta: &meta,
            contact: None,
            post: None,
            product: None,
            queued: &queued,
            posts: PostCatalog::builtin(),
        });
        let crumbs: Vec<_> = graph.iter().filter(|n| is_type(n, "BreadcrumbList")).collect();
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0]["@id"], format!("{BASE}/kit#breadcrumb"));
        assert!(crumbs[0]["itemListElement"][0]["name"].is_null());
    }

    #[test]
    fn test_faq_priority() {
        let config = SeoConfig::default();
        let route = Route::parse("/kit");
        let meta = meta_for(&format!("{BASE}/kit"));
        let product = Product {
            title: "Kit".into(),
            ..Default::default()
        };
        let input = GraphInput {
            config: &config,
            base: BASE,
            route: &route,
            meta: &meta,
            contact: None,
            post: None,
            product: Some(&product),
            queued: &[],
            posts: PostCatalog::builtin(),
        };
        assert_eq!(resolve_faqs(&input), tables::default_faqs());

        let input = GraphInput {
            product: None,
            ..input
        };
        assert!(resolve_faqs(&input).is_empty());
    }

    #[test]
    fn test_is_type() {
        assert!(is_type(&json!({ "@type": "A" }), "A"));
        assert!(is_type(&json!({ "@type": ["B", "A"] }), "A"));
        assert!(!is_type(&json!({ "type": "A" }), "A"));
    }
}
