//! Metadata layering.
//!
//! ```text
//! defaults ─► route table ─► content rule (RouteShape) ─► social
//!          ─► clamp ─► fallback chains ─► images ─► graph
//! ```
//!
//! Each layer only overwrites a field with a non-blank value.

use super::og::{OG_TYPE_ARTICLE, OgDefaults, twitter_handle};
use super::schema::{GraphInput, build_graph, nodes};
use super::shape::RouteShape;
use super::{MetaPatch, SeoMetadata, tables};
use crate::config::{SeoConfig, cfg};
use crate::content::{BlogPost, ContentData, PostCatalog, PostSource, Product};
use crate::debug;
use crate::route::{Route, normalize_base_url};
use crate::utils::text::{clamp_utf16, merge_keywords};
use serde_json::Value;

/// Description used when a blog article cannot be found.
pub const NOT_FOUND_DESCRIPTION: &str =
    "The article you're looking for doesn't exist or has been moved.";

/// Page type of a single article, replacing the blog index's collection type.
const ARTICLE_PAGE_TYPE: &str = "WebPage";

/// Resolve with the active config and the built-in post catalog.
pub fn resolve(path: &str, content: Option<&ContentData>, base_url: &str) -> SeoMetadata {
    let config = cfg();
    Resolver::new(&config, PostCatalog::builtin()).resolve(path, content, base_url)
}

/// Metadata resolver bound to a config and a post source.
pub struct Resolver<'a> {
    config: &'a SeoConfig,
    posts: &'a dyn PostSource,
}

/// What the content rule matched, carried into the graph builder.
#[derive(Default)]
struct Matched<'c> {
    post: Option<&'c BlogPost>,
    product: Option<&'c Product>,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a SeoConfig, posts: &'a dyn PostSource) -> Self {
        Self { config, posts }
    }

    /// Resolve full metadata, structured data included, for `path`.
    ///
    /// Never fails: missing or malformed content degrades to defaults.
    pub fn resolve(
        &self,
        path: &str,
        content: Option<&ContentData>,
        base_url: &str,
    ) -> SeoMetadata {
        let base = normalize_base_url(base_url, self.config);
        let route = Route::parse(path);
        let canonical = route.canonical_url(&base);

        let mut meta = OgDefaults::from_config(self.config).to_metadata();
        let mut queued: Vec<Value> = Vec::new();

        if let Some(entry) = tables::route_entry(&route.key) {
            meta.apply(&entry.patch);
            queued.extend(entry.seeds.iter().cloned());
        }

        let matched = match RouteShape::classify(&route) {
            RouteShape::Root => {
                self.apply_hero(&mut meta, content);
                Matched::default()
            }
            RouteShape::BlogArticle { slug } => Matched {
                post: self.apply_post(&mut meta, slug, content),
                product: None,
            },
            RouteShape::Product { slug } => Matched {
                post: None,
                product: self.apply_product(&mut meta, &mut queued, slug, content, &base, &canonical),
            },
            RouteShape::Static => Matched::default(),
        };

        let contact = content.and_then(|c| c.contact.as_ref());
        if let Some(handle) = contact
            .and_then(|c| c.twitter.as_deref())
            .and_then(twitter_handle)
        {
            meta.twitter_site = Some(handle.clone());
            meta.twitter_creator = Some(handle);
        }

        meta.canonical = Some(canonical);
        self.finish(&mut meta, &base, &route);

        meta.structured_data = build_graph(&GraphInput {
            config: self.config,
            base: &base,
            route: &route,
            meta: &meta,
            contact,
            post: matched.post,
            product: matched.product,
            queued: &queued,
            posts: self.posts,
        });
        meta
    }

    // ========================================================================
    // content rules
    // ========================================================================

    fn apply_hero(&self, meta: &mut SeoMetadata, content: Option<&ContentData>) {
        let Some(hero) = content.and_then(|c| c.hero.as_ref()) else {
            return;
        };
        meta.apply(&MetaPatch {
            title: hero.seo_title.clone(),
            description: hero.seo_description.clone(),
            ..MetaPatch::default()
        });
    }

    fn apply_post<'c>(
        &'c self,
        meta: &mut SeoMetadata,
        slug: Option<&str>,
        content: Option<&'c ContentData>,
    ) -> Option<&'c BlogPost> {
        let Some(post) = select_post(self.posts, slug, content) else {
            debug!("seo"; "no post for `/blog/{}`", slug.unwrap_or_default());
            meta.set_robots(&self.config.robots.missing);
            meta.title = format!("Article not found | {}", self.config.site.name);
            meta.description = NOT_FOUND_DESCRIPTION.to_string();
            meta.web_page_type = Some(ARTICLE_PAGE_TYPE.to_string());
            return None;
        };

        let keywords = merge_keywords(
            [
                post.category.as_deref(),
                Some(post.title.as_str()),
                Some(self.config.site.name.as_str()),
            ]
            .into_iter()
            .flatten(),
        );
        meta.apply(&MetaPatch {
            title: Some(post.meta_title.clone().unwrap_or_else(|| post.title.clone())),
            description: post
                .meta_description
                .clone()
                .or_else(|| post.excerpt.clone()),
            keywords,
            og_image: post.hero_image.clone(),
            og_image_alt: post.hero_image_alt.clone(),
            twitter_image: post.hero_image.clone(),
            twitter_image_alt: post.hero_image_alt.clone(),
            og_type: Some(OG_TYPE_ARTICLE.to_string()),
            web_page_type: Some(ARTICLE_PAGE_TYPE.to_string()),
            ..MetaPatch::default()
        });
        Some(post)
    }

    fn apply_product<'c>(
        &self,
        meta: &mut SeoMetadata,
        queued: &mut Vec<Value>,
        slug: &str,
        content: Option<&'c ContentData>,
        base: &str,
        canonical: &str,
    ) -> Option<&'c Product> {
        let Some(product) = content.and_then(|c| c.product(slug)) else {
            debug!("seo"; "no product `{}`, using defaults", slug);
            return None;
        };

        let site_name = &self.config.site.name;
        meta.apply(&MetaPatch {
            title: Some(format!("{} | {}", product.title, site_name)),
            description: product.description.clone(),
            og_image: product
                .og_image
                .clone()
                .or_else(|| product.images.first().cloned()),
            twitter_image: product.twitter_image.clone(),
            web_page_type: Some("ItemPage".to_string()),
            ..MetaPatch::default()
        });

        if let Some(price) = product.price.as_deref()
            && nodes::parse_price(price).is_none()
        {
            debug!("seo"; "no numeric price in `{}` for `{}`, skipping offer", price, slug);
        }

        let image = meta.og_image.as_deref().map(|url| nodes::absolute(base, url));
        queued.push(nodes::product(product, site_name, base, canonical, image.as_deref()));
        queued.push(nodes::breadcrumb(
            &nodes::node_id(canonical, "breadcrumb"),
            &[
                ("Home".to_string(), base.to_string()),
                (product.title.clone(), canonical.to_string()),
            ],
        ));
        Some(product)
    }

    // ========================================================================
    // post-processing
    // ========================================================================

    fn finish(&self, meta: &mut SeoMetadata, base: &str, route: &Route) {
        let site = &self.config.site;
        let limits = &self.config.limits;

        meta.title = clamp_utf16(&meta.title, limits.title);
        if meta.title.is_empty() {
            meta.title = clamp_utf16(&site.name, limits.title);
        }
        meta.description = clamp_utf16(&meta.description, limits.description);
        if meta.description.is_empty() {
            meta.description = clamp_utf16(&site.description, limits.description);
        }

        fill(&mut meta.og_title, &meta.title);
        fill(&mut meta.og_description, &meta.description);
        let (og_title, og_description) = (meta.og_title.clone(), meta.og_description.clone());
        fill_opt(&mut meta.twitter_title, og_title);
        fill_opt(&mut meta.twitter_description, og_description);

        match meta.og_image.take() {
            Some(image) => meta.og_image = Some(nodes::absolute(base, &image)),
            None => {
                meta.og_image = Some(nodes::absolute(base, &site.og_image));
                meta.og_image_width = Some(site.og_image_width);
                meta.og_image_height = Some(site.og_image_height);
            }
        }
        meta.twitter_image = match meta.twitter_image.take() {
            Some(image) => Some(nodes::absolute(base, &image)),
            None => meta.og_image.clone(),
        };

        let alt = meta.og_title.clone();
        fill_opt(&mut meta.og_image_alt, alt);
        let alt = meta.og_image_alt.clone();
        fill_opt(&mut meta.twitter_image_alt, alt);

        if meta.web_page_type.is_none() {
            let page_type = if route.is_root() { "CollectionPage" } else { "WebPage" };
            meta.web_page_type = Some(page_type.to_string());
        }
    }
}

/// Blog post for an article route.
///
/// The inline post from the blob wins when the path has no slug, when the
/// slugs agree, or when the path slug is unknown to the catalog. Otherwise
/// the catalog lookup wins.
fn select_post<'c>(
    posts: &'c dyn PostSource,
    slug: Option<&str>,
    content: Option<&'c ContentData>,
) -> Option<&'c BlogPost> {
    let lookup = slug.and_then(|slug| posts.find_by_slug(slug));

    if let Some(inline) = content.and_then(|c| c.blog_post.as_ref()) {
        let agrees = match (inline.slug.as_deref(), slug) {
            (Some(inline_slug), Some(slug)) => inline_slug == slug,
            (None, Some(_)) => false,
            (_, None) => true,
        };
        if agrees || lookup.is_none() {
            return Some(inline);
        }
    }
    lookup
}

fn fill(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

fn fill_opt(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        *slot = value;
    }
}
