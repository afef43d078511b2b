//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};

use anyhow::Result;
use rustc_hash::FxHashSet;

use super::args::SourceArgs;
use crate::config::SeoConfig;
use crate::content::{ContentData, PostSource, load_content};
use crate::seo::tables::route_keys;

/// Content blob and origin a command resolves against.
pub struct Source {
    pub content: Option<ContentData>,
    pub base_url: String,
}

impl Source {
    /// Load `--content` (if given) and pick the origin.
    pub fn load(args: &SourceArgs, config: &SeoConfig) -> Result<Self> {
        let content = args.content.as_deref().map(load_content).transpose()?;
        let base_url = args
            .base_url
            .clone()
            .unwrap_or_else(|| config.site.url.clone());
        Ok(Self { content, base_url })
    }
}

/// Routes to check: the given paths (`-` reads them from stdin), or every
/// known route when none are given.
pub fn collect_routes(
    paths: &[String],
    content: Option<&ContentData>,
    posts: &dyn PostSource,
) -> Result<Vec<String>> {
    let paths = if paths.len() == 1 && paths[0] == "-" {
        read_routes_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        return Ok(known_routes(content, posts));
    }
    Ok(paths)
}

/// Route table keys, blog articles, then CMS products; duplicates dropped.
pub fn known_routes(content: Option<&ContentData>, posts: &dyn PostSource) -> Vec<String> {
    let mut routes: Vec<String> = route_keys().into_iter().map(str::to_string).collect();

    let post_slugs = posts
        .all()
        .iter()
        .chain(content.and_then(|c| c.blog_post.as_ref()))
        .filter_map(|post| post.slug.as_deref());
    routes.extend(post_slugs.map(|slug| format!("/blog/{slug}")));

    if let Some(content) = content {
        routes.extend(content.product_slugs().into_iter().map(|slug| format!("/{slug}")));
    }

    let mut seen = FxHashSet::default();
    routes.retain(|route| seen.insert(route.clone()));
    routes
}

/// Read request paths from stdin, one per line
pub fn read_routes_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut routes = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            routes.push(trimmed.to_string());
        }
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostCatalog;
    use serde_json::json;

    #[test]
    fn test_known_routes_cover_every_source() {
        let content = ContentData::from(json!({
            "products": { "tokens-kit": { "title": "Tokens Kit" } },
            "blogPost": { "slug": "figma-variant-naming-conventions", "title": "Dup" },
        }));
        let routes = known_routes(Some(&content), PostCatalog::builtin());

        assert_eq!(routes[0], "/");
        assert!(routes.contains(&"/about".to_string()));
        assert!(routes.contains(&"/blog/mastering-design-system-guidelines".to_string()));
        assert!(routes.contains(&"/tokens-kit".to_string()));
        assert_eq!(
            routes
                .iter()
                .filter(|r| *r == "/blog/figma-variant-naming-conventions")
                .count(),
            1
        );
    }

    #[test]
    fn test_explicit_paths_kept() {
        let paths = vec!["/about".to_string(), "/blog/x".to_string()];
        let routes = collect_routes(&paths, None, PostCatalog::builtin()).unwrap();
        assert_eq!(routes, paths);
    }

    #[test]
    fn test_source_defaults_to_site_url() {
        let args = SourceArgs {
            content: None,
            base_url: None,
        };
        let source = Source::load(&args, &SeoConfig::default()).unwrap();
        assert_eq!(source.base_url, "https://bibliokit.com");
        assert!(source.content.is_none());
    }
}
