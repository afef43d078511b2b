//! Route shapes: which dynamic content layer applies to a route.

use super::tables;
use crate::route::Route;

/// Route shape, decided by the first matching rule in [`RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteShape<'a> {
    /// `/`; hero copy may override the defaults.
    Root,
    /// `/blog/{slug}`.
    BlogArticle { slug: Option<&'a str> },
    /// `/{slug}` not covered by the route table; may match a CMS product.
    Product { slug: &'a str },
    /// Everything else: route table and defaults only.
    Static,
}

type Rule = for<'a> fn(&'a Route) -> Option<RouteShape<'a>>;

/// Evaluated in order; the first `Some` wins.
const RULES: &[Rule] = &[root_rule, blog_rule, product_rule];

/// Paths under these first segments are never products.
const RESERVED: &[&str] = &["admin", "blog"];

impl<'a> RouteShape<'a> {
    pub fn classify(route: &'a Route) -> Self {
        RULES
            .iter()
            .find_map(|rule| rule(route))
            .unwrap_or(Self::Static)
    }
}

fn root_rule(route: &Route) -> Option<RouteShape<'_>> {
    route.is_root().then_some(RouteShape::Root)
}

fn blog_rule(route: &Route) -> Option<RouteShape<'_>> {
    route.is_blog_article.then(|| RouteShape::BlogArticle {
        slug: route.blog_slug(),
    })
}

fn product_rule(route: &Route) -> Option<RouteShape<'_>> {
    if tables::is_static_route(&route.key) {
        return None;
    }
    let slug = route.first_segment()?;
    (!RESERVED.contains(&slug)).then_some(RouteShape::Product { slug })
}
