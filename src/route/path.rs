//! Request path classification.
//!
//! - Internal representation: always decoded, leading `/`, no trailing `/`
//! - Browser boundary: decode on input, encode when building canonical URLs

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Bytes escaped inside a canonical path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Blog index route; article routes fall back to it.
pub const BLOG_INDEX: &str = "/blog";

/// Deprecated product path and its permanent replacement.
pub const LEGACY_ALIAS: (&str, &str) = ("/ai-rename-variants", "/figma-component-variant-renamer");

/// A classified request path.
///
/// | raw                     | path           | key     | blog article |
/// |-------------------------|----------------|---------|--------------|
/// | `/about/?ref=x`         | `/about`       | `/about`| no           |
/// | `/blog/`                | `/blog`        | `/blog` | no           |
/// | `/blog/my-post#faq`     | `/blog/my-post`| `/blog` | yes          |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Normalized, decoded path.
    pub path: String,
    /// Key used for route table lookups.
    pub key: String,
    /// Path the canonical URL points at.
    pub canonical_path: String,
    pub is_blog_article: bool,
    pub is_legacy_alias: bool,
}

impl Route {
    /// Classify a raw request path. Never fails: anything unrecognized is
    /// a static route keyed by its own path.
    pub fn parse(raw: &str) -> Self {
        let path = normalize_path(raw);

        let is_blog_article = path.starts_with("/blog/");
        let key = if is_blog_article {
            BLOG_INDEX.to_string()
        } else {
            path.clone()
        };

        let is_legacy_alias = path == LEGACY_ALIAS.0;
        let canonical_path = if is_legacy_alias {
            LEGACY_ALIAS.1.to_string()
        } else {
            path.clone()
        };

        Self {
            path,
            key,
            canonical_path,
            is_blog_article,
            is_legacy_alias,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Slug after `/blog/` for article routes.
    pub fn blog_slug(&self) -> Option<&str> {
        if !self.is_blog_article {
            return None;
        }
        self.path.strip_prefix("/blog/").filter(|s| !s.is_empty())
    }

    /// Path segments, without empty parts.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    #[inline]
    pub fn first_segment(&self) -> Option<&str> {
        self.segments().next()
    }

    /// Absolute canonical URL; the root maps to the bare origin.
    pub fn canonical_url(&self, origin: &str) -> String {
        join_url(origin, &self.canonical_path)
    }
}

/// Join an origin and a decoded path, percent-encoding each segment.
///
/// `/` yields the bare origin so canonical URLs never end with a slash.
pub fn join_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let encoded: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect();

    if encoded.is_empty() {
        origin.to_string()
    } else {
        format!("{origin}/{}", encoded.join("/"))
    }
}

/// Strip query and fragment, percent-decode, and collapse slashes.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);

    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let segments: Vec<&str> = decoded.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalize {
        use super::*;

        #[test]
        fn test_root_forms() {
            for raw in ["", "/", "//", "/?utm=1", "#top", "  /  "] {
                assert_eq!(normalize_path(raw), "/", "raw: {raw:?}");
            }
        }

        #[test]
        fn test_trailing_slash_and_query() {
            assert_eq!(normalize_path("/about/"), "/about");
            assert_eq!(normalize_path("/about?ref=nav"), "/about");
            assert_eq!(normalize_path("/blog/post/#faq"), "/blog/post");
            assert_eq!(normalize_path("about"), "/about");
            assert_eq!(normalize_path("/a//b/"), "/a/b");
        }

        #[test]
        fn test_percent_decoding() {
            assert_eq!(normalize_path("/blog/caf%C3%A9"), "/blog/café");
            // invalid UTF-8 stays encoded
            assert_eq!(normalize_path("/x%FF"), "/x%FF");
        }
    }

    mod classify {
        use super::*;

        #[test]
        fn test_blog_article() {
            let route = Route::parse("/blog/my-post/?x=1");
            assert!(route.is_blog_article);
            assert_eq!(route.key, "/blog");
            assert_eq!(route.blog_slug(), Some("my-post"));
            assert_eq!(route.canonical_path, "/blog/my-post");
        }

        #[test]
        fn test_blog_index_is_not_article() {
            for raw in ["/blog", "/blog/", "/blog?page=2"] {
                let route = Route::parse(raw);
                assert!(!route.is_blog_article);
                assert_eq!(route.key, "/blog");
                assert_eq!(route.blog_slug(), None);
            }
        }

        #[test]
        fn test_blog_prefix_requires_segment_boundary() {
            let route = Route::parse("/blogging-tips");
            assert!(!route.is_blog_article);
            assert_eq!(route.key, "/blogging-tips");
        }

        #[test]
        fn test_legacy_alias() {
            let route = Route::parse("/ai-rename-variants/");
            assert!(route.is_legacy_alias);
            assert_eq!(route.key, "/ai-rename-variants");
            assert_eq!(route.canonical_path, "/figma-component-variant-renamer");
        }

        #[test]
        fn test_segments() {
            let route = Route::parse("/pricing/team");
            assert_eq!(route.segments().collect::<Vec<_>>(), ["pricing", "team"]);
            assert_eq!(route.first_segment(), Some("pricing"));
            assert_eq!(Route::parse("/").first_segment(), None);
            assert!(Route::parse("/").is_root());
        }
    }

    mod canonical {
        use super::*;

        #[test]
        fn test_root_is_bare_origin() {
            assert_eq!(
                Route::parse("/").canonical_url("https://bibliokit.com"),
                "https://bibliokit.com"
            );
            assert_eq!(
                Route::parse("/").canonical_url("https://bibliokit.com/"),
                "https://bibliokit.com"
            );
        }

        #[test]
        fn test_encodes_segments() {
            assert_eq!(
                join_url("https://bibliokit.com", "/blog/café au lait"),
                "https://bibliokit.com/blog/caf%C3%A9%20au%20lait"
            );
            assert_eq!(
                join_url("https://bibliokit.com", "/figma-component-variant-renamer"),
                "https://bibliokit.com/figma-component-variant-renamer"
            );
        }
    }
}
