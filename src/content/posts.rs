//! Blog post catalog.

use super::{BlogPost, FaqEntry};
use std::sync::LazyLock;

/// Read-only lookup over known blog posts.
pub trait PostSource: Send + Sync {
    fn find_by_slug(&self, slug: &str) -> Option<&BlogPost>;

    /// Every post, in publication order (newest first).
    fn all(&self) -> &[BlogPost];
}

/// A fixed list of posts.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<BlogPost>,
}

impl PostCatalog {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    /// Posts shipped with the site.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }
}

impl PostSource for PostCatalog {
    fn find_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts
            .iter()
            .find(|post| post.slug.as_deref() == Some(slug))
    }

    fn all(&self) -> &[BlogPost] {
        &self.posts
    }
}

static BUILTIN: LazyLock<PostCatalog> = LazyLock::new(|| {
    PostCatalog::new(vec![
        BlogPost {
            slug: Some("mastering-design-system-guidelines".into()),
            title: "Mastering Design System Guidelines: How to Document, Govern, and Scale Your Figma Library".into(),
            excerpt: Some(
                "A practical playbook for writing design system guidelines that teams actually follow, \
                 from naming conventions to contribution workflows and release notes."
                    .into(),
            ),
            hero_image: Some("/blog/mastering-design-system-guidelines/hero.png".into()),
            hero_image_alt: Some("Annotated Figma library with guideline callouts".into()),
            category: Some("Design Systems".into()),
            faqs: faqs(&[
                (
                    "What belongs in design system guidelines?",
                    "Usage rules, naming conventions, accessibility requirements and a clear contribution process.",
                ),
                (
                    "How often should guidelines be updated?",
                    "Review them with every library release and log changes in a changelog page.",
                ),
            ]),
            published_at: Some("2024-09-12T09:00:00Z".into()),
            updated_at: Some("2024-11-02".into()),
            ..Default::default()
        },
        BlogPost {
            slug: Some("figma-variant-naming-conventions".into()),
            title: "Figma Variant Naming Conventions That Scale".into(),
            excerpt: Some("Consistent property names keep variant pickers usable as libraries grow.".into()),
            meta_title: Some("Figma Variant Naming Conventions | BiblioKit".into()),
            meta_description: Some(
                "Learn naming patterns for Figma component variants and properties, and how to \
                 rename hundreds of variants at once without breaking instances."
                    .into(),
            ),
            hero_image: Some("/blog/figma-variant-naming-conventions/hero.png".into()),
            category: Some("Figma".into()),
            published_at: Some("2024-07-03".into()),
            ..Default::default()
        },
        BlogPost {
            slug: Some("auditing-styles-before-a-rebrand".into()),
            title: "Auditing Styles Before a Rebrand".into(),
            excerpt: Some("Find detached styles and one-off colors before they multiply.".into()),
            category: Some("Design Systems".into()),
            published_at: Some("2024-05-20T14:30:00+02:00".into()),
            updated_at: Some("last spring".into()),
            ..Default::default()
        },
    ])
});

fn faqs(pairs: &[(&str, &str)]) -> Vec<FaqEntry> {
    pairs
        .iter()
        .filter_map(|(q, a)| FaqEntry::new(q, a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;
    use crate::utils::text::utf16_len;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_builtin_lookup() {
        let catalog = PostCatalog::builtin();
        let post = catalog.find_by_slug("mastering-design-system-guidelines").unwrap();
        assert!(utf16_len(&post.title) > 60);
        assert!(catalog.find_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_builtin_slugs_unique() {
        let catalog = PostCatalog::builtin();
        let slugs: FxHashSet<_> = catalog.all().iter().filter_map(|p| p.slug.as_deref()).collect();
        assert_eq!(slugs.len(), catalog.all().len());
    }

    #[test]
    fn test_builtin_publish_dates_parse() {
        for post in PostCatalog::builtin().all() {
            let published = post.published_at.as_deref().unwrap();
            assert!(DateTimeUtc::parse(published).is_some(), "{published}");
        }
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = PostCatalog::new(vec![BlogPost {
            slug: Some("x".into()),
            title: "X".into(),
            ..Default::default()
        }]);
        assert_eq!(catalog.find_by_slug("x").unwrap().title, "X");
        assert_eq!(catalog.all().len(), 1);
    }
}
