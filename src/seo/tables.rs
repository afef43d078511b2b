//! Static per-route data: metadata overrides, FAQ sets and the plugin map.
//!
//! Built once on first use and never mutated.

use super::MetaPatch;
use crate::content::FaqEntry;
use rustc_hash::FxHashMap;
use serde_json::{Value, json};
use std::sync::LazyLock;

/// Route table entry: a metadata patch plus seed graph nodes.
///
/// Seed `@id`s written as fragments (`#howto`) are anchored to the page's
/// canonical URL when the graph is built.
#[derive(Debug, Clone, Default)]
pub struct RouteEntry {
    pub patch: MetaPatch,
    pub seeds: Vec<Value>,
}

impl RouteEntry {
    fn new(patch: MetaPatch) -> Self {
        Self {
            patch,
            seeds: Vec::new(),
        }
    }

    fn seed(mut self, node: Value) -> Self {
        self.seeds.push(node);
        self
    }
}

/// A Figma plugin rendered as a `SoftwareApplication`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginApp {
    pub name: &'static str,
    pub description: &'static str,
    /// Root-relative image path.
    pub image: &'static str,
    pub category: &'static str,
}

pub const VARIANT_RENAMER: &str = "/figma-component-variant-renamer";
pub const STYLE_AUDIT: &str = "/figma-style-audit";

static ROUTES: LazyLock<FxHashMap<&'static str, RouteEntry>> = LazyLock::new(|| {
    let mut routes = FxHashMap::default();

    routes.insert(
        "/",
        RouteEntry::new(
            MetaPatch::copy(
                "BiblioKit | Figma Plugins for Design Systems",
                "Figma plugins that keep design systems consistent: rename component variants, \
                 audit styles and document libraries without the busywork.",
            )
            .with_page_type("CollectionPage"),
        ),
    );
    routes.insert(
        "/about",
        RouteEntry::new(
            MetaPatch::copy(
                "About BiblioKit | Tools for Design System Teams",
                "BiblioKit is a small studio building Figma plugins for teams that maintain \
                 shared component libraries.",
            )
            .with_page_type("AboutPage"),
        ),
    );
    routes.insert(
        "/blog",
        RouteEntry::new(
            MetaPatch::copy(
                "BiblioKit Blog | Design System Guides and Figma Tips",
                "Guides on naming, governance and scaling Figma component libraries from the \
                 BiblioKit team.",
            )
            .with_keywords("design systems blog, Figma tips, component libraries")
            .with_page_type("CollectionPage"),
        ),
    );
    routes.insert(
        "/contact",
        RouteEntry::new(
            MetaPatch::copy(
                "Contact BiblioKit",
                "Questions about a plugin, licensing or a custom workflow? Get in touch with \
                 the BiblioKit team.",
            )
            .with_page_type("ContactPage"),
        ),
    );
    routes.insert(
        "/privacy",
        RouteEntry::new(MetaPatch::copy(
            "Privacy Policy | BiblioKit",
            "How BiblioKit plugins and this website collect, use and protect your data.",
        )),
    );
    routes.insert(
        "/terms",
        RouteEntry::new(MetaPatch::copy(
            "Terms of Service | BiblioKit",
            "The terms that apply to BiblioKit plugins, subscriptions and this website.",
        )),
    );
    routes.insert(
        "/admin",
        RouteEntry::new(
            MetaPatch::copy("Admin | BiblioKit", "BiblioKit content administration.")
                .with_robots("noindex, nofollow"),
        ),
    );
    routes.insert(
        VARIANT_RENAMER,
        RouteEntry::new(
            MetaPatch::copy(
                "RenameVariantsAI | Figma Component Variant Renamer",
                "Rename hundreds of Figma component variants in seconds. RenameVariantsAI \
                 suggests consistent property names and applies them across your library.",
            )
            .with_keywords("Figma variant renamer, rename variants, Figma plugin, RenameVariantsAI")
            .with_og_image("/og/rename-variants-ai.png"),
        )
        .seed(json!({
            "@type": "HowTo",
            "@id": "#howto",
            "name": "How to rename Figma component variants with RenameVariantsAI",
            "totalTime": "PT2M",
            "step": [
                {
                    "@type": "HowToStep",
                    "position": 1,
                    "name": "Select a component set",
                    "text": "Select one or more component sets in your Figma file."
                },
                {
                    "@type": "HowToStep",
                    "position": 2,
                    "name": "Review suggested names",
                    "text": "Open RenameVariantsAI and review the proposed property names."
                },
                {
                    "@type": "HowToStep",
                    "position": 3,
                    "name": "Apply",
                    "text": "Apply the changes; existing instances keep their overrides."
                }
            ]
        })),
    );
    routes.insert(
        "/ai-rename-variants",
        RouteEntry::new(
            MetaPatch::copy(
                "AI Rename Variants for Figma | BiblioKit",
                "Let AI clean up messy Figma variant names. Now part of RenameVariantsAI, the \
                 BiblioKit component variant renamer.",
            )
            .with_og_image("/og/rename-variants-ai.png"),
        ),
    );
    routes.insert(
        STYLE_AUDIT,
        RouteEntry::new(
            MetaPatch::copy(
                "StyleAuditAI | Find Detached Styles in Figma",
                "Scan Figma files for detached colors, text styles and effects, then relink \
                 them to your library in one pass.",
            )
            .with_keywords("Figma style audit, detached styles, Figma plugin")
            .with_og_image("/og/style-audit-ai.png"),
        ),
    );

    routes
});

static PLUGINS: LazyLock<FxHashMap<&'static str, PluginApp>> = LazyLock::new(|| {
    let mut plugins = FxHashMap::default();
    plugins.insert(
        VARIANT_RENAMER,
        PluginApp {
            name: "RenameVariantsAI",
            description: "Figma plugin that renames component variants and properties in bulk.",
            image: "/og/rename-variants-ai.png",
            category: "DesignApplication",
        },
    );
    plugins.insert(
        STYLE_AUDIT,
        PluginApp {
            name: "StyleAuditAI",
            description: "Figma plugin that finds detached styles and relinks them to a library.",
            image: "/og/style-audit-ai.png",
            category: "DesignApplication",
        },
    );
    plugins
});

static ROUTE_FAQS: LazyLock<FxHashMap<&'static str, Vec<FaqEntry>>> = LazyLock::new(|| {
    let mut faqs = FxHashMap::default();
    faqs.insert(
        VARIANT_RENAMER,
        entries(&[
            (
                "Does RenameVariantsAI break existing instances?",
                "No. Instances keep their overrides because only property names and values change.",
            ),
            (
                "Can I preview names before applying them?",
                "Yes. Every suggestion is shown in a review list and nothing changes until you apply.",
            ),
            (
                "Does it work with nested component sets?",
                "Yes. Nested sets are renamed in the same pass.",
            ),
        ]),
    );
    faqs.insert(
        STYLE_AUDIT,
        entries(&[
            (
                "What does StyleAuditAI check?",
                "Fills, strokes, text and effects that are not linked to a library style.",
            ),
            (
                "Can it fix issues automatically?",
                "It suggests the closest library style and relinks in bulk after you confirm.",
            ),
        ]),
    );
    faqs
});

static DEFAULT_FAQS: LazyLock<Vec<FaqEntry>> = LazyLock::new(|| {
    entries(&[
        (
            "Is there a free trial?",
            "Every BiblioKit plugin can be tried for free inside Figma before you subscribe.",
        ),
        (
            "Do plugins work on team and organization plans?",
            "Yes. Plugins run on every Figma plan, and team licenses cover all editors.",
        ),
        (
            "How do I get support?",
            "Use the contact form or email the team; we usually reply within one business day.",
        ),
    ])
});

fn entries(pairs: &[(&str, &str)]) -> Vec<FaqEntry> {
    pairs
        .iter()
        .filter_map(|(q, a)| FaqEntry::new(q, a))
        .collect()
}

/// Exact-match route table lookup.
pub fn route_entry(key: &str) -> Option<&'static RouteEntry> {
    ROUTES.get(key)
}

/// Whether `key` has a static route entry.
pub fn is_static_route(key: &str) -> bool {
    ROUTES.contains_key(key)
}

/// Every route key in the table, sorted.
pub fn route_keys() -> Vec<&'static str> {
    let mut keys: Vec<_> = ROUTES.keys().copied().collect();
    keys.sort_unstable();
    keys
}

pub fn route_faqs(path: &str) -> Option<&'static [FaqEntry]> {
    ROUTE_FAQS.get(path).map(Vec::as_slice)
}

/// Plugin rendered for a canonical path, if any.
pub fn plugin(path: &str) -> Option<&'static PluginApp> {
    PLUGINS.get(path)
}

/// FAQ set used for products that ship none of their own.
pub fn default_faqs() -> &'static [FaqEntry] {
    &DEFAULT_FAQS
}
