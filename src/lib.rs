//! SEO metadata and JSON-LD resolution for the BiblioKit marketing site.
//!
//! Given a request path, an optional CMS content blob and the request
//! origin, [`resolve`] produces a [`SeoMetadata`] record: title,
//! description, robots directives, Open Graph and Twitter fields, a
//! canonical URL, and a schema.org graph. The record is emitted either as
//! an HTML head fragment ([`render_head`]) or applied to a live document
//! head ([`apply_metadata`]).
//!
//! ```ignore
//! let content = bibliokit_seo::content::load_content(Path::new("content.json"))?;
//! let meta = bibliokit_seo::resolve("/blog/my-post", Some(&content), "https://bibliokit.com");
//! println!("{}", bibliokit_seo::render_head(&meta));
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod route;
pub mod seo;
pub mod utils;

pub use content::{ContentData, PostCatalog, PostSource};
pub use seo::{
    HeadDocument, MemoryHead, Resolver, SeoMetadata, apply_metadata, render_head,
    render_meta_tags, render_structured_data, resolve,
};
