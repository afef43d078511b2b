//! Published site content: the CMS blob and the blog post catalog.
//!
//! The blob is untyped JSON owned by the host. [`ContentData`] decodes it
//! through the type guards in `guard`, so missing or mistyped fields fall
//! back to `None` rather than failing the page.

mod guard;
mod model;
mod posts;

pub use model::{BlogPost, Contact, ContentData, FaqEntry, Hero, Product};
pub use posts::{PostCatalog, PostSource};

use anyhow::{Context, Result};
use std::path::Path;

/// Read a CMS blob from a JSON file.
///
/// Only invalid JSON is an error; shape problems are absorbed by the
/// lenient decoder.
pub fn load_content(path: &Path) -> Result<ContentData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file `{}`", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("`{}` is not valid JSON", path.display()))?;
    Ok(ContentData::from(value))
}
