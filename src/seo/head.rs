//! Client-side head sync.
//!
//! The live document sits behind [`HeadDocument`]; [`apply_metadata`]
//! drives it so that applying the same metadata twice leaves the head
//! unchanged. Only scripts carrying [`ENGINE_MARKER`] are replaced.

use super::SeoMetadata;
use super::render::{ENGINE_MARKER, META_FIELDS, MetaAttr, json_ld_payloads};
use crate::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeadError {
    #[error("document head is unavailable")]
    Unavailable,
    #[error("cannot write `{0}`: {1}")]
    Write(String, String),
}

/// Mutable view of a document `<head>`.
pub trait HeadDocument {
    fn set_title(&mut self, title: &str) -> Result<(), HeadError>;

    /// Insert or update `<meta {attr}="{key}" content="{content}">`.
    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) -> Result<(), HeadError>;

    fn remove_meta(&mut self, attr: MetaAttr, key: &str) -> Result<(), HeadError>;

    /// Insert or update `<link rel="canonical">`.
    fn upsert_canonical(&mut self, href: &str) -> Result<(), HeadError>;

    fn remove_canonical(&mut self) -> Result<(), HeadError>;

    /// Remove JSON-LD scripts carrying the engine marker; returns how many.
    fn remove_engine_scripts(&mut self) -> Result<usize, HeadError>;

    /// Append a marker-tagged JSON-LD script with `body`.
    fn append_script(&mut self, body: &str) -> Result<(), HeadError>;
}

/// Sync `head` to `meta`. `None` is a no-op.
///
/// Failures are logged and swallowed; a page never breaks over its head.
pub fn apply_metadata<D: HeadDocument + ?Sized>(head: Option<&mut D>, meta: &SeoMetadata) {
    let Some(head) = head else {
        return;
    };
    if let Err(e) = sync(head, meta) {
        debug!("head"; "update failed: {}", e);
    }
}

fn sync<D: HeadDocument + ?Sized>(head: &mut D, meta: &SeoMetadata) -> Result<(), HeadError> {
    head.set_title(&meta.title)?;

    for &(attr, key, get) in META_FIELDS {
        match get(meta).filter(|content| !content.trim().is_empty()) {
            Some(content) => head.upsert_meta(attr, key, &content)?,
            None => head.remove_meta(attr, key)?,
        }
    }

    match meta.canonical.as_deref().filter(|href| !href.trim().is_empty()) {
        Some(canonical) => head.upsert_canonical(canonical)?,
        None => head.remove_canonical()?,
    }

    let removed = head.remove_engine_scripts()?;
    match json_ld_payloads(meta) {
        Ok(payloads) => {
            for body in &payloads {
                head.append_script(body)?;
            }
            debug!("head"; "replaced {} {} script(s) with {}", removed, ENGINE_MARKER, payloads.len());
        }
        Err(e) => debug!("head"; "structured data skipped: {}", e),
    }
    Ok(())
}

// ============================================================================
// In-memory head
// ============================================================================

/// A `<script type="application/ld+json">` in a [`MemoryHead`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadScript {
    pub engine: bool,
    pub body: String,
}

/// In-memory [`HeadDocument`] for hosts without a browser document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    pub title: Option<String>,
    pub metas: Vec<(MetaAttr, String, String)>,
    pub canonical: Option<String>,
    pub scripts: Vec<HeadScript>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the meta element keyed by `key`, whatever its attribute.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|(_, k, _)| k == key)
            .map(|(_, _, content)| content.as_str())
    }

    pub fn engine_scripts(&self) -> impl Iterator<Item = &str> {
        self.scripts
            .iter()
            .filter(|s| s.engine)
            .map(|s| s.body.as_str())
    }

    /// Add a script the engine does not own.
    pub fn push_foreign_script(&mut self, body: impl Into<String>) {
        self.scripts.push(HeadScript {
            engine: false,
            body: body.into(),
        });
    }
}

impl HeadDocument for MemoryHead {
    fn set_title(&mut self, title: &str) -> Result<(), HeadError> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) -> Result<(), HeadError> {
        match self.metas.iter_mut().find(|(a, k, _)| *a == attr && k == key) {
            Some(entry) => entry.2 = content.to_string(),
            None => self
                .metas
                .push((attr, key.to_string(), content.to_string())),
        }
        Ok(())
    }

    fn remove_meta(&mut self, attr: MetaAttr, key: &str) -> Result<(), HeadError> {
        self.metas.retain(|(a, k, _)| !(*a == attr && k == key));
        Ok(())
    }

    fn upsert_canonical(&mut self, href: &str) -> Result<(), HeadError> {
        self.canonical = Some(href.to_string());
        Ok(())
    }

    fn remove_canonical(&mut self) -> Result<(), HeadError> {
        self.canonical = None;
        Ok(())
    }

    fn remove_engine_scripts(&mut self) -> Result<usize, HeadError> {
        let before = self.scripts.len();
        self.scripts.retain(|s| !s.engine);
        Ok(before - self.scripts.len())
    }

    fn append_script(&mut self, body: &str) -> Result<(), HeadError> {
        self.scripts.push(HeadScript {
            engine: true,
            body: body.to_string(),
        });
        Ok(())
    }
}
