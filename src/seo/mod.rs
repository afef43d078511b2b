//! Page metadata and structured data.
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `metadata` | [`SeoMetadata`] record and [`MetaPatch`] overlays    |
//! | `og`       | Site-wide defaults, Twitter handle normalization     |
//! | `tables`   | Static route copy, FAQ sets, plugin allow-list       |
//! | `shape`    | Route-shape dispatch for content rules               |
//! | `resolve`  | Layering engine                                      |
//! | `schema`   | JSON-LD graph construction                           |
//! | `render`   | SSR head fragment                                    |
//! | `head`     | CSR head sync                                        |
//! | `audit`    | Invariant checks over resolved metadata              |

mod audit;
mod head;
mod metadata;
mod og;
mod render;
mod resolve;
mod shape;

pub mod schema;
pub mod tables;

pub use audit::{Violation, audit};
pub use head::{HeadDocument, HeadError, HeadScript, MemoryHead, apply_metadata};
pub use metadata::{MetaPatch, SeoMetadata};
pub use og::{OgDefaults, twitter_handle};
pub use render::{
    DEFAULT_CONTEXT, ENGINE_MARKER, EmitError, MetaAttr, MetaTag, json_ld_payloads, meta_tags,
    render_head, render_meta_tags, render_structured_data,
};
pub use resolve::{NOT_FOUND_DESCRIPTION, Resolver, resolve};
pub use shape::RouteShape;
