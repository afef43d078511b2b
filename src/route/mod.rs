//! Route resolution: raw request path → route key and canonical URL.

mod base;
mod path;

pub use base::normalize_base_url;
pub use path::{BLOG_INDEX, LEGACY_ALIAS, Route, join_url, normalize_path};
