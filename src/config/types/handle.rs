//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads, so concurrent resolutions
//! each see one consistent snapshot.

use crate::config::SeoConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SeoConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SeoConfig::default()));

/// Current config snapshot.
#[inline]
pub fn cfg() -> Arc<SeoConfig> {
    CONFIG.load_full()
}

/// Install `config` as the active configuration.
#[inline]
pub fn init_config(config: SeoConfig) -> Arc<SeoConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
