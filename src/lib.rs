// src/lib.rs
// Public library surface for integration tests and the binary.

pub mod api;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod extract;
pub mod feed;
pub mod metrics;
pub mod render;
pub mod summary;

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::feed::source::HttpFeedSource;

// Convenient access to the router: `crate_root::api::router` or `crate_root::router`
pub use crate::api::router;
pub use crate::feed::types::{FeedDocument, FeedSource};

/// Dashboard wired to the live HTTP feed and the configured cache file.
pub fn dashboard_from_config(cfg: &DashboardConfig) -> Dashboard {
    let source = Arc::new(HttpFeedSource::new(cfg.feed_url.clone()));
    Dashboard::new(CacheStore::new(cfg.cache_path.clone()), source)
}

/// Full in-process app without the metrics route.
pub fn app(cfg: &DashboardConfig) -> axum::Router {
    router(dashboard_from_config(cfg))
}
