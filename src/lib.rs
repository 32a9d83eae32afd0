//! Hamro Vacation web server.
//!
//! Serves the marketing pages (home, packages, cost estimator), the static
//! assets they use, and a small JSON pricing API backed by the same
//! estimator.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;
pub mod site;

use std::path::Path;
use std::sync::Arc;

use axum::Router;

use crate::cache::PageCache;
use crate::pricing::Catalog;
use crate::site::Site;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub site: Arc<Site>,
    pub cache: PageCache,
}

impl AppState {
    pub fn new(catalog: Catalog, site: Site, cache: PageCache) -> Self {
        Self {
            catalog: Arc::new(catalog),
            site: Arc::new(site),
            cache,
        }
    }
}

/// Build the application router serving assets from `static_dir`
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    routes::router(state, static_dir)
}
