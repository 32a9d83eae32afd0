//! In-memory caching using moka
//!
//! Holds rendered HTML for pages that do not depend on user input. The TTL
//! keeps the footer year and any catalog reload from going stale.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Rendered page cache (cache key -> HTML)
#[derive(Clone)]
pub struct PageCache {
    pages: Cache<String, Arc<String>>,
}

impl PageCache {
    /// Key for the packages page
    pub const PACKAGES_KEY: &'static str = "packages";

    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            // One home entry per testimonial slide plus the packages page
            pages: Cache::builder()
                .max_capacity(32)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Key for the homepage rendered at a given testimonial slide
    pub fn home_key(slide: usize) -> String {
        format!("home:{}", slide)
    }

    pub async fn get(&self, key: &str) -> Option<Arc<String>> {
        let hit = self.pages.get(key).await;
        if hit.is_some() {
            tracing::debug!("Cache HIT for page: {}", key);
        } else {
            tracing::debug!("Cache MISS for page: {}", key);
        }
        hit
    }

    pub async fn insert(&self, key: impl Into<String>, html: String) -> Arc<String> {
        let html = Arc::new(html);
        self.pages.insert(key.into(), Arc::clone(&html)).await;
        html
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached_pages: self.pages.entry_count(),
        }
    }

    /// Invalidate all cached pages
    pub fn invalidate_all(&self) {
        self.pages.invalidate_all();
        info!("Page cache invalidated");
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(10 * 60))
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub cached_pages: u64,
}
