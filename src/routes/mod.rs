//! HTTP routing for the site.

pub mod health;
pub mod pages;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{pricing, AppState};

/// Build the full application router.
///
/// `.html` aliases keep links from the old static site working.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/index.html", get(pages::home))
        .route("/packages", get(pages::packages))
        .route("/packages.html", get(pages::packages))
        .route("/estimator", get(pages::estimator))
        .route("/estimator.html", get(pages::estimator))
        .route("/healthz", get(health::health))
        .merge(pricing::router())
        .nest_service("/assets", ServeDir::new(static_dir.as_ref()))
        .fallback(pages::fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
