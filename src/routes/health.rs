//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cached_pages: u64,
    pub tiers: usize,
    pub activities: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cached_pages: state.cache.stats().cached_pages,
        tiers: state.catalog.tiers.len(),
        activities: state.catalog.activities.len(),
    })
}
