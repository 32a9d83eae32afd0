//! JSON endpoints for the estimator.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;

use super::catalog::Catalog;
use super::requests::EstimateInput;
use super::responses::{EstimateResponse, PricingErrorResponse};
use super::services::{self, PricingError};

/// Pricing API routes, open to cross-origin callers
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/pricing/estimate", post(estimate))
        .route("/api/pricing/catalog", get(catalog))
        .layer(cors)
}

/// Calculate an estimate from JSON input
async fn estimate(
    State(state): State<AppState>,
    body: Result<Json<EstimateInput>, JsonRejection>,
) -> Result<Json<EstimateResponse>, PricingError> {
    let Json(input) = body?;
    let estimate = services::estimate(&state.catalog, &input)?;
    Ok(Json(EstimateResponse::from(&estimate)))
}

/// The tiers and activities currently offered
async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json((*state.catalog).clone())
}

impl From<JsonRejection> for PricingError {
    fn from(rejection: JsonRejection) -> Self {
        PricingError::InvalidInput {
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let status = match self {
            // Startup validation should make this unreachable
            PricingError::EmptyCatalog => {
                tracing::error!("Pricing request against an empty catalog");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => {
                tracing::warn!(error_type = self.error_type(), "Pricing request rejected: {}", self);
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        let body = PricingErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}
