//! Estimate service: resolves catalog entries and runs the calculator.

use super::calculators::calculate_estimate;
use super::catalog::Catalog;
use super::models::{Activity, Estimate, EstimateRequest};
use super::requests::EstimateInput;

/// Pricing errors for input the estimator cannot price
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown package tier '{tier}'")]
    UnknownTier { tier: String },

    #[error("Unknown activity '{activity}'")]
    UnknownActivity { activity: String },

    #[error("Invalid estimate request: {reason}")]
    InvalidInput { reason: String },

    #[error("The pricing catalog has no package tiers")]
    EmptyCatalog,
}

impl PricingError {
    /// Stable machine-readable identifier for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::UnknownTier { .. } => "unknown_tier",
            PricingError::UnknownActivity { .. } => "unknown_activity",
            PricingError::InvalidInput { .. } => "invalid_input",
            PricingError::EmptyCatalog => "empty_catalog",
        }
    }
}

/// Turn raw input into a normalized request.
///
/// A missing tier selects the catalog's first tier, as the estimator form
/// does by default. Numeric fields are clamped by [`EstimateRequest::new`].
pub fn build_request(catalog: &Catalog, input: &EstimateInput) -> Result<EstimateRequest, PricingError> {
    let tier = match input.tier.as_deref() {
        Some(id) => catalog.tier(id).ok_or_else(|| PricingError::UnknownTier {
            tier: id.to_string(),
        })?,
        None => catalog.default_tier().ok_or(PricingError::EmptyCatalog)?,
    };

    let activities = input
        .activities
        .iter()
        .map(|id| {
            catalog
                .activity(id)
                .cloned()
                .ok_or_else(|| PricingError::UnknownActivity {
                    activity: id.to_string(),
                })
        })
        .collect::<Result<Vec<Activity>, _>>()?;

    Ok(EstimateRequest::new(
        tier.clone(),
        input.days,
        input.travelers,
        input.airfare_per_person,
        activities,
    ))
}

/// Resolve and price an estimate in one step
pub fn estimate(catalog: &Catalog, input: &EstimateInput) -> Result<Estimate, PricingError> {
    let request = build_request(catalog, input)?;
    let result = calculate_estimate(&request);

    tracing::debug!(
        tier = %request.tier.id,
        days = request.days,
        travelers = request.travelers,
        grand_total = %result.grand_total,
        "Estimate calculated"
    );

    Ok(Estimate { request, result })
}
