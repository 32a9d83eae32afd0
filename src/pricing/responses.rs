//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::format_usd;
use super::models::{Estimate, EstimateRequest};
use super::services::PricingError;

/// All estimates are quoted in US dollars
pub const CURRENCY: &str = "USD";

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub formatted: String,
}

impl MoneyResponse {
    pub fn usd(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
            formatted: format_usd(amount),
        }
    }
}

/// Selected tier echoed back with its rates
#[derive(Debug, Serialize)]
pub struct TierResponse {
    pub id: String,
    pub name: String,
    pub hotel_per_night: MoneyResponse,
    pub vehicle_per_day: MoneyResponse,
    pub guide_per_day: MoneyResponse,
}

/// Selected activity echoed back with its price
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: String,
    pub name: String,
    pub price_per_person: MoneyResponse,
}

/// Response for an estimate calculation
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub tier: TierResponse,
    pub days: u32,
    pub travelers: u32,
    pub rooms: u32,
    pub airfare_per_person: MoneyResponse,
    pub activities: Vec<ActivityResponse>,
    pub hotel_total: MoneyResponse,
    pub vehicle_total: MoneyResponse,
    pub guide_total: MoneyResponse,
    pub activities_total: MoneyResponse,
    pub ground_total: MoneyResponse,
    pub airfare_total: MoneyResponse,
    pub grand_total: MoneyResponse,
}

impl From<&Estimate> for EstimateResponse {
    fn from(estimate: &Estimate) -> Self {
        let EstimateRequest {
            tier,
            days,
            travelers,
            airfare_per_person,
            activities,
        } = &estimate.request;
        let result = &estimate.result;

        Self {
            tier: TierResponse {
                id: tier.id.clone(),
                name: tier.name.clone(),
                hotel_per_night: MoneyResponse::usd(tier.hotel_per_night),
                vehicle_per_day: MoneyResponse::usd(tier.vehicle_per_day),
                guide_per_day: MoneyResponse::usd(tier.guide_per_day),
            },
            days: *days,
            travelers: *travelers,
            rooms: result.rooms,
            airfare_per_person: MoneyResponse::usd(*airfare_per_person),
            activities: activities
                .iter()
                .map(|a| ActivityResponse {
                    id: a.id.clone(),
                    name: a.name.clone(),
                    price_per_person: MoneyResponse::usd(a.price_per_person),
                })
                .collect(),
            hotel_total: MoneyResponse::usd(result.hotel_total),
            vehicle_total: MoneyResponse::usd(result.vehicle_total),
            guide_total: MoneyResponse::usd(result.guide_total),
            activities_total: MoneyResponse::usd(result.activities_total),
            ground_total: MoneyResponse::usd(result.ground_total),
            airfare_total: MoneyResponse::usd(result.airfare_total),
            grand_total: MoneyResponse::usd(result.grand_total),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        let details = match err {
            PricingError::UnknownTier { tier } => Some(serde_json::json!({ "tier": tier })),
            PricingError::UnknownActivity { activity } => {
                Some(serde_json::json!({ "activity": activity }))
            }
            PricingError::InvalidInput { reason } => Some(serde_json::json!({ "reason": reason })),
            PricingError::EmptyCatalog => None,
        };

        Self {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details,
        }
    }
}
