//! Trip cost estimator.
//!
//! Turns a package tier, trip length, group size, airfare and optional
//! activities into a ground/airfare/grand total breakdown. The HTML
//! estimator page and the JSON API both go through [`services::estimate`].

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_estimate, format_usd, rooms_for, round_money};
pub use catalog::{Catalog, CatalogError};
pub use models::{Activity, Estimate, EstimateRequest, EstimateResult, PackageTier};
pub use requests::{parse_amount, EstimateInput};
pub use routes::router;
pub use services::PricingError;
