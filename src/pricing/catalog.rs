//! Package tiers and optional activities offered by the estimator.
//!
//! The built-in catalog mirrors the rates printed on the estimator page. A
//! JSON file with the same shape can replace it at startup (see
//! `PRICING_CATALOG`), e.g.:
//!
//! ```json
//! {
//!   "tiers": [
//!     { "id": "premium", "name": "Premium", "hotel_per_night": 120,
//!       "vehicle_per_day": 85, "guide_per_day": 40 }
//!   ],
//!   "activities": [
//!     { "id": "rafting", "name": "Trishuli rafting", "price_per_person": "65" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::models::{Activity, PackageTier};

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Tiers and activities available to the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub tiers: Vec<PackageTier>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Catalog {
    /// The catalog shipped with the site
    pub fn builtin() -> Self {
        Self {
            tiers: vec![
                tier("premium", "Premium", dec!(120), dec!(85), dec!(40)),
                tier("luxury", "Luxury", dec!(280), dec!(140), dec!(60)),
            ],
            activities: vec![
                activity("everest-flight", "Everest mountain flight", dec!(230)),
                activity("chitwan-safari", "Chitwan jungle safari", dec!(150)),
                activity("pokhara-paragliding", "Pokhara paragliding", dec!(95)),
                activity("trishuli-rafting", "Trishuli white-water rafting", dec!(65)),
                activity("newari-cooking", "Newari cooking class", dec!(45)),
            ],
        }
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Check the invariants the calculator relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.tiers.is_empty() {
            return Err(CatalogError::Invalid("at least one tier is required".to_string()));
        }

        let mut seen = HashSet::new();
        for tier in &self.tiers {
            if !seen.insert(tier.id.to_ascii_lowercase()) {
                return Err(CatalogError::Invalid(format!("duplicate tier id '{}'", tier.id)));
            }
            let rates = [tier.hotel_per_night, tier.vehicle_per_day, tier.guide_per_day];
            if rates.iter().any(|r| *r < Decimal::ZERO) {
                return Err(CatalogError::Invalid(format!(
                    "tier '{}' has a negative rate",
                    tier.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for activity in &self.activities {
            if !seen.insert(activity.id.to_ascii_lowercase()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate activity id '{}'",
                    activity.id
                )));
            }
            if activity.price_per_person < Decimal::ZERO {
                return Err(CatalogError::Invalid(format!(
                    "activity '{}' has a negative price",
                    activity.id
                )));
            }
        }

        Ok(())
    }

    /// Look up a tier by id (ASCII case-insensitive)
    pub fn tier(&self, id: &str) -> Option<&PackageTier> {
        let id = id.trim();
        self.tiers.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Look up an activity by id (ASCII case-insensitive)
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        let id = id.trim();
        self.activities.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// The tier preselected on the estimator form
    pub fn default_tier(&self) -> Option<&PackageTier> {
        self.tiers.first()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tier(id: &str, name: &str, hotel: Decimal, vehicle: Decimal, guide: Decimal) -> PackageTier {
    PackageTier {
        id: id.to_string(),
        name: name.to_string(),
        hotel_per_night: hotel,
        vehicle_per_day: vehicle,
        guide_per_day: guide,
    }
}

fn activity(id: &str, name: &str, price: Decimal) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        price_per_person: price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "tiers": [
            { "id": "premium", "name": "Premium", "hotel_per_night": 100,
              "vehicle_per_day": "50", "guide_per_day": 30 }
        ],
        "activities": [
            { "id": "rafting", "name": "Rafting", "price_per_person": 40 },
            { "id": "safari", "name": "Safari", "price_per_person": "60.50" }
        ]
    }"#;

    // ==================== builtin tests ====================

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.default_tier().unwrap().id, "premium");
        assert!(catalog.tier("luxury").is_some());
    }

    // ==================== parsing tests ====================

    #[test]
    fn test_from_json_accepts_numbers_and_strings() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let premium = catalog.tier("premium").unwrap();
        assert_eq!(premium.hotel_per_night, dec!(100));
        assert_eq!(premium.vehicle_per_day, dec!(50));
        assert_eq!(catalog.activity("safari").unwrap().price_per_person, dec!(60.50));
    }

    #[test]
    fn test_activities_default_to_empty() {
        let json = r#"{ "tiers": [ { "id": "basic", "name": "Basic",
            "hotel_per_night": 1, "vehicle_per_day": 1, "guide_per_day": 1 } ] }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(catalog.activities.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    // ==================== validation tests ====================

    #[test]
    fn test_empty_tiers_rejected() {
        let err = Catalog::from_json_str(r#"{ "tiers": [] }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_tier_ids_rejected() {
        let mut catalog = Catalog::builtin();
        let mut copy = catalog.tiers[0].clone();
        copy.id = "PREMIUM".to_string();
        catalog.tiers.push(copy);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate tier id"));
    }

    #[test]
    fn test_negative_rates_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.tiers[1].guide_per_day = dec!(-1);
        assert!(catalog.validate().unwrap_err().to_string().contains("negative rate"));

        let mut catalog = Catalog::builtin();
        catalog.activities[0].price_per_person = dec!(-5);
        assert!(catalog.validate().unwrap_err().to_string().contains("negative price"));
    }

    // ==================== lookup tests ====================

    #[test]
    fn test_lookups_ignore_case_and_whitespace() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tier(" LUXURY ").unwrap().id, "luxury");
        assert_eq!(
            catalog.activity("Chitwan-Safari").unwrap().id,
            "chitwan-safari"
        );
        assert!(catalog.tier("budget").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.tiers.len(), 1);
        assert_eq!(catalog.activities.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
