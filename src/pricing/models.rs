//! Domain models for the trip cost estimator.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// A package tier with its daily ground rates (USD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTier {
    pub id: String,
    pub name: String,
    pub hotel_per_night: Decimal,
    pub vehicle_per_day: Decimal,
    pub guide_per_day: Decimal,
}

/// An optional activity, charged once per traveler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub price_per_person: Decimal,
}

/// A normalized estimate request.
///
/// Counts are always at least 1 and airfare is never negative; construct
/// through [`EstimateRequest::new`] to get those guarantees.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub tier: PackageTier,
    pub days: u32,
    pub travelers: u32,
    pub airfare_per_person: Decimal,
    pub activities: Vec<Activity>,
}

impl EstimateRequest {
    /// Build a request from already-coerced numeric input.
    ///
    /// `days` and `travelers` are truncated toward zero and clamped to a
    /// minimum of 1; `airfare_per_person` is clamped to a minimum of 0.
    /// Activities are de-duplicated by id, keeping the first occurrence.
    pub fn new(
        tier: PackageTier,
        days: Decimal,
        travelers: Decimal,
        airfare_per_person: Decimal,
        activities: Vec<Activity>,
    ) -> Self {
        let mut selected: Vec<Activity> = Vec::with_capacity(activities.len());
        for activity in activities {
            if !selected.iter().any(|a| a.id == activity.id) {
                selected.push(activity);
            }
        }

        Self {
            tier,
            days: clamp_count(days),
            travelers: clamp_count(travelers),
            airfare_per_person: airfare_per_person.max(Decimal::ZERO),
            activities: selected,
        }
    }

    /// Sum of the selected activity prices for one traveler
    pub fn activities_per_person(&self) -> Decimal {
        self.activities
            .iter()
            .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a.price_per_person))
    }
}

fn clamp_count(value: Decimal) -> u32 {
    let whole = value.trunc();
    if whole < Decimal::ONE {
        return 1;
    }
    whole.to_u32().unwrap_or(u32::MAX)
}

/// Derived price breakdown for an [`EstimateRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateResult {
    pub rooms: u32,
    pub hotel_total: Decimal,
    pub vehicle_total: Decimal,
    pub guide_total: Decimal,
    pub activities_total: Decimal,
    pub ground_total: Decimal,
    pub airfare_total: Decimal,
    pub grand_total: Decimal,
}

/// A request together with its computed breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub request: EstimateRequest,
    pub result: EstimateResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tier() -> PackageTier {
        PackageTier {
            id: "premium".to_string(),
            name: "Premium".to_string(),
            hotel_per_night: dec!(100),
            vehicle_per_day: dec!(50),
            guide_per_day: dec!(30),
        }
    }

    fn activity(id: &str, price: Decimal) -> Activity {
        Activity {
            id: id.to_string(),
            name: id.to_string(),
            price_per_person: price,
        }
    }

    #[test]
    fn test_zero_counts_clamp_to_one() {
        let request = EstimateRequest::new(tier(), dec!(0), dec!(0), dec!(0), vec![]);
        assert_eq!(request.days, 1);
        assert_eq!(request.travelers, 1);
    }

    #[test]
    fn test_negative_values_clamp() {
        let request = EstimateRequest::new(tier(), dec!(-4), dec!(-2), dec!(-150), vec![]);
        assert_eq!(request.days, 1);
        assert_eq!(request.travelers, 1);
        assert_eq!(request.airfare_per_person, dec!(0));
    }

    #[test]
    fn test_fractional_counts_truncate() {
        let request = EstimateRequest::new(tier(), dec!(5.9), dec!(2.2), dec!(99.95), vec![]);
        assert_eq!(request.days, 5);
        assert_eq!(request.travelers, 2);
        assert_eq!(request.airfare_per_person, dec!(99.95));

        let request = EstimateRequest::new(tier(), dec!(0.7), dec!(1), dec!(0), vec![]);
        assert_eq!(request.days, 1);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let request = EstimateRequest::new(tier(), dec!(99999999999), dec!(1), dec!(0), vec![]);
        assert_eq!(request.days, u32::MAX);
    }

    #[test]
    fn test_duplicate_activities_counted_once() {
        let request = EstimateRequest::new(
            tier(),
            dec!(1),
            dec!(1),
            dec!(0),
            vec![
                activity("rafting", dec!(40)),
                activity("safari", dec!(60)),
                activity("rafting", dec!(40)),
            ],
        );
        assert_eq!(request.activities.len(), 2);
        assert_eq!(request.activities_per_person(), dec!(100));
    }
}
