//! Core pricing calculation functions.
//!
//! Pure functions for the estimator math, with no I/O. All arithmetic
//! saturates so that arbitrary user input can never panic.

use rust_decimal::prelude::*;

use super::models::{EstimateRequest, EstimateResult};

/// Round to the given number of decimal places, halves away from zero.
///
/// This matches how browsers round currency for display.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use hamro_vacation_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rooms needed for a group, assuming two travelers per room
pub fn rooms_for(travelers: u32) -> u32 {
    travelers.div_ceil(2)
}

/// Compute the full price breakdown for a normalized request.
pub fn calculate_estimate(request: &EstimateRequest) -> EstimateResult {
    let tier = &request.tier;
    let days = Decimal::from(request.days);
    let travelers = Decimal::from(request.travelers);
    let rooms = rooms_for(request.travelers);

    let hotel_total = tier
        .hotel_per_night
        .saturating_mul(days)
        .saturating_mul(Decimal::from(rooms));
    let vehicle_total = tier.vehicle_per_day.saturating_mul(days);
    let guide_total = tier.guide_per_day.saturating_mul(days);
    let activities_total = request.activities_per_person().saturating_mul(travelers);

    // Ground total excludes airfare
    let ground_total = hotel_total
        .saturating_add(vehicle_total)
        .saturating_add(guide_total)
        .saturating_add(activities_total);

    let airfare_total = request.airfare_per_person.saturating_mul(travelers);
    let grand_total = ground_total.saturating_add(airfare_total);

    EstimateResult {
        rooms,
        hotel_total,
        vehicle_total,
        guide_total,
        activities_total,
        ground_total,
        airfare_total,
        grand_total,
    }
}

/// Format an amount as US dollars, e.g. `$1,234.50`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = round_money(amount.abs(), 2);
    let fixed = format!("{:.2}", rounded);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Activity, PackageTier};
    use rust_decimal_macros::dec;

    fn sample_tier() -> PackageTier {
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

    fn request(days: Decimal, travelers: Decimal, airfare: Decimal, activities: Vec<Activity>) -> EstimateRequest {
        EstimateRequest::new(sample_tier(), days, travelers, airfare, activities)
    }

    // ==================== rooms_for tests ====================

    #[test]
    fn test_rooms_two_travelers_per_room() {
        assert_eq!(rooms_for(1), 1);
        assert_eq!(rooms_for(2), 1);
        assert_eq!(rooms_for(3), 2);
        assert_eq!(rooms_for(4), 2);
        assert_eq!(rooms_for(7), 4);
    }

    #[test]
    fn test_rooms_match_ceil_half() {
        for travelers in 1..=50u32 {
            let expected = (f64::from(travelers) / 2.0).ceil() as u32;
            assert_eq!(rooms_for(travelers), expected, "travelers = {}", travelers);
        }
    }

    // ==================== calculate_estimate tests ====================

    #[test]
    fn test_worked_example() {
        let req = request(
            dec!(5),
            dec!(3),
            dec!(200),
            vec![activity("rafting", dec!(40)), activity("safari", dec!(60))],
        );
        let result = calculate_estimate(&req);

        assert_eq!(result.rooms, 2);
        assert_eq!(result.hotel_total, dec!(1000));
        assert_eq!(result.vehicle_total, dec!(250));
        assert_eq!(result.guide_total, dec!(150));
        assert_eq!(result.activities_total, dec!(300));
        assert_eq!(result.ground_total, dec!(1700));
        assert_eq!(result.airfare_total, dec!(600));
        assert_eq!(result.grand_total, dec!(2300));
    }

    #[test]
    fn test_zero_days_and_travelers_priced_as_one() {
        let result = calculate_estimate(&request(dec!(0), dec!(0), dec!(0), vec![]));

        assert_eq!(result.rooms, 1);
        assert_eq!(result.hotel_total, dec!(100));
        assert_eq!(result.vehicle_total, dec!(50));
        assert_eq!(result.guide_total, dec!(30));
        assert_eq!(result.grand_total, dec!(180));
    }

    #[test]
    fn test_no_activities_selected() {
        let result = calculate_estimate(&request(dec!(3), dec!(2), dec!(0), vec![]));
        assert_eq!(result.activities_total, dec!(0));
        assert_eq!(result.airfare_total, dec!(0));
        assert_eq!(result.ground_total, result.grand_total);
    }

    #[test]
    fn test_grand_total_is_ground_plus_airfare() {
        let airfares = [dec!(0), dec!(149.99), dec!(1234.5)];
        for days in [1, 4, 20] {
            for travelers in [1, 2, 5, 9] {
                for airfare in airfares {
                    let req = request(
                        Decimal::from(days),
                        Decimal::from(travelers),
                        airfare,
                        vec![activity("flight", dec!(230))],
                    );
                    let result = calculate_estimate(&req);
                    assert_eq!(result.grand_total, result.ground_total + result.airfare_total);
                    assert_eq!(
                        result.ground_total,
                        result.hotel_total
                            + result.vehicle_total
                            + result.guide_total
                            + result.activities_total
                    );
                }
            }
        }
    }

    #[test]
    fn test_fractional_airfare_kept_exact() {
        let result = calculate_estimate(&request(dec!(1), dec!(3), dec!(0.10), vec![]));
        assert_eq!(result.airfare_total, dec!(0.30));
    }

    #[test]
    fn test_extreme_input_saturates() {
        let result = calculate_estimate(&request(
            dec!(99999999999),
            dec!(99999999999),
            Decimal::MAX,
            vec![],
        ));
        assert_eq!(result.airfare_total, Decimal::MAX);
        assert_eq!(result.grand_total, Decimal::MAX);
    }

    // ==================== formatting tests ====================

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_money(dec!(2.344), 2), dec!(2.34));
        assert_eq!(round_money(dec!(-2.345), 2), dec!(-2.35));
        assert_eq!(round_money(dec!(0.5), 0), dec!(1));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(5)), "$5.00");
        assert_eq!(format_usd(dec!(999.999)), "$1,000.00");
        assert_eq!(format_usd(dec!(2300)), "$2,300.00");
        assert_eq!(format_usd(dec!(1234567.8)), "$1,234,567.80");
        assert_eq!(format_usd(dec!(123456)), "$123,456.00");
        assert_eq!(format_usd(dec!(-42.5)), "-$42.50");
        assert_eq!(format_usd(dec!(-0.001)), "$0.00");
    }
}
