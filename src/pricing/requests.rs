//! Request DTOs for the estimator form and pricing API.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Raw estimator input, with numeric fields already coerced.
///
/// Numbers that cannot be parsed become zero here; clamping to the allowed
/// minimums happens when the input becomes an
/// [`EstimateRequest`](super::models::EstimateRequest).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EstimateInput {
    #[serde(default, alias = "pkg")]
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub days: Decimal,
    #[serde(default, alias = "people", deserialize_with = "lenient_decimal")]
    pub travelers: Decimal,
    #[serde(default, alias = "airfare", deserialize_with = "lenient_decimal")]
    pub airfare_per_person: Decimal,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl EstimateInput {
    /// Build input from the estimator form's query pairs.
    ///
    /// Field names follow the form: `pkg`, `days`, `people`, `airfare` and a
    /// repeated `activity` checkbox. Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut input = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "pkg" | "tier" => {
                    let value = value.trim();
                    input.tier = (!value.is_empty()).then(|| value.to_string());
                }
                "days" => input.days = parse_amount(value),
                "people" | "travelers" => input.travelers = parse_amount(value),
                "airfare" => input.airfare_per_person = parse_amount(value),
                "activity" => input.activities.push(value.clone()),
                _ => {}
            }
        }
        input
    }
}

/// Parse a user-supplied number, treating anything non-numeric as zero.
///
/// Accepts plain decimals ("12", "99.95") and scientific notation ("1e3").
/// Numbers beyond the range of [`Decimal`] saturate at `Decimal::MAX` or
/// `Decimal::MIN`.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| saturating_amount(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Fallback for well-formed numbers `Decimal` cannot hold
fn saturating_amount(trimmed: &str) -> Option<Decimal> {
    // f64 parsing also accepts "inf" and "NaN", which are not amounts
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric {
        return None;
    }

    let value = f64::from_str(trimmed).ok()?;
    Some(Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }))
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => parse_amount(&n.to_string()),
        serde_json::Value::String(s) => parse_amount(&s),
        _ => Decimal::ZERO,
    })
}
