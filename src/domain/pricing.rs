//! Landed cost and margin simulation.
//!
//! Converts a foreign-currency source price into a landed cost, a
//! recommended list price and the expected profit, all in whole units of
//! the local currency.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rate::ExchangeRate;

/// Per-kg international shipping cost in local currency.
pub const SHIPPING_WEIGHT_RATE: f64 = 8000.0;
/// Source prices strictly above this value attract import duty.
pub const DUTY_THRESHOLD: f64 = 150.0;
/// Duty charged on the converted base price.
pub const DUTY_RATE: f64 = 0.18;
/// List prices are rounded to the nearest multiple of this step.
pub const LIST_PRICE_STEP: i64 = 100;

/// Largest magnitude an `f64` represents with integer precision (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("{field} must be a number (got {value:?})")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
    #[error("exchange rate must be a positive number")]
    InvalidRate,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    /// Source price in the foreign currency.
    pub source_price_units: f64,
    pub weight_kg: f64,
    pub margin_percent: f64,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            source_price_units: 100.0,
            weight_kg: 1.5,
            margin_percent: 30.0,
        }
    }
}

impl PricingInput {
    /// Builds an input from raw text fields. Blank fields count as zero.
    pub fn from_fields(
        source_price: &str,
        weight: &str,
        margin: &str,
    ) -> Result<Self, InvalidInputError> {
        Ok(Self {
            source_price_units: coerce_number("source price", source_price)?,
            weight_kg: coerce_number("weight", weight)?,
            margin_percent: coerce_number("margin", margin)?,
        })
    }

    fn ensure_finite(&self) -> Result<(), InvalidInputError> {
        let fields = [
            ("source price", self.source_price_units),
            ("weight", self.weight_kg),
            ("margin", self.margin_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InvalidInputError::NonFinite { field });
            }
        }
        Ok(())
    }
}

/// Parses a user-entered number. Whitespace-only input is treated as zero.
pub fn coerce_number(field: &'static str, raw: &str) -> Result<f64, InvalidInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InvalidInputError::NotANumber {
            field,
            value: raw.to_string(),
        })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::NotANumber {
            field,
            value: raw.to_string(),
        })
    }
}

/// How net profit is derived from the margin-applied price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitMode {
    /// Profit from the unrounded margin-applied price.
    #[default]
    MarginApplied,
    /// Profit from the rounded list price, so `list - landed == profit`.
    ListPrice,
}

impl ProfitMode {
    pub fn label(&self) -> &'static str {
        match self {
            ProfitMode::MarginApplied => "Margin-applied price",
            ProfitMode::ListPrice => "Rounded list price",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub shipping_per_kg: f64,
    pub duty_threshold: f64,
    pub duty_rate: f64,
    pub list_price_step: i64,
    #[serde(default)]
    pub profit_mode: ProfitMode,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            shipping_per_kg: SHIPPING_WEIGHT_RATE,
            duty_threshold: DUTY_THRESHOLD,
            duty_rate: DUTY_RATE,
            list_price_step: LIST_PRICE_STEP,
            profit_mode: ProfitMode::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub landed_cost_local: i64,
    pub recommended_list_price_local: i64,
    pub net_profit_local: i64,
}

/// Intermediate values of a pricing run, before rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingBreakdown {
    pub base_local: f64,
    pub shipping_local: f64,
    pub duty_local: f64,
    pub raw_final_price: f64,
    pub result: PricingResult,
}

impl PricingBreakdown {
    pub fn duty_applied(&self) -> bool {
        self.duty_local != 0.0
    }
}

pub fn compute_pricing(
    input: &PricingInput,
    rate: ExchangeRate,
) -> Result<PricingResult, InvalidInputError> {
    compute_pricing_with(&PricingPolicy::default(), input, rate)
}

pub fn compute_pricing_with(
    policy: &PricingPolicy,
    input: &PricingInput,
    rate: ExchangeRate,
) -> Result<PricingResult, InvalidInputError> {
    price_breakdown(policy, input, rate).map(|breakdown| breakdown.result)
}

pub fn price_breakdown(
    policy: &PricingPolicy,
    input: &PricingInput,
    rate: ExchangeRate,
) -> Result<PricingBreakdown, InvalidInputError> {
    input.ensure_finite()?;
    if policy.list_price_step <= 0 {
        return Err(InvalidInputError::OutOfRange {
            field: "list price step",
        });
    }

    let base_local = input.source_price_units * rate.value();
    let shipping_local = input.weight_kg * policy.shipping_per_kg;
    let duty_local = if input.source_price_units > policy.duty_threshold {
        base_local * policy.duty_rate
    } else {
        0.0
    };

    let landed_cost_local = to_whole("landed cost", base_local + shipping_local + duty_local)?;

    // Margin applies to the rounded landed cost.
    let landed = landed_cost_local as f64;
    let raw_final_price = landed * (1.0 + input.margin_percent / 100.0);

    let step = policy.list_price_step;
    let recommended_list_price_local =
        to_whole("list price", raw_final_price / step as f64)?
            .checked_mul(step)
            .ok_or(InvalidInputError::OutOfRange {
                field: "list price",
            })?;

    let net_profit_local = match policy.profit_mode {
        ProfitMode::MarginApplied => to_whole("net profit", raw_final_price - landed)?,
        ProfitMode::ListPrice => recommended_list_price_local
            .checked_sub(landed_cost_local)
            .ok_or(InvalidInputError::OutOfRange {
                field: "net profit",
            })?,
    };

    Ok(PricingBreakdown {
        base_local,
        shipping_local,
        duty_local,
        raw_final_price,
        result: PricingResult {
            landed_cost_local,
            recommended_list_price_local,
            net_profit_local,
        },
    })
}

/// Rounds to the nearest integer, halves toward positive infinity.
pub fn round_to_integer(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

fn to_whole(field: &'static str, value: f64) -> Result<i64, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }
    let rounded = round_to_integer(value);
    if rounded.abs() > MAX_EXACT_INTEGER {
        return Err(InvalidInputError::OutOfRange { field });
    }
    Ok(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rate(value: f64) -> ExchangeRate {
        ExchangeRate::new(value).unwrap()
    }

    fn input(source: f64, weight: f64, margin: f64) -> PricingInput {
        PricingInput {
            source_price_units: source,
            weight_kg: weight,
            margin_percent: margin,
        }
    }

    #[test]
    fn reference_scenario_matches_hand_calculation() {
        let breakdown =
            price_breakdown(&PricingPolicy::default(), &input(100.0, 1.5, 30.0), rate(1350.0))
                .unwrap();

        assert_eq!(breakdown.base_local, 135_000.0);
        assert_eq!(breakdown.shipping_local, 12_000.0);
        assert_eq!(breakdown.duty_local, 0.0);
        assert_eq!(
            breakdown.result,
            PricingResult {
                landed_cost_local: 147_000,
                recommended_list_price_local: 191_100,
                net_profit_local: 44_100,
            }
        );
    }

    #[test]
    fn duty_threshold_is_strict() {
        let policy = PricingPolicy::default();
        let at = price_breakdown(&policy, &input(150.0, 0.0, 0.0), rate(1350.0)).unwrap();
        assert!(!at.duty_applied());
        assert_eq!(at.result.landed_cost_local, 202_500);

        let above = price_breakdown(&policy, &input(150.01, 0.0, 0.0), rate(1350.0)).unwrap();
        assert!(above.duty_applied());
        assert_eq!(above.duty_local, above.base_local * DUTY_RATE);
        // 150.01 * 1350 = 202513.5, plus 18% duty = 238965.93
        assert_eq!(above.result.landed_cost_local, 238_966);
    }

    #[test]
    fn profit_uses_unrounded_price_by_default() {
        // landed 10000, margin 33.3% -> raw 13330, list 13300
        let result = compute_pricing(&input(10.0, 0.0, 33.3), rate(1000.0)).unwrap();
        assert_eq!(result.landed_cost_local, 10_000);
        assert_eq!(result.recommended_list_price_local, 13_300);
        assert_eq!(result.net_profit_local, 3_330);
    }

    #[test]
    fn list_price_profit_mode_is_consistent() {
        let policy = PricingPolicy {
            profit_mode: ProfitMode::ListPrice,
            ..PricingPolicy::default()
        };
        let result = compute_pricing_with(&policy, &input(10.0, 0.0, 33.3), rate(1000.0)).unwrap();
        assert_eq!(result.net_profit_local, 3_300);
        assert_eq!(
            result.net_profit_local,
            result.recommended_list_price_local - result.landed_cost_local
        );
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_to_integer(2.5), 3.0);
        assert_eq!(round_to_integer(-2.5), -2.0);
        assert_eq!(round_to_integer(-2.6), -3.0);
        assert_eq!(round_to_integer(1911.0), 1911.0);
    }

    #[test]
    fn list_price_half_step_rounds_up() {
        // landed 150, margin 0 -> list rounds 1.5 hundreds up to 200
        let result = compute_pricing(&input(0.15, 0.0, 0.0), rate(1000.0)).unwrap();
        assert_eq!(result.landed_cost_local, 150);
        assert_eq!(result.recommended_list_price_local, 200);
    }

    #[test]
    fn zero_input_yields_zero_result() {
        let result = compute_pricing(&input(0.0, 0.0, 0.0), rate(1350.0)).unwrap();
        assert_eq!(
            result,
            PricingResult {
                landed_cost_local: 0,
                recommended_list_price_local: 0,
                net_profit_local: 0,
            }
        );
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let err = compute_pricing(&input(f64::NAN, 1.0, 30.0), rate(1350.0)).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NonFinite {
                field: "source price"
            }
        );

        let err = compute_pricing(&input(1.0, 1.0, f64::INFINITY), rate(1350.0)).unwrap_err();
        assert_eq!(err, InvalidInputError::NonFinite { field: "margin" });
    }

    #[test]
    fn overflowing_result_is_rejected() {
        let err = compute_pricing(&input(1e300, 0.0, 0.0), rate(1e10)).unwrap_err();
        assert!(matches!(err, InvalidInputError::NonFinite { .. }));

        let err = compute_pricing(&input(1e20, 0.0, 0.0), rate(1350.0)).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::OutOfRange {
                field: "landed cost"
            }
        );
    }

    #[test]
    fn fields_coerce_like_form_inputs() {
        let parsed = PricingInput::from_fields(" 100 ", "1.5", "").unwrap();
        assert_eq!(parsed, input(100.0, 1.5, 0.0));

        let err = PricingInput::from_fields("12abc", "1", "1").unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NotANumber {
                field: "source price",
                value: "12abc".to_string(),
            }
        );

        assert!(PricingInput::from_fields("1", "NaN", "1").is_err());
        assert!(PricingInput::from_fields("1", "1", "inf").is_err());
    }

    #[test]
    fn custom_policy_changes_shipping_and_step() {
        let policy = PricingPolicy {
            shipping_per_kg: 10_000.0,
            list_price_step: 1_000,
            ..PricingPolicy::default()
        };
        let result = compute_pricing_with(&policy, &input(10.0, 2.0, 10.0), rate(1000.0)).unwrap();
        assert_eq!(result.landed_cost_local, 30_000);
        assert_eq!(result.recommended_list_price_local, 33_000);
    }

    #[test]
    fn invalid_step_is_rejected() {
        let policy = PricingPolicy {
            list_price_step: 0,
            ..PricingPolicy::default()
        };
        assert!(compute_pricing_with(&policy, &input(1.0, 1.0, 1.0), rate(1350.0)).is_err());
    }

    #[test]
    fn list_price_profit_overflow_is_reported() {
        let policy = PricingPolicy {
            list_price_step: 1 << 62,
            profit_mode: ProfitMode::ListPrice,
            ..PricingPolicy::default()
        };
        let outcome = compute_pricing_with(
            &policy,
            &input(0.0, 125.0, -922_337_203_685_477.6),
            rate(1350.0),
        );
        assert_eq!(
            outcome,
            Err(InvalidInputError::OutOfRange {
                field: "net profit"
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]
        #[test]
        fn no_duty_at_or_below_threshold(
            source in 0.0..=DUTY_THRESHOLD,
            weight in 0.0..50.0f64,
            margin in 0.0..200.0f64,
        ) {
            let breakdown = price_breakdown(
                &PricingPolicy::default(),
                &input(source, weight, margin),
                rate(1350.0),
            ).unwrap();
            prop_assert_eq!(breakdown.duty_local, 0.0);
        }

        #[test]
        fn duty_is_exact_share_of_base_above_threshold(
            excess in 0.001..10_000.0f64,
            weight in 0.0..50.0f64,
            margin in 0.0..200.0f64,
        ) {
            let source = DUTY_THRESHOLD + excess;
            let breakdown = price_breakdown(
                &PricingPolicy::default(),
                &input(source, weight, margin),
                rate(1350.0),
            ).unwrap();
            prop_assert_eq!(breakdown.duty_local, breakdown.base_local * DUTY_RATE);
        }

        #[test]
        fn list_price_is_multiple_of_step(
            source in 0.0..100_000.0f64,
            weight in 0.0..500.0f64,
            margin in -100.0..300.0f64,
            fx in 0.01..5_000.0f64,
        ) {
            let result = compute_pricing(&input(source, weight, margin), rate(fx)).unwrap();
            prop_assert_eq!(result.recommended_list_price_local % LIST_PRICE_STEP, 0);
        }

        #[test]
        fn results_are_recomputed_identically(
            source in 0.0..10_000.0f64,
            weight in 0.0..100.0f64,
            margin in 0.0..200.0f64,
        ) {
            let first = compute_pricing(&input(source, weight, margin), rate(1350.0)).unwrap();
            let second = compute_pricing(&input(source, weight, margin), rate(1350.0)).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
