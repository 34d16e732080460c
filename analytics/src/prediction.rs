//! Yield prediction and confidence scoring
//!
//! Blends a production's expected yield with the actual yields of its
//! harvested historical siblings, and scores how much the estimate can be
//! trusted.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{CropProduction, ProductionMethod, ProductionStatus};

/// Ceiling for the confidence score
const MAX_CONFIDENCE: i32 = 95;

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Siblings that actually produced a measured yield
fn qualifying_yields(history: &[CropProduction]) -> Vec<Decimal> {
    history
        .iter()
        .filter(|p| p.status == ProductionStatus::Harvested)
        .filter_map(|p| p.actual_yield_kg)
        .collect()
}

/// Predict the yield of a production in kilograms
///
/// Without an expected yield the prediction is zero. Without harvested
/// siblings the expected yield is returned unchanged. Otherwise the result
/// blends the historical average (weight 0.6) with the expected yield
/// (weight 0.4), rounded to two decimals, half away from zero.
pub fn predict_yield(production: &CropProduction, history: &[CropProduction]) -> Decimal {
    let Some(expected) = production.expected_yield_kg else {
        return Decimal::ZERO;
    };

    let actuals = qualifying_yields(history);
    if actuals.is_empty() {
        tracing::debug!(
            production_id = %production.id,
            "no harvested history, using expected yield"
        );
        return expected;
    }

    let sum: Decimal = actuals.iter().sum();
    let historical_average = round2(sum / Decimal::from(actuals.len()));

    let historical_weight = Decimal::new(6, 1); // 0.6
    let expected_weight = Decimal::new(4, 1); // 0.4
    round2(historical_average * historical_weight + expected * expected_weight)
}

/// Confidence in a yield prediction, as points in [0, 95]
///
/// Starts from a base of 50 and adds points for known seed provenance,
/// organic method, depth of history, and how far the planting has
/// progressed by `as_of`.
pub fn confidence_score(
    production: &CropProduction,
    history: &[CropProduction],
    as_of: NaiveDate,
) -> i32 {
    let mut score = 50;

    if production.seed_variety.is_some() {
        score += 10;
    }
    if production.seed_source.is_some() {
        score += 5;
    }
    if production.method == ProductionMethod::Organic {
        score += 10;
    }

    if history.len() > 5 {
        score += 15;
    } else if history.len() > 2 {
        score += 10;
    }

    if let Some(planting_date) = production.planting_date {
        let days_since_planting = (as_of - planting_date).num_days();
        if days_since_planting > 60 {
            score += 10;
        } else if days_since_planting > 30 {
            score += 5;
        }
    }

    score.min(MAX_CONFIDENCE)
}
