//! Aggregate statistics over measurement records
//!
//! A generic summary builder plus domain-specific reports. Records missing
//! the numeric field are excluded from the numeric statistics, records
//! missing the categorical field from the category counts; an empty input
//! yields a zeroed summary rather than an error.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shared::{ClimateImpact, CropProduction, InventoryRecord, MarketPrice};

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Summary of one numeric field and one categorical field over a record set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Number of records carrying the numeric field
    pub count: i64,
    pub sum: Decimal,
    /// Mean of present values, two decimals, half away from zero; zero when empty
    pub average: Decimal,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    /// Occurrences of each distinct categorical value
    pub by_category: BTreeMap<String, i64>,
}

impl FieldSummary {
    fn empty() -> Self {
        Self {
            count: 0,
            sum: Decimal::ZERO,
            average: Decimal::ZERO,
            min: None,
            max: None,
            by_category: BTreeMap::new(),
        }
    }
}

/// Build a `FieldSummary` from any record slice
///
/// `metric` and `category` pick the fields of interest; returning None
/// excludes the record from that statistic only.
pub fn summarize<T>(
    records: &[T],
    metric: impl Fn(&T) -> Option<Decimal>,
    category: impl Fn(&T) -> Option<String>,
) -> FieldSummary {
    let mut summary = FieldSummary::empty();

    for record in records {
        if let Some(value) = metric(record) {
            summary.count += 1;
            summary.sum += value;
            summary.min = Some(summary.min.map_or(value, |m| m.min(value)));
            summary.max = Some(summary.max.map_or(value, |m| m.max(value)));
        }
        if let Some(label) = category(record) {
            *summary.by_category.entry(label).or_insert(0) += 1;
        }
    }

    if summary.count > 0 {
        summary.average = round2(summary.sum / Decimal::from(summary.count));
    }
    summary
}

/// Price summary grouped by market type
pub fn summarize_market_prices(prices: &[MarketPrice]) -> FieldSummary {
    summarize(
        prices,
        |p| p.price_per_kg,
        |p| Some(p.market_type.to_string()),
    )
}

/// Economic-loss summary grouped by climate event type
pub fn summarize_climate_impacts(impacts: &[ClimateImpact]) -> FieldSummary {
    summarize(
        impacts,
        |i| i.economic_loss,
        |i| Some(i.event_type.to_string()),
    )
}

/// Stock summary grouped by quality grade; ungraded stock is not grouped
pub fn summarize_inventory(records: &[InventoryRecord]) -> FieldSummary {
    summarize(
        records,
        |r| r.quantity_kg,
        |r| r.quality_grade.map(|g| g.to_string()),
    )
}

/// Aggregate view of a set of productions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionStats {
    pub total_productions: i64,
    pub by_status: BTreeMap<String, i64>,
    /// Share of each status in percent, two decimals
    pub status_percent: BTreeMap<String, Decimal>,
    pub total_area_hectares: Decimal,
    pub total_expected_yield_kg: Decimal,
    pub total_actual_yield_kg: Decimal,
    /// Mean of actual/expected over productions where both are known
    pub average_yield_efficiency: Option<Decimal>,
}

/// Build production statistics for a set of productions
pub fn production_stats(productions: &[CropProduction]) -> ProductionStats {
    let mut by_status: BTreeMap<String, i64> = BTreeMap::new();
    let mut total_area = Decimal::ZERO;
    let mut total_expected = Decimal::ZERO;
    let mut total_actual = Decimal::ZERO;
    let mut efficiency_sum = Decimal::ZERO;
    let mut efficiency_count = 0i64;

    for production in productions {
        *by_status.entry(production.status.to_string()).or_insert(0) += 1;
        if let Some(area) = production.area_planted_hectares {
            total_area += area;
        }
        if let Some(expected) = production.expected_yield_kg {
            total_expected += expected;
        }
        if let Some(actual) = production.actual_yield_kg {
            total_actual += actual;
        }
        if let Some(efficiency) = production.yield_efficiency() {
            efficiency_sum += efficiency;
            efficiency_count += 1;
        }
    }

    let total = productions.len() as i64;
    let status_percent = percent_distribution(&by_status, total);
    let average_yield_efficiency = if efficiency_count > 0 {
        Some(round2(efficiency_sum / Decimal::from(efficiency_count)))
    } else {
        None
    };

    ProductionStats {
        total_productions: total,
        by_status,
        status_percent,
        total_area_hectares: total_area,
        total_expected_yield_kg: total_expected,
        total_actual_yield_kg: total_actual,
        average_yield_efficiency,
    }
}

/// Aggregate view of recorded climate impacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateStatistics {
    pub total_events: i64,
    pub total_economic_loss: Decimal,
    /// Mean severity on the 1-5 scale, two decimals; zero when empty
    pub average_severity: Decimal,
    pub events_by_type: BTreeMap<String, i64>,
    /// Share of each event type in percent, two decimals
    pub event_type_percent: BTreeMap<String, Decimal>,
    /// Region with the most recorded events; first alphabetically on ties
    pub most_affected_region: Option<String>,
}

/// Build climate statistics for a set of impact records
pub fn climate_statistics(impacts: &[ClimateImpact]) -> ClimateStatistics {
    let mut events_by_type: BTreeMap<String, i64> = BTreeMap::new();
    let mut events_by_region: BTreeMap<String, i64> = BTreeMap::new();
    let mut total_loss = Decimal::ZERO;
    let mut severity_sum = 0i64;

    for impact in impacts {
        *events_by_type
            .entry(impact.event_type.to_string())
            .or_insert(0) += 1;
        *events_by_region.entry(impact.region.clone()).or_insert(0) += 1;
        if let Some(loss) = impact.economic_loss {
            total_loss += loss;
        }
        severity_sum += i64::from(impact.severity);
    }

    let total = impacts.len() as i64;
    let average_severity = if total > 0 {
        round2(Decimal::from(severity_sum) / Decimal::from(total))
    } else {
        Decimal::ZERO
    };

    let most_affected_region = events_by_region
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(region, _)| region.clone());

    ClimateStatistics {
        total_events: total,
        total_economic_loss: total_loss,
        average_severity,
        event_type_percent: percent_distribution(&events_by_type, total),
        events_by_type,
        most_affected_region,
    }
}

/// Percentage share of each category, two decimals; empty when total is zero
fn percent_distribution(counts: &BTreeMap<String, i64>, total: i64) -> BTreeMap<String, Decimal> {
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(label, count)| {
            let percent = round2(Decimal::from(*count * 100) / Decimal::from(total));
            (label.clone(), percent)
        })
        .collect()
}
