//! Production risk assessment
//!
//! Two point-based scales over the same production record: operational risk
//! (can this planting be managed to harvest) and food-security risk (what a
//! shortfall would mean for supply). Each condition contributes a fixed
//! number of points; the total maps to a bucket via fixed cutoffs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{CropProduction, ProductionStatus};

/// Operational risk buckets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Food-security risk buckets (separate scale with a Critical tier)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FoodSecurityRisk {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for FoodSecurityRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodSecurityRisk::Low => write!(f, "Low"),
            FoodSecurityRisk::Medium => write!(f, "Medium"),
            FoodSecurityRisk::High => write!(f, "High"),
            FoodSecurityRisk::Critical => write!(f, "Critical"),
        }
    }
}

// Operational scale: condition points and bucket cutoffs
const OP_OVERDUE: i32 = 30;
const OP_HARVEST_WITHIN_WEEK: i32 = 20;
const OP_HARVEST_WITHIN_FORTNIGHT: i32 = 10;
const OP_AREA_OVER_100_HA: i32 = 15;
const OP_AREA_OVER_50_HA: i32 = 10;
const OP_STILL_PLANNED: i32 = 10;
const OP_EFFICIENCY_SHORTFALL: i32 = 25;
const OP_HIGH_CUTOFF: i32 = 50;
const OP_MEDIUM_CUTOFF: i32 = 25;

// Food-security scale
const FS_OVERDUE: i32 = 20;
const FS_HARVEST_WITHIN_WEEK: i32 = 15;
const FS_HARVEST_WITHIN_FORTNIGHT: i32 = 5;
const FS_AREA_OVER_100_HA: i32 = 20;
const FS_AREA_OVER_50_HA: i32 = 10;
const FS_STILL_PLANNED: i32 = 5;
const FS_SEVERE_SHORTFALL: i32 = 30;
const FS_MILD_SHORTFALL: i32 = 15;
const FS_CRITICAL_CUTOFF: i32 = 50;
const FS_HIGH_CUTOFF: i32 = 30;
const FS_MEDIUM_CUTOFF: i32 = 15;

/// Whether the production is still in the field (not yet harvested)
fn in_field(production: &CropProduction) -> bool {
    matches!(
        production.status,
        ProductionStatus::Planned | ProductionStatus::Growing
    )
}

/// Days until the expected harvest; negative when the date has passed
fn days_to_harvest(production: &CropProduction, as_of: NaiveDate) -> Option<i64> {
    production
        .expected_harvest_date
        .map(|date| (date - as_of).num_days())
}

/// Map an operational point total to its bucket
pub fn risk_level_for(points: i32) -> RiskLevel {
    if points >= OP_HIGH_CUTOFF {
        RiskLevel::High
    } else if points >= OP_MEDIUM_CUTOFF {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Map a food-security point total to its bucket
pub fn food_security_level_for(points: i32) -> FoodSecurityRisk {
    if points >= FS_CRITICAL_CUTOFF {
        FoodSecurityRisk::Critical
    } else if points >= FS_HIGH_CUTOFF {
        FoodSecurityRisk::High
    } else if points >= FS_MEDIUM_CUTOFF {
        FoodSecurityRisk::Medium
    } else {
        FoodSecurityRisk::Low
    }
}

/// Accumulate operational risk points for a production
///
/// Missing fields contribute nothing; a production with every field unset
/// scores only its planning-stage points and lands in the Low bucket.
pub fn operational_risk_points(production: &CropProduction, as_of: NaiveDate) -> i32 {
    let mut points = 0;

    if let Some(days) = days_to_harvest(production, as_of) {
        if in_field(production) {
            if days < 0 {
                points += OP_OVERDUE;
            } else if days <= 7 {
                points += OP_HARVEST_WITHIN_WEEK;
            } else if days <= 14 {
                points += OP_HARVEST_WITHIN_FORTNIGHT;
            }
        }
    }

    if let Some(area) = production.area_planted_hectares {
        if area > Decimal::from(100) {
            points += OP_AREA_OVER_100_HA;
        } else if area > Decimal::from(50) {
            points += OP_AREA_OVER_50_HA;
        }
    }

    if production.status == ProductionStatus::Planned {
        points += OP_STILL_PLANNED;
    }

    if let Some(efficiency) = production.yield_efficiency() {
        if efficiency < Decimal::new(7, 1) {
            points += OP_EFFICIENCY_SHORTFALL;
        }
    }

    points
}

/// Accumulate food-security risk points for a production
pub fn food_security_points(production: &CropProduction, as_of: NaiveDate) -> i32 {
    let mut points = 0;

    if let Some(days) = days_to_harvest(production, as_of) {
        if in_field(production) {
            if days < 0 {
                points += FS_OVERDUE;
            } else if days <= 7 {
                points += FS_HARVEST_WITHIN_WEEK;
            } else if days <= 14 {
                points += FS_HARVEST_WITHIN_FORTNIGHT;
            }
        }
    }

    if let Some(area) = production.area_planted_hectares {
        if area > Decimal::from(100) {
            points += FS_AREA_OVER_100_HA;
        } else if area > Decimal::from(50) {
            points += FS_AREA_OVER_50_HA;
        }
    }

    if production.status == ProductionStatus::Planned {
        points += FS_STILL_PLANNED;
    }

    if let Some(efficiency) = production.yield_efficiency() {
        if efficiency < Decimal::new(5, 1) {
            points += FS_SEVERE_SHORTFALL;
        } else if efficiency < Decimal::new(8, 1) {
            points += FS_MILD_SHORTFALL;
        }
    }

    points
}

/// Operational risk bucket for a production
pub fn assess_risk(production: &CropProduction, as_of: NaiveDate) -> RiskLevel {
    let points = operational_risk_points(production, as_of);
    let level = risk_level_for(points);
    tracing::debug!(production_id = %production.id, points, level = %level, "operational risk");
    level
}

/// Food-security risk bucket for a production
pub fn assess_food_security_risk(production: &CropProduction, as_of: NaiveDate) -> FoodSecurityRisk {
    let points = food_security_points(production, as_of);
    let level = food_security_level_for(points);
    tracing::debug!(production_id = %production.id, points, level = %level, "food-security risk");
    level
}
