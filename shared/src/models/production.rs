//! Crop production models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single planting of a crop on a farm, tracked through its cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProduction {
    pub id: Uuid,
    pub crop_id: Uuid,
    pub farm_id: Uuid,
    pub planting_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub area_planted_hectares: Option<Decimal>,
    pub expected_yield_kg: Option<Decimal>,
    /// Populated at or after harvest
    pub actual_yield_kg: Option<Decimal>,
    pub status: ProductionStatus,
    pub method: ProductionMethod,
    pub seed_variety: Option<String>,
    pub seed_source: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CropProduction {
    /// Create a new production in the Planned stage
    pub fn new(crop_id: Uuid, farm_id: Uuid, method: ProductionMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            crop_id,
            farm_id,
            planting_date: None,
            expected_harvest_date: None,
            area_planted_hectares: None,
            expected_yield_kg: None,
            actual_yield_kg: None,
            status: ProductionStatus::Planned,
            method,
            seed_variety: None,
            seed_source: None,
            created_at: Utc::now(),
        }
    }

    /// Actual yield divided by expected yield
    ///
    /// Returns None when either side is missing or the expected yield is zero.
    pub fn yield_efficiency(&self) -> Option<Decimal> {
        let expected = self.expected_yield_kg?;
        let actual = self.actual_yield_kg?;
        if expected <= Decimal::ZERO {
            return None;
        }
        Some(actual / expected)
    }
}

/// Stage of a production in its cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductionStatus {
    Planned,
    Growing,
    Harvested,
    Sold,
}

impl ProductionStatus {
    /// The cycle only moves forward: Planned -> Growing -> Harvested -> Sold
    pub fn can_transition_to(&self, next: ProductionStatus) -> bool {
        matches!(
            (*self, next),
            (ProductionStatus::Planned, ProductionStatus::Growing)
                | (ProductionStatus::Growing, ProductionStatus::Harvested)
                | (ProductionStatus::Harvested, ProductionStatus::Sold)
        )
    }
}

impl std::fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductionStatus::Planned => write!(f, "Planned"),
            ProductionStatus::Growing => write!(f, "Growing"),
            ProductionStatus::Harvested => write!(f, "Harvested"),
            ProductionStatus::Sold => write!(f, "Sold"),
        }
    }
}

/// How the crop is grown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductionMethod {
    Conventional,
    Organic,
    Integrated,
}

impl std::fmt::Display for ProductionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductionMethod::Conventional => write!(f, "Conventional"),
            ProductionMethod::Organic => write!(f, "Organic"),
            ProductionMethod::Integrated => write!(f, "Integrated"),
        }
    }
}
