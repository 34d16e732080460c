//! Climate impact models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded climate event and its impact on production
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateImpact {
    pub id: Uuid,
    pub region: String,
    pub event_type: ClimateEventType,
    /// Severity on a 1-5 scale
    pub severity: i32,
    pub economic_loss: Option<Decimal>,
    pub affected_area_hectares: Option<Decimal>,
    pub occurred_on: NaiveDate,
}

/// Types of climate events tracked by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClimateEventType {
    Drought,
    Flood,
    Frost,
    Heatwave,
    Hailstorm,
    PestOutbreak,
}

impl std::fmt::Display for ClimateEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClimateEventType::Drought => write!(f, "Drought"),
            ClimateEventType::Flood => write!(f, "Flood"),
            ClimateEventType::Frost => write!(f, "Frost"),
            ClimateEventType::Heatwave => write!(f, "Heatwave"),
            ClimateEventType::Hailstorm => write!(f, "Hailstorm"),
            ClimateEventType::PestOutbreak => write!(f, "Pest Outbreak"),
        }
    }
}
