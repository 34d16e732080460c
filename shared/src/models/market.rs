//! Market price models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An observed market price for a crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrice {
    pub id: Uuid,
    pub crop_id: Uuid,
    pub market_name: String,
    pub market_type: MarketType,
    pub price_per_kg: Option<Decimal>,
    pub region: Option<String>,
    pub recorded_date: NaiveDate,
}

/// Channel where the price was observed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    Wholesale,
    Retail,
    FarmGate,
    Export,
}

impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketType::Wholesale => write!(f, "Wholesale"),
            MarketType::Retail => write!(f, "Retail"),
            MarketType::FarmGate => write!(f, "Farm Gate"),
            MarketType::Export => write!(f, "Export"),
        }
    }
}
