//! Analytics core for the Agricultural Management Platform
//!
//! Pure, synchronous computations over already-loaded domain records:
//! crop/condition compatibility scoring, yield prediction and risk
//! assessment, and aggregate statistics. No I/O is performed here; callers
//! fetch the records and serialize the results.

pub mod compatibility;
pub mod error;
pub mod lifecycle;
pub mod prediction;
pub mod risk;
pub mod stats;

pub use compatibility::{
    compatibility_score, is_rainfall_suitable, is_soil_ph_suitable, is_temperature_suitable,
    rank_crops, rank_crops_validated, GrowingConditions, RankedCrop,
};
pub use error::{AnalyticsError, AnalyticsResult};
pub use lifecycle::{advance_production, record_actual_yield};
pub use prediction::{confidence_score, predict_yield};
pub use risk::{
    assess_food_security_risk, assess_risk, food_security_level_for, food_security_points,
    operational_risk_points, risk_level_for, FoodSecurityRisk, RiskLevel,
};
pub use stats::{
    climate_statistics, production_stats, summarize, summarize_climate_impacts,
    summarize_inventory, summarize_market_prices, ClimateStatistics, FieldSummary,
    ProductionStats,
};
