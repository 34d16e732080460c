//! Crop definition models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A crop variety registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub id: Uuid,
    pub name: String,
    pub crop_type: CropType,
    pub tolerances: ToleranceProfile,
    /// Free-form season label (e.g., "May-July")
    pub growing_season: Option<String>,
    pub harvest_season: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Crop {
    /// Create a new crop with a fresh id
    pub fn new(name: impl Into<String>, crop_type: CropType, tolerances: ToleranceProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            crop_type,
            tolerances,
            growing_season: None,
            harvest_season: None,
            created_at: Utc::now(),
        }
    }
}

/// Broad crop categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Cereal,
    Legume,
    Vegetable,
    Fruit,
    Tuber,
    Oilseed,
    Fiber,
    Other,
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Cereal => write!(f, "Cereal"),
            CropType::Legume => write!(f, "Legume"),
            CropType::Vegetable => write!(f, "Vegetable"),
            CropType::Fruit => write!(f, "Fruit"),
            CropType::Tuber => write!(f, "Tuber"),
            CropType::Oilseed => write!(f, "Oilseed"),
            CropType::Fiber => write!(f, "Fiber"),
            CropType::Other => write!(f, "Other"),
        }
    }
}

/// Environmental tolerance ranges for a crop
///
/// Any bound may be absent, meaning the crop is unbounded on that side.
/// When both bounds of a range are present, min must not exceed max
/// (enforced by `validation::validate_crop_tolerances`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToleranceProfile {
    pub temperature_min_celsius: Option<Decimal>,
    pub temperature_max_celsius: Option<Decimal>,
    pub soil_ph_min: Option<Decimal>,
    pub soil_ph_max: Option<Decimal>,
    /// Seasonal rainfall the crop needs, in millimetres
    pub rainfall_requirement_mm: Option<Decimal>,
}

impl ToleranceProfile {
    /// Whether any temperature bound is set
    pub fn has_temperature_bounds(&self) -> bool {
        self.temperature_min_celsius.is_some() || self.temperature_max_celsius.is_some()
    }

    /// Whether any soil pH bound is set
    pub fn has_soil_ph_bounds(&self) -> bool {
        self.soil_ph_min.is_some() || self.soil_ph_max.is_some()
    }
}
