//! Inventory models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored quantity of harvested produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: Uuid,
    pub crop_id: Uuid,
    pub quantity_kg: Option<Decimal>,
    /// None for stock that has not been graded yet
    pub quality_grade: Option<QualityGrade>,
    pub storage_location: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Quality grade assigned to stored produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    GradeA,
    GradeB,
    GradeC,
    Reject,
}

impl std::fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityGrade::GradeA => write!(f, "Grade A"),
            QualityGrade::GradeB => write!(f, "Grade B"),
            QualityGrade::GradeC => write!(f, "Grade C"),
            QualityGrade::Reject => write!(f, "Reject"),
        }
    }
}
