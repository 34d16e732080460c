//! Crop/condition compatibility scoring
//!
//! Scores how well a crop's tolerance ranges match observed growing
//! conditions and ranks candidate crops for a site.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{validate_crop_tolerances, Crop, ToleranceProfile};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Minimum score a crop must exceed to appear in a ranking
const RANKING_CUTOFF: f64 = 0.5;

/// Rainfall is acceptable within +/-20% of the crop's requirement
const RAINFALL_TOLERANCE_PERCENT: u32 = 20;

/// Observed environmental readings for a site
///
/// Any reading may be absent; absent readings are simply not scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowingConditions {
    pub temperature_celsius: Option<Decimal>,
    pub soil_ph: Option<Decimal>,
    pub rainfall_mm: Option<Decimal>,
}

/// A crop together with its compatibility score for given conditions
#[derive(Debug, Clone, Serialize)]
pub struct RankedCrop {
    pub crop: Crop,
    pub score: f64,
}

/// Check temperature against the crop's bounds (inclusive)
///
/// With one bound set the test is one-sided; with no bounds set every
/// temperature is suitable.
pub fn is_temperature_suitable(tolerances: &ToleranceProfile, temperature: Decimal) -> bool {
    match (
        tolerances.temperature_min_celsius,
        tolerances.temperature_max_celsius,
    ) {
        (Some(min), Some(max)) => temperature >= min && temperature <= max,
        (Some(min), None) => temperature >= min,
        (None, Some(max)) => temperature <= max,
        (None, None) => true,
    }
}

/// Check soil pH against the crop's bounds (inclusive)
pub fn is_soil_ph_suitable(tolerances: &ToleranceProfile, soil_ph: Decimal) -> bool {
    match (tolerances.soil_ph_min, tolerances.soil_ph_max) {
        (Some(min), Some(max)) => soil_ph >= min && soil_ph <= max,
        (Some(min), None) => soil_ph >= min,
        (None, Some(max)) => soil_ph <= max,
        (None, None) => true,
    }
}

/// Check rainfall against the crop's requirement, within a +/-20% band
///
/// A crop with no rainfall requirement accepts any rainfall.
pub fn is_rainfall_suitable(tolerances: &ToleranceProfile, rainfall: Decimal) -> bool {
    match tolerances.rainfall_requirement_mm {
        Some(required) => {
            let band = required * Decimal::from(RAINFALL_TOLERANCE_PERCENT) / Decimal::from(100);
            rainfall >= required - band && rainfall <= required + band
        }
        None => true,
    }
}

/// Compatibility score in [0, 1] for a crop under the given conditions
///
/// A factor counts as evaluated only when a reading was supplied AND the
/// crop declares at least one bound for it (for rainfall: a requirement).
/// The score is the fraction of evaluated factors that are satisfied; with
/// no evaluated factors the score is 0. In particular, a crop with no
/// bounds at all scores 0 even when every reading is supplied.
pub fn compatibility_score(crop: &Crop, conditions: &GrowingConditions) -> f64 {
    let tolerances = &crop.tolerances;
    let mut evaluated = 0u32;
    let mut satisfied = 0u32;

    if let Some(temperature) = conditions.temperature_celsius {
        if tolerances.has_temperature_bounds() {
            evaluated += 1;
            if is_temperature_suitable(tolerances, temperature) {
                satisfied += 1;
            }
        }
    }

    if let Some(soil_ph) = conditions.soil_ph {
        if tolerances.has_soil_ph_bounds() {
            evaluated += 1;
            if is_soil_ph_suitable(tolerances, soil_ph) {
                satisfied += 1;
            }
        }
    }

    if let Some(rainfall) = conditions.rainfall_mm {
        if tolerances.rainfall_requirement_mm.is_some() {
            evaluated += 1;
            if is_rainfall_suitable(tolerances, rainfall) {
                satisfied += 1;
            }
        }
    }

    if evaluated == 0 {
        return 0.0;
    }
    f64::from(satisfied) / f64::from(evaluated)
}

/// Rank crops by compatibility with the given conditions
///
/// Crops scoring at or below 0.5 are dropped; the rest are sorted by
/// descending score. The sort is stable, so ties keep their input order.
pub fn rank_crops(crops: &[Crop], conditions: &GrowingConditions) -> Vec<RankedCrop> {
    let mut ranked: Vec<RankedCrop> = crops
        .iter()
        .map(|crop| RankedCrop {
            crop: crop.clone(),
            score: compatibility_score(crop, conditions),
        })
        .filter(|entry| entry.score > RANKING_CUTOFF)
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    tracing::debug!(
        candidates = crops.len(),
        ranked = ranked.len(),
        "ranked crops for conditions"
    );
    ranked
}

/// Rank crops after checking every tolerance profile is well formed
///
/// Rejects the whole request when any crop carries an inverted range, so a
/// bad definition cannot silently skew the ranking.
pub fn rank_crops_validated(
    crops: &[Crop],
    conditions: &GrowingConditions,
) -> AnalyticsResult<Vec<RankedCrop>> {
    for crop in crops {
        validate_crop_tolerances(&crop.tolerances).map_err(|reason| {
            AnalyticsError::InvalidToleranceRange {
                crop: crop.name.clone(),
                reason: reason.to_string(),
            }
        })?;
    }
    Ok(rank_crops(crops, conditions))
}
