//! Production cycle transitions
//!
//! A production moves forward only: Planned -> Growing -> Harvested -> Sold.

use rust_decimal::Decimal;
use shared::{CropProduction, ProductionStatus};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Advance a production to the next stage of its cycle
pub fn advance_production(
    production: &mut CropProduction,
    next: ProductionStatus,
) -> AnalyticsResult<()> {
    if !production.status.can_transition_to(next) {
        return Err(AnalyticsError::InvalidStateTransition(format!(
            "cannot move production {} from {} to {}",
            production.id, production.status, next
        )));
    }

    tracing::debug!(
        production_id = %production.id,
        from = %production.status,
        to = %next,
        "advancing production stage"
    );
    production.status = next;
    Ok(())
}

/// Record the actual yield of a harvested production
///
/// Only valid at or after the Harvested stage.
pub fn record_actual_yield(
    production: &mut CropProduction,
    yield_kg: Decimal,
) -> AnalyticsResult<()> {
    match production.status {
        ProductionStatus::Harvested | ProductionStatus::Sold => {
            production.actual_yield_kg = Some(yield_kg);
            Ok(())
        }
        _ => Err(AnalyticsError::InvalidStateTransition(format!(
            "cannot record actual yield for production {} in {} stage",
            production.id, production.status
        ))),
    }
}
