//! Error handling for the analytics core
//!
//! The scoring and aggregation functions themselves never fail: missing
//! values are skipped, empty inputs produce zero/empty summaries. Errors
//! exist only for caller-input defects caught at the API boundary.

use thiserror::Error;

/// Analytics error types
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid tolerance range for crop '{crop}': {reason}")]
    InvalidToleranceRange { crop: String, reason: String },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Result type alias for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
