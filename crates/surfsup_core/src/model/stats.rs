//! Aggregate shapes returned by temperature range queries.

use serde::{Deserialize, Serialize};

/// Min/avg/max temperature over a date range.
///
/// Every field is `None` when no measurement falls inside the range; SQL
/// aggregates over an empty set yield NULL and that is surfaced unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// Returns `true` when the range matched no observations.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

/// Inclusive date range echoed back alongside temperature aggregates.
///
/// `end` is `None` only when the range was open-ended and the dataset holds
/// no measurements to derive an end date from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: String,
    pub end: Option<String>,
}
