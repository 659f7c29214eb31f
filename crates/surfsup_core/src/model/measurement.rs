//! Daily observation records.

use serde::{Deserialize, Serialize};

/// One station's recorded precipitation and temperature for one date.
///
/// `station` references `Station::station`; referential integrity belongs to
/// the storage layer and is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub station: String,
    /// Observation date as stored (`YYYY-MM-DD`).
    pub date: String,
    /// Precipitation amount; absent readings stay `None`.
    pub prcp: Option<f64>,
    /// Observed temperature.
    pub tobs: f64,
}
