//! Weather station reference data.

use serde::{Deserialize, Serialize};

/// One fixed observation site, as stored in the `station` table.
///
/// Field names match the JSON keys of the station listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Row identifier.
    pub id: i64,
    /// Unique station code, e.g. `USC00519397`.
    pub station: String,
    /// Human-readable site name.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in the dataset's native unit.
    pub elevation: f64,
}
