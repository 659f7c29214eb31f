//! Typed records for the climate dataset.
//!
//! # Responsibility
//! - Define the row shapes bound to the `station` and `measurement` tables.
//! - Define aggregate/result shapes produced by the query layer.
//!
//! # Invariants
//! - Records are read-only snapshots; nothing here writes back to storage.
//! - Dates stay string-encoded `YYYY-MM-DD` as stored.

pub mod measurement;
pub mod station;
pub mod stats;
