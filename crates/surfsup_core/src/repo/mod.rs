//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the read-only query contract over the climate dataset.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories never mutate the dataset.
//! - Date filters compare `YYYY-MM-DD` strings, never typed date values.

pub mod climate_repo;
