//! Core domain logic for the Surfs Up climate API.
//! This crate owns the dataset schema, the read queries, and the
//! trailing-year window rules; HTTP concerns live in `surfsup_api`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::measurement::Measurement;
pub use model::station::Station;
pub use model::stats::{DateWindow, TemperatureStats};
pub use repo::climate_repo::{ClimateRepository, RepoError, RepoResult, SqliteClimateRepository};
pub use service::climate_service::{cutoff_for, ClimateService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
