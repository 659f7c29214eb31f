//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into route-level use cases.
//! - Own the "last year of data" window arithmetic.
//!
//! # Invariants
//! - The dataset's latest measurement date stands in for "today".

pub mod climate_service;
