//! Climate use-case service.
//!
//! # Responsibility
//! - Derive the trailing-year cutoff from the dataset's latest date.
//! - Shape repository rows into the collections the routes serve.
//!
//! # Invariants
//! - The cutoff is `max_date - 365` calendar days, stringified as
//!   `YYYY-MM-DD` before it reaches any query.
//! - Precipitation collapses to one value per date; the last row read wins.
//! - Service layer remains storage-agnostic.

use crate::model::measurement::Measurement;
use crate::model::station::Station;
use crate::model::stats::{DateWindow, TemperatureStats};
use crate::repo::climate_repo::{ClimateRepository, RepoError, RepoResult};
use chrono::{Days, NaiveDate};
use log::debug;
use std::collections::BTreeMap;

/// Storage date format shared by every date column and cutoff.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing window served by the "last year" routes.
pub const TRAILING_WINDOW_DAYS: u64 = 365;

/// Use-case service wrapper over a climate repository.
pub struct ClimateService<R: ClimateRepository> {
    repo: R,
}

impl<R: ClimateRepository> ClimateService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Latest measurement date in the dataset.
    pub fn max_observed_date(&self) -> RepoResult<Option<String>> {
        self.repo.max_observed_date()
    }

    /// Start of the trailing-year window, or `None` for an empty dataset.
    pub fn last_year_cutoff(&self) -> RepoResult<Option<String>> {
        match self.repo.max_observed_date()? {
            Some(max_date) => {
                let cutoff = cutoff_for(&max_date)?;
                debug!("event=cutoff_resolved module=service max_date={max_date} cutoff={cutoff}");
                Ok(Some(cutoff))
            }
            None => Ok(None),
        }
    }

    /// Date -> precipitation for the trailing year.
    ///
    /// # Contract
    /// - Exactly one entry per distinct date on or after the cutoff.
    /// - When several stations report the same date, the row read last wins;
    ///   values are not averaged.
    /// - Keys iterate in ascending date order.
    pub fn precipitation_last_year(&self) -> RepoResult<BTreeMap<String, Option<f64>>> {
        let Some(cutoff) = self.last_year_cutoff()? else {
            return Ok(BTreeMap::new());
        };

        let mut by_date = BTreeMap::new();
        for (date, prcp) in self.repo.precipitation_since(&cutoff)? {
            by_date.insert(date, prcp);
        }
        Ok(by_date)
    }

    /// Every measurement of the trailing year, in storage order.
    pub fn observations_last_year(&self) -> RepoResult<Vec<Measurement>> {
        match self.last_year_cutoff()? {
            Some(cutoff) => self.repo.measurements_since(&cutoff),
            None => Ok(Vec::new()),
        }
    }

    /// All stations, in storage order.
    pub fn stations(&self) -> RepoResult<Vec<Station>> {
        self.repo.all_stations()
    }

    /// Temperature aggregates from `start` through the latest measurement date.
    ///
    /// With no measurements the window has no end and every aggregate is `None`.
    pub fn stats_from(&self, start: &str) -> RepoResult<(DateWindow, TemperatureStats)> {
        let window = DateWindow {
            start: start.to_string(),
            end: self.repo.max_observed_date()?,
        };
        let stats = match window.end.as_deref() {
            Some(end) => self.repo.temperature_stats(start, end)?,
            None => TemperatureStats::default(),
        };
        Ok((window, stats))
    }

    /// Temperature aggregates over the inclusive range `[start, end]`.
    ///
    /// Bounds are passed through unvalidated; reversed or malformed bounds
    /// produce empty aggregates.
    pub fn stats_between(
        &self,
        start: &str,
        end: &str,
    ) -> RepoResult<(DateWindow, TemperatureStats)> {
        let stats = self.repo.temperature_stats(start, end)?;
        let window = DateWindow {
            start: start.to_string(),
            end: Some(end.to_string()),
        };
        Ok((window, stats))
    }
}

/// Computes the trailing-year cutoff for a `YYYY-MM-DD` date.
///
/// Uses calendar-day subtraction, so crossing Feb 29 lands one day later in
/// the month than a same-date-last-year shift would.
///
/// # Errors
/// - `RepoError::InvalidData` when `max_date` is not a valid calendar date.
pub fn cutoff_for(max_date: &str) -> RepoResult<String> {
    let parsed = NaiveDate::parse_from_str(max_date, DATE_FORMAT).map_err(|err| {
        RepoError::InvalidData(format!("invalid max date `{max_date}` in measurement.date: {err}"))
    })?;
    let cutoff = parsed
        .checked_sub_days(Days::new(TRAILING_WINDOW_DAYS))
        .ok_or_else(|| {
            RepoError::InvalidData(format!("max date `{max_date}` has no trailing-year cutoff"))
        })?;
    Ok(cutoff.format(DATE_FORMAT).to_string())
}
