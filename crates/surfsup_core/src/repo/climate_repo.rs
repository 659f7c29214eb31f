//! Climate repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the fixed set of parameterized read queries over `station` and
//!   `measurement`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - "Since" filters normalize stored dates with `strftime('%Y-%m-%d', date)`
//!   and compare them to an already-stringified cutoff.
//! - Range aggregates compare the raw `date` column lexicographically; inputs
//!   are not validated, so malformed bounds simply match nothing.
//! - Listings return rows in storage order.

use crate::db::DbError;
use crate::model::measurement::Measurement;
use crate::model::station::Station;
use crate::model::stats::TemperatureStats;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STATION_SELECT_SQL: &str = "SELECT
    id,
    station,
    name,
    latitude,
    longitude,
    elevation
FROM station";

const MEASUREMENT_SINCE_SQL: &str = "SELECT
    station,
    date,
    prcp,
    tobs
FROM measurement
WHERE strftime('%Y-%m-%d', date) >= ?1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for climate queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted climate data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read-only query contract over the climate dataset.
pub trait ClimateRepository {
    /// Latest normalized measurement date, or `None` for an empty table.
    fn max_observed_date(&self) -> RepoResult<Option<String>>;
    /// Min/avg/max `tobs` over the inclusive range `[start_date, end_date]`.
    fn temperature_stats(&self, start_date: &str, end_date: &str) -> RepoResult<TemperatureStats>;
    fn all_stations(&self) -> RepoResult<Vec<Station>>;
    /// Every measurement dated on or after `cutoff_date`.
    fn measurements_since(&self, cutoff_date: &str) -> RepoResult<Vec<Measurement>>;
    /// `(date, prcp)` pairs dated on or after `cutoff_date`, one per row.
    fn precipitation_since(&self, cutoff_date: &str)
        -> RepoResult<Vec<(String, Option<f64>)>>;
}

/// SQLite-backed climate repository.
pub struct SqliteClimateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClimateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ClimateRepository for SqliteClimateRepository<'_> {
    fn max_observed_date(&self) -> RepoResult<Option<String>> {
        let max_date = self.conn.query_row(
            "SELECT MAX(strftime('%Y-%m-%d', date)) FROM measurement;",
            [],
            |row| row.get::<_, Option<String>>(0),
        )?;
        Ok(max_date)
    }

    fn temperature_stats(&self, start_date: &str, end_date: &str) -> RepoResult<TemperatureStats> {
        let stats = self.conn.query_row(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs)
             FROM measurement
             WHERE date >= ?1
               AND date <= ?2;",
            params![start_date, end_date],
            |row| {
                Ok(TemperatureStats {
                    min: row.get(0)?,
                    avg: row.get(1)?,
                    max: row.get(2)?,
                })
            },
        )?;
        Ok(stats)
    }

    fn all_stations(&self) -> RepoResult<Vec<Station>> {
        let mut stmt = self.conn.prepare(&format!("{STATION_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut stations = Vec::new();

        while let Some(row) = rows.next()? {
            stations.push(parse_station_row(row)?);
        }

        Ok(stations)
    }

    fn measurements_since(&self, cutoff_date: &str) -> RepoResult<Vec<Measurement>> {
        let mut stmt = self.conn.prepare(&format!("{MEASUREMENT_SINCE_SQL};"))?;
        let mut rows = stmt.query([cutoff_date])?;
        let mut measurements = Vec::new();

        while let Some(row) = rows.next()? {
            measurements.push(parse_measurement_row(row)?);
        }

        Ok(measurements)
    }

    fn precipitation_since(
        &self,
        cutoff_date: &str,
    ) -> RepoResult<Vec<(String, Option<f64>)>> {
        let mut stmt = self.conn.prepare(
            "SELECT strftime('%Y-%m-%d', date) AS day, prcp
             FROM measurement
             WHERE strftime('%Y-%m-%d', date) >= ?1;",
        )?;
        let mut rows = stmt.query([cutoff_date])?;
        let mut readings = Vec::new();

        while let Some(row) = rows.next()? {
            let day: String = row.get("day")?;
            let prcp: Option<f64> = row.get("prcp")?;
            readings.push((day, prcp));
        }

        Ok(readings)
    }
}

fn parse_station_row(row: &Row<'_>) -> RepoResult<Station> {
    Ok(Station {
        id: row.get("id")?,
        station: row.get("station")?,
        name: row.get("name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        elevation: row.get("elevation")?,
    })
}

fn parse_measurement_row(row: &Row<'_>) -> RepoResult<Measurement> {
    Ok(Measurement {
        station: row.get("station")?,
        date: row.get("date")?,
        prcp: row.get("prcp")?,
        tobs: row.get("tobs")?,
    })
}
