//! Route table and response shaping.
//!
//! # Responsibility
//! - Bind the five `/api/v1.0` routes plus the index page.
//! - Convert core records into the exact JSON shapes clients consume.
//!
//! # Invariants
//! - Date path segments are forwarded unvalidated; bad input yields null
//!   aggregates, not 4xx.
//! - Temperature rows are always emitted in `[window, TMIN, TAVG, TMAX]` order.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use surfsup_core::{DateWindow, Measurement, Station, TemperatureStats};

/// Index page listing every available route.
pub const ROUTES_INDEX: &str = "Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/<start><br/>\
/api/v1.0/<start>/<end>";

/// Builds the application router over shared dataset state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(stats_from))
        .route("/api/v1.0/:start/:end", get(stats_between))
        .with_state(state)
}

/// One observation row of the trailing-year listing.
#[derive(Debug, Serialize)]
pub struct TobsEntry {
    pub date: String,
    pub station: String,
    pub tobs: f64,
}

impl From<Measurement> for TobsEntry {
    fn from(value: Measurement) -> Self {
        Self {
            date: value.date,
            station: value.station,
            tobs: value.tobs,
        }
    }
}

/// Element of a temperature range response.
///
/// The first element echoes the window; the rest carry one aggregate each.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatsEntry {
    Window {
        start_date: String,
        end_date: Option<String>,
    },
    Observation {
        #[serde(rename = "Observation")]
        observation: &'static str,
        #[serde(rename = "Temperature")]
        temperature: Option<f64>,
    },
}

fn stats_entries(window: DateWindow, stats: TemperatureStats) -> Vec<StatsEntry> {
    vec![
        StatsEntry::Window {
            start_date: window.start,
            end_date: window.end,
        },
        StatsEntry::Observation {
            observation: "TMIN",
            temperature: stats.min,
        },
        StatsEntry::Observation {
            observation: "TAVG",
            temperature: stats.avg,
        },
        StatsEntry::Observation {
            observation: "TMAX",
            temperature: stats.max,
        },
    ]
}

async fn index() -> Html<&'static str> {
    Html(ROUTES_INDEX)
}

async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    info!("event=api_request module=api route=precipitation");
    let by_date = state
        .with_service(|service| service.precipitation_last_year())
        .await?;
    Ok(Json(by_date))
}

async fn stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, ApiError> {
    info!("event=api_request module=api route=stations");
    let stations = state.with_service(|service| service.stations()).await?;
    Ok(Json(stations))
}

async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<TobsEntry>>, ApiError> {
    info!("event=api_request module=api route=tobs");
    let rows = state
        .with_service(|service| service.observations_last_year())
        .await?;
    Ok(Json(rows.into_iter().map(TobsEntry::from).collect()))
}

async fn stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<StatsEntry>>, ApiError> {
    info!("event=api_request module=api route=start start={start}");
    let (window, stats) = state
        .with_service(move |service| service.stats_from(&start))
        .await?;
    Ok(Json(stats_entries(window, stats)))
}

async fn stats_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<StatsEntry>>, ApiError> {
    info!("event=api_request module=api route=start_end start={start} end={end}");
    let (window, stats) = state
        .with_service(move |service| service.stats_between(&start, &end))
        .await?;
    Ok(Json(stats_entries(window, stats)))
}
