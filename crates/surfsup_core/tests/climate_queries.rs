use rusqlite::{params, Connection};
use surfsup_core::db::open_db_in_memory;
use surfsup_core::{ClimateRepository, ClimateService, SqliteClimateRepository};

fn insert_station(conn: &Connection, id: i64, code: &str, name: &str) {
    conn.execute(
        "INSERT INTO station (id, station, name, latitude, longitude, elevation)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![id, code, name, 21.2716, -157.8168, 3.0],
    )
    .unwrap();
}

fn insert_measurement(conn: &Connection, station: &str, date: &str, prcp: Option<f64>, tobs: f64) {
    conn.execute(
        "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4);",
        params![station, date, prcp, tobs],
    )
    .unwrap();
}

fn seeded() -> Connection {
    let conn = open_db_in_memory().unwrap();
    insert_station(&conn, 1, "USC001", "WAIKIKI 717.2, HI US");
    insert_station(&conn, 2, "USC002", "KANEOHE 838.1, HI US");
    insert_measurement(&conn, "USC001", "2016-08-22", Some(0.4), 79.0);
    insert_measurement(&conn, "USC001", "2016-08-23", Some(0.1), 77.0);
    insert_measurement(&conn, "USC002", "2016-08-23", Some(0.7), 74.0);
    insert_measurement(&conn, "USC001", "2017-08-20", Some(0.5), 80.0);
    insert_measurement(&conn, "USC002", "2017-08-20", None, 78.0);
    insert_measurement(&conn, "USC001", "2017-08-23", Some(0.0), 76.0);
    conn
}

#[test]
fn max_observed_date_is_lexicographic_maximum() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    assert_eq!(repo.max_observed_date().unwrap().as_deref(), Some("2017-08-23"));
    assert_eq!(repo.max_observed_date().unwrap().as_deref(), Some("2017-08-23"));
}

#[test]
fn max_observed_date_is_none_for_empty_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClimateRepository::new(&conn);

    assert_eq!(repo.max_observed_date().unwrap(), None);
}

#[test]
fn temperature_stats_are_ordered_within_range() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    let stats = repo.temperature_stats("2016-08-22", "2017-08-23").unwrap();
    let (min, avg, max) = (stats.min.unwrap(), stats.avg.unwrap(), stats.max.unwrap());
    assert!(min <= avg && avg <= max);
    assert_eq!(min, 74.0);
    assert_eq!(max, 80.0);
}

#[test]
fn temperature_stats_bounds_are_inclusive() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    let stats = repo.temperature_stats("2017-08-20", "2017-08-23").unwrap();
    assert_eq!(stats.min, Some(76.0));
    assert_eq!(stats.max, Some(80.0));
    assert_eq!(stats.avg, Some((80.0 + 78.0 + 76.0) / 3.0));
}

#[test]
fn temperature_stats_are_null_for_empty_range() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    let stats = repo.temperature_stats("2010-01-01", "2010-12-31").unwrap();
    assert!(stats.is_empty());
}

#[test]
fn temperature_stats_pass_malformed_bounds_through() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    assert!(repo.temperature_stats("not-a-date", "also-not").unwrap().is_empty());
    assert!(repo.temperature_stats("2017-08-23", "2016-08-22").unwrap().is_empty());
}

#[test]
fn all_stations_returns_every_row_once() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    let stations = repo.all_stations().unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].id, 1);
    assert_eq!(stations[0].station, "USC001");
    assert_eq!(stations[0].name, "WAIKIKI 717.2, HI US");
    assert_eq!(stations[0].latitude, 21.2716);
    assert_eq!(stations[0].longitude, -157.8168);
    assert_eq!(stations[0].elevation, 3.0);
    assert_eq!(stations[1].station, "USC002");
}

#[test]
fn all_stations_lists_blank_codes_unchanged() {
    let conn = open_db_in_memory().unwrap();
    insert_station(&conn, 1, "USC001", "WAIKIKI 717.2, HI US");
    insert_station(&conn, 2, " ", "UNNAMED SITE");
    let repo = SqliteClimateRepository::new(&conn);

    let stations = repo.all_stations().unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[1].station, " ");
    assert_eq!(stations[1].name, "UNNAMED SITE");
}

#[test]
fn measurements_since_filters_on_cutoff_inclusively() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    let rows = repo.measurements_since("2016-08-23").unwrap();
    let dates = rows.iter().map(|row| row.date.as_str()).collect::<Vec<_>>();
    assert_eq!(
        dates,
        vec!["2016-08-23", "2016-08-23", "2017-08-20", "2017-08-20", "2017-08-23"]
    );
    assert_eq!(rows[3].prcp, None);
}

#[test]
fn precipitation_since_keeps_one_row_per_measurement() {
    let conn = seeded();
    let repo = SqliteClimateRepository::new(&conn);

    let rows = repo.precipitation_since("2017-08-20").unwrap();
    assert_eq!(
        rows,
        vec![
            ("2017-08-20".to_string(), Some(0.5)),
            ("2017-08-20".to_string(), None),
            ("2017-08-23".to_string(), Some(0.0)),
        ]
    );
}

#[test]
fn service_cutoff_is_one_year_before_latest_date() {
    let conn = seeded();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    assert_eq!(service.last_year_cutoff().unwrap().as_deref(), Some("2016-08-23"));
}

#[test]
fn precipitation_last_year_collapses_per_date_last_row_wins() {
    let conn = seeded();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    let by_date = service.precipitation_last_year().unwrap();
    let entries = by_date.into_iter().collect::<Vec<_>>();
    assert_eq!(
        entries,
        vec![
            ("2016-08-23".to_string(), Some(0.7)),
            ("2017-08-20".to_string(), None),
            ("2017-08-23".to_string(), Some(0.0)),
        ]
    );
}

#[test]
fn observations_last_year_excludes_rows_before_cutoff() {
    let conn = seeded();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    let rows = service.observations_last_year().unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.date.as_str() >= "2016-08-23"));
}

#[test]
fn last_year_views_are_empty_without_measurements() {
    let conn = open_db_in_memory().unwrap();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    assert_eq!(service.last_year_cutoff().unwrap(), None);
    assert!(service.precipitation_last_year().unwrap().is_empty());
    assert!(service.observations_last_year().unwrap().is_empty());
}

#[test]
fn stats_from_runs_through_latest_date() {
    let conn = seeded();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    let (window, stats) = service.stats_from("2017-08-20").unwrap();
    assert_eq!(window.start, "2017-08-20");
    assert_eq!(window.end.as_deref(), Some("2017-08-23"));
    assert_eq!(stats.min, Some(76.0));
    assert_eq!(stats.max, Some(80.0));
}

#[test]
fn stats_from_has_no_end_on_empty_dataset() {
    let conn = open_db_in_memory().unwrap();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    let (window, stats) = service.stats_from("2017-01-01").unwrap();
    assert_eq!(window.end, None);
    assert!(stats.is_empty());
}

#[test]
fn stats_between_echoes_requested_window() {
    let conn = seeded();
    let service = ClimateService::new(SqliteClimateRepository::new(&conn));

    let (window, stats) = service.stats_between("2016-08-22", "2016-08-23").unwrap();
    assert_eq!(window.start, "2016-08-22");
    assert_eq!(window.end.as_deref(), Some("2016-08-23"));
    assert_eq!(stats.min, Some(74.0));
    assert_eq!(stats.max, Some(79.0));
}
