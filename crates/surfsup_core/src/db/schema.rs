//! Declared dataset schema and its startup verification.
//!
//! # Responsibility
//! - Name every table and column the query layer binds to.
//! - Reject datasets whose shape does not match before serving any request.
//!
//! # Invariants
//! - Verification only reads `PRAGMA table_info`; it never mutates the store.
//! - Extra tables or columns in the dataset are tolerated.

use super::{DbError, DbResult};
use rusqlite::Connection;

/// One table the query layer depends on, with the columns it reads.
#[derive(Debug, Clone, Copy)]
pub struct TableDecl {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const STATION_TABLE: TableDecl = TableDecl {
    name: "station",
    columns: &["id", "station", "name", "latitude", "longitude", "elevation"],
};

pub const MEASUREMENT_TABLE: TableDecl = TableDecl {
    name: "measurement",
    columns: &["station", "date", "prcp", "tobs"],
};

pub const DECLARED_TABLES: &[TableDecl] = &[STATION_TABLE, MEASUREMENT_TABLE];

const CREATE_SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY NOT NULL,
    station TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    latitude FLOAT NOT NULL,
    longitude FLOAT NOT NULL,
    elevation FLOAT NOT NULL
);
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY NOT NULL,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp FLOAT,
    tobs FLOAT NOT NULL
);";

/// Checks every declared table and column against the connected dataset.
///
/// # Errors
/// - `DbError::MissingTable` when a declared table does not exist.
/// - `DbError::MissingColumn` for the first declared column that is absent.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    for table in DECLARED_TABLES {
        let present = table_columns(conn, table.name)?;
        if present.is_empty() {
            return Err(DbError::MissingTable { table: table.name });
        }
        if let Some(&column) = table
            .columns
            .iter()
            .find(|column| !present.iter().any(|name| name.as_str() == **column))
        {
            return Err(DbError::MissingColumn {
                table: table.name,
                column,
            });
        }
    }
    Ok(())
}

/// Creates the canonical tables when absent. Used for fixtures and empty stores.
pub fn create_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_SCHEMA_SQL)?;
    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    // table_info yields no rows for unknown tables instead of failing.
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
