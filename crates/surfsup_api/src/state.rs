//! Shared request state.
//!
//! One dataset connection is opened at startup and shared by every request.
//! `rusqlite::Connection` is not `Sync`, so access is serialized behind a
//! mutex and queries run on the blocking pool. The connection is read-only,
//! so a lock poisoned by a panicking request is recovered, not fatal.

use crate::error::ApiError;
use log::warn;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use surfsup_core::{ClimateService, RepoResult, SqliteClimateRepository};

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `query` against a service bound to the shared connection.
    ///
    /// The connection lock is held for the whole query and released before
    /// the result is returned.
    pub async fn with_service<T, F>(&self, query: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: for<'c> FnOnce(&ClimateService<SqliteClimateRepository<'c>>) -> RepoResult<T>
            + Send
            + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = match conn.lock() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    warn!("event=connection_recovered module=api status=warn reason=poisoned");
                    poisoned.into_inner()
                }
            };
            let service = ClimateService::new(SqliteClimateRepository::new(&guard));
            query(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::TaskFailed(err.to_string()))?
    }
}
