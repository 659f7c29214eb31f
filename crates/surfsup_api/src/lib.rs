//! HTTP surface for the Surfs Up climate API.
//!
//! # Responsibility
//! - Map the fixed route set onto `surfsup_core` use cases.
//! - Shape query results into JSON and translate failures into HTTP status.
//!
//! # Invariants
//! - Every route is a stateless read; the only shared state is the
//!   dataset connection owned by `AppState`.
//! - Successful routes always answer 200, even when results are empty.

pub mod config;
mod error;
mod routes;
mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{app, ROUTES_INDEX};
pub use state::AppState;

use log::info;
use rusqlite::Connection;
use std::future::Future;
use tokio::net::TcpListener;

/// Binds the configured address and serves the router until `shutdown` resolves.
///
/// Takes ownership of the dataset connection; it is dropped once the server
/// has drained.
pub async fn serve<F>(config: &ServerConfig, conn: Connection, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "event=server_start module=api status=ok addr={} db={}",
        listener.local_addr()?,
        config.db_path.display()
    );

    axum::serve(listener, app(AppState::new(conn)))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=api status=ok addr={addr}");
    Ok(())
}
