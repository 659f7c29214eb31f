//! `surfsup` server entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and `SURFSUP_*` environment variables.
//! - Own the dataset connection for the lifetime of the process.
//!
//! # Invariants
//! - Storage or schema failures abort startup with exit code 1.

use clap::builder::BoolishValueParser;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use surfsup_api::config::{DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT};
use surfsup_api::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "surfsup")]
#[command(version, about = "Read-only climate observation API")]
struct Args {
    /// SQLite dataset with `station` and `measurement` tables.
    #[arg(long, env = "SURFSUP_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,
    #[arg(long, env = "SURFSUP_HOST", default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, env = "SURFSUP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    /// trace|debug|info|warn|error
    #[arg(long, env = "SURFSUP_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, env = "SURFSUP_LOG_DIR")]
    log_dir: Option<PathBuf>,
    /// Shorthand for `--log-level debug`; the env var accepts 1/0, yes/no, on/off.
    #[arg(long, env = "SURFSUP_DEBUG", value_parser = BoolishValueParser::new())]
    debug: bool,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let log_level = if self.debug {
            Some("debug".to_string())
        } else {
            self.log_level
        };
        ServerConfig {
            db_path: self.db,
            host: self.host,
            port: self.port,
            log_level,
            log_dir: self.log_dir,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Args::parse().into_config();

    let log_dir = config
        .log_dir
        .as_deref()
        .map(|dir| dir.to_string_lossy().into_owned());
    if let Err(err) = surfsup_core::init_logging(config.effective_log_level(), log_dir.as_deref()) {
        eprintln!("surfsup: failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let conn = match surfsup_core::open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=startup module=cli status=error error_code=dataset_unavailable error={err}"
            );
            eprintln!(
                "surfsup: cannot open dataset `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    info!(
        "event=startup module=cli status=ok version={}",
        surfsup_core::core_version()
    );

    match surfsup_api::serve(&config, conn, shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=serve module=cli status=error error={err}");
            eprintln!("surfsup: server error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown module=cli status=error error={err}");
        std::future::pending::<()>().await;
    }
    info!("event=shutdown module=cli status=ok");
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};

    const ENV_VARS: &[&str] = &[
        "SURFSUP_DB",
        "SURFSUP_HOST",
        "SURFSUP_PORT",
        "SURFSUP_LOG_LEVEL",
        "SURFSUP_LOG_DIR",
        "SURFSUP_DEBUG",
    ];

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes env access across tests and starts from a clean `SURFSUP_*` set.
    fn clean_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
        guard
    }

    #[test]
    fn defaults_match_server_config_defaults() {
        let _env = clean_env();
        let config = Args::try_parse_from(["surfsup"]).unwrap().into_config();
        assert_eq!(config, surfsup_api::ServerConfig::default());
    }

    #[test]
    fn debug_flag_overrides_log_level() {
        let _env = clean_env();
        let config = Args::try_parse_from(["surfsup", "--log-level", "warn", "--debug"])
            .unwrap()
            .into_config();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn debug_env_accepts_numeric_and_word_values() {
        let _env = clean_env();
        for (value, expected) in [("1", true), ("yes", true), ("0", false), ("off", false)] {
            std::env::set_var("SURFSUP_DEBUG", value);
            let args = Args::try_parse_from(["surfsup"]).unwrap();
            assert_eq!(args.debug, expected, "SURFSUP_DEBUG={value}");
        }
        std::env::remove_var("SURFSUP_DEBUG");
    }

    #[test]
    fn env_vars_fill_unset_flags() {
        let _env = clean_env();
        std::env::set_var("SURFSUP_PORT", "8081");
        let config = Args::try_parse_from(["surfsup"]).unwrap().into_config();
        std::env::remove_var("SURFSUP_PORT");
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn flags_populate_config() {
        let _env = clean_env();
        let config = Args::try_parse_from([
            "surfsup",
            "--db",
            "/data/hawaii.sqlite",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap()
        .into_config();
        assert_eq!(config.db_path, PathBuf::from("/data/hawaii.sqlite"));
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }
}
