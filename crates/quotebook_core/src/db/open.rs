//! Connection bootstrap for the quote store.
//!
//! # Responsibility
//! - Open file-backed or in-memory SQLite connections.
//! - Run schema initialization before handing the connection to callers.
//!
//! # Invariants
//! - Returned connections have the `quotes` schema in place.
//! - The caller owns the connection; nothing here keeps a global handle.

use super::migrations::initialize;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if needed) a quote store file and initializes its schema.
///
/// Missing parent directories are created first.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    if let Err(err) = ensure_parent_dir(path) {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_dir_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    finish_open(Connection::open(path), "file", started_at)
}

/// Opens an in-memory quote store with the schema initialized.
///
/// Every call yields an independent, empty database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");
    finish_open(Connection::open_in_memory(), "memory", started_at)
}

fn finish_open(
    opened: rusqlite::Result<Connection>,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    initialize(conn)
}

fn ensure_parent_dir(path: &Path) -> DbResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(DbError::from)
        }
        _ => Ok(()),
    }
}
