//! Schema migration registry and executor for the quote store.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//! - Adopt stores written before the `era` column rename.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Every statement is create-if-absent, so re-running is a no-op.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_quotes.sql"),
    },
    Migration {
        version: 2,
        sql: include_str!("0002_quotes_content_index.sql"),
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Ensures the `quotes` schema exists on the provided connection.
///
/// Safe to call any number of times; an up-to-date store is left untouched.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the store was written by a
///   newer binary.
/// - `DbError::Sqlite` when a migration statement fails.
pub fn initialize(conn: &mut Connection) -> DbResult<()> {
    let from_version = current_user_version(conn)?;
    let latest = latest_version();

    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }
    if from_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    let pending = MIGRATIONS
        .iter()
        .skip_while(|migration| migration.version <= from_version);
    for migration in pending {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        debug!(
            "event=migration_apply module=db status=ok version={}",
            migration.version
        );
    }
    let adopted_legacy = adopt_legacy_era_column(&tx)?;
    tx.commit()?;

    info!(
        "event=schema_init module=db status=ok from_version={} to_version={} legacy_adopted={}",
        from_version, latest, adopted_legacy
    );
    Ok(())
}

// Older stores named the era column `dynasty`.
fn adopt_legacy_era_column(conn: &Connection) -> DbResult<bool> {
    if table_has_column(conn, "quotes", "era")? || !table_has_column(conn, "quotes", "dynasty")? {
        return Ok(false);
    }
    conn.execute_batch("ALTER TABLE quotes RENAME COLUMN dynasty TO era;")?;
    Ok(true)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> DbResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2;",
        [table, column],
        |row| row.get(0),
    )?;
    Ok(found > 0)
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
