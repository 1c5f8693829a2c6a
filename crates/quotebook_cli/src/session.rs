//! Scoped store access for front-end actions.
//!
//! Each unit of work opens its own connection and drops it when done; no
//! connection outlives the action that needed it.

use quotebook_core::db::open_db;
use rusqlite::Connection;
use std::error::Error;
use std::path::{Path, PathBuf};

pub type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Clone)]
pub struct StoreSession {
    db_path: PathBuf,
}

impl StoreSession {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens the store, runs `work`, then releases the connection.
    pub fn run<T, F>(&self, work: F) -> CliResult<T>
    where
        F: FnOnce(&mut Connection) -> CliResult<T>,
    {
        let mut conn = open_db(&self.db_path)?;
        work(&mut conn)
    }
}
