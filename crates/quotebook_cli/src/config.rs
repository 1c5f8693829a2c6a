//! Runtime configuration from flags and environment.
//!
//! # Responsibility
//! - Declare every tunable with its env fallback and default.
//! - Resolve relative paths against the working directory once, up front.

use clap::Args;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "data/quotes.db";
pub const DEFAULT_LOG_DIR: &str = "data/logs";
pub const DEFAULT_BULK_COUNT: usize = 10_000;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path of the SQLite quote store
    #[arg(long = "db", env = "QUOTEBOOK_DB", default_value = DEFAULT_DB_PATH, global = true)]
    pub db_path: PathBuf,

    /// Directory for rolling log files
    #[arg(long, env = "QUOTEBOOK_LOG_DIR", default_value = DEFAULT_LOG_DIR, global = true)]
    pub log_dir: PathBuf,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, env = "QUOTEBOOK_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Number of candidates for the menu/table bulk-seed action
    #[arg(long, default_value_t = DEFAULT_BULK_COUNT, global = true)]
    pub bulk_count: usize,

    /// Rows per page in the table view
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    pub page_size: u32,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Always absolute.
    pub log_dir: PathBuf,
    pub log_level: String,
    pub bulk_count: usize,
    pub page_size: u32,
}

impl AppConfig {
    pub fn resolve(args: ConfigArgs, cwd: &Path) -> Self {
        Self {
            db_path: args.db_path,
            log_dir: absolutize(&args.log_dir, cwd),
            log_level: args
                .log_level
                .unwrap_or_else(|| quotebook_core::default_log_level().to_string()),
            bulk_count: args.bulk_count,
            page_size: args.page_size,
        }
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
