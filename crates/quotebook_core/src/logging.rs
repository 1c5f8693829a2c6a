//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start rolling file logs once per process.
//! - Capture panics into the log with a sanitized payload.
//!
//! # Invariants
//! - Repeated init with the same level and directory is a no-op.
//! - Init with a different level or directory is rejected, never applied.
//! - Log lines carry metadata only; quote text is never logged.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Once;

const LOG_FILE_BASENAME: &str = "quotebook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK: Once = Once::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    handle: LoggerHandle,
}

impl LoggingState {
    fn check_matches(&self, level: &str, log_dir: &Path) -> Result<(), String> {
        if self.log_dir != log_dir {
            return Err(format!(
                "logging already writes to `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                log_dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already runs at level `{}`; refusing to switch to `{}`",
                self.level, level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` into the absolute directory `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is empty, relative, or cannot be created.
/// - Logging is already active with a different level or directory.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> Result<(), String> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir.as_ref())?;

    if let Some(state) = LOGGING_STATE.get() {
        return state.check_matches(level, log_dir);
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, log_dir))?;
    // Another thread may have won the race with a different config.
    state.check_matches(level, log_dir)
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Writes buffered log lines to the log file.
///
/// Must run before the process exits; the background flush only fires about
/// once per second. No-op when logging is not active.
pub fn flush_logging() {
    if let Some(state) = LOGGING_STATE.get() {
        state.handle.flush();
    }
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<LoggingState, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", log_dir.display()))?;

    let file_spec = FileSpec::default()
        .directory(log_dir)
        .basename(LOG_FILE_BASENAME);

    let logger = Logger::try_with_str(level)
        .and_then(|logger| {
            logger
                .log_to_file(file_spec)
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        })
        .map_err(|err| format!("cannot start logger: {err}"))?;

    PANIC_HOOK.call_once(install_panic_hook);

    info!(
        "event=logging_init module=core status=ok level={} log_dir={} platform={} build_mode={} version={}",
        level,
        log_dir.display(),
        std::env::consts::OS,
        if cfg!(debug_assertions) { "debug" } else { "release" },
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        handle: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    let wanted = if wanted == "warning" { "warn" } else { wanted.as_str() };
    LEVELS
        .iter()
        .copied()
        .find(|known| *known == wanted)
        .ok_or_else(|| {
            format!(
                "unsupported log level `{}`; expected {}",
                level.trim(),
                LEVELS.join("|")
            )
        })
}

fn normalize_log_dir(log_dir: &Path) -> Result<&Path, String> {
    if log_dir.as_os_str().is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    if !log_dir.is_absolute() {
        return Err(format!(
            "log directory must be absolute, got `{}`",
            log_dir.display()
        ));
    }
    Ok(log_dir)
}

fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = match panic_info.location() {
            Some(loc) => format!("{}:{}", loc.file(), loc.line()),
            None => "unknown".to_string(),
        };
        let payload = panic_info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            sanitize_message(message, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

// Single line, capped length.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars().map(|ch| match ch {
        '\n' | '\r' => ' ',
        other => other,
    });
    let mut sanitized: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        sanitized.push_str("...");
    }
    sanitized
}
