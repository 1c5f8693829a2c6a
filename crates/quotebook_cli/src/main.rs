//! Quotebook CLI
//!
//! Console menu, table view, and one-shot commands over a local quote store.

use clap::{Parser, Subcommand};
use log::{error, info};
use std::io;
use std::path::Path;

mod actions;
mod commands;
mod config;
mod menu;
mod session;
mod table;

use config::{AppConfig, ConfigArgs};
use session::{CliResult, StoreSession};

#[derive(Debug, Parser)]
#[command(name = "quotebook")]
#[command(about = "Quotebook - Chinese quotes store", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Numbered console menu (default)
    Menu,
    /// Paginated, sortable table view
    Table,
    /// Create or upgrade the store
    Init,
    /// Insert the baseline quotes that are not stored yet
    Seed,
    /// Generate variant quotes from the bulk catalog
    Bulk(commands::BulkArgs),
    /// Remove quotes with duplicate content
    Dedupe,
    /// Print one page of quotes
    List(commands::ListArgs),
    /// Print every field of one quote
    Show(commands::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot read working directory: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_cli(cli, &cwd) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Logs are flushed before returning on every path.
fn run_cli(cli: Cli, cwd: &Path) -> CliResult<()> {
    let config = AppConfig::resolve(cli.config, cwd);

    if let Err(e) = quotebook_core::init_logging(&config.log_level, &config.log_dir) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!(
        "event=cli_start module=cli status=ok version={} db={}",
        quotebook_core::core_version(),
        config.db_path.display()
    );

    let result = run(cli.command.unwrap_or(Commands::Menu), &config);
    match &result {
        Ok(()) => info!("event=cli_exit module=cli status=ok"),
        Err(e) => error!("event=cli_exit module=cli status=error error={}", e),
    }
    quotebook_core::flush_logging();
    result
}

fn run(command: Commands, config: &AppConfig) -> CliResult<()> {
    let session = StoreSession::new(&config.db_path);
    let mut out = io::stdout().lock();

    match command {
        Commands::Menu => menu::run_menu(
            &session,
            config.bulk_count,
            &mut io::stdin().lock(),
            &mut out,
        ),
        Commands::Table => {
            actions::init_store(&session)?;
            table::run_table(
                &session,
                config.page_size,
                config.bulk_count,
                &mut io::stdin().lock(),
                &mut out,
            )
        }
        Commands::Init => commands::execute_init(&session, &mut out),
        Commands::Seed => commands::execute_seed(&session, &mut out),
        Commands::Bulk(args) => {
            let count = args.count.unwrap_or(config.bulk_count);
            commands::execute_bulk(&session, count, &mut out)
        }
        Commands::Dedupe => commands::execute_dedupe(&session, &mut out),
        Commands::List(args) => {
            commands::execute_list(&session, args, config.page_size, &mut out)
        }
        Commands::Show(args) => commands::execute_show(&session, args, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::{run_cli, Cli};
    use clap::Parser;
    use std::ffi::OsString;

    #[test]
    fn one_shot_command_leaves_its_events_in_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("quotes.db");
        let logs = dir.path().join("logs");
        let args: Vec<OsString> = vec![
            "quotebook".into(),
            "--db".into(),
            db.into_os_string(),
            "--log-dir".into(),
            logs.clone().into_os_string(),
            "--log-level".into(),
            "info".into(),
            "seed".into(),
        ];
        let cli = Cli::parse_from(args);

        run_cli(cli, dir.path()).unwrap();

        let written: String = std::fs::read_dir(&logs)
            .unwrap()
            .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect();
        assert!(written.contains("event=cli_start"));
        assert!(written.contains("event=seed_baseline"));
        assert!(written.contains("event=cli_exit module=cli status=ok"));
    }
}
