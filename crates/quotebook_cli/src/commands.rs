//! One-shot subcommands.
//!
//! Usage: quotebook <init|seed|bulk|dedupe|list|show> [ARGS]

use crate::actions;
use crate::session::{CliResult, StoreSession};
use clap::Args;
use quotebook_core::{
    render_detail, render_table, QuoteId, QuoteOrder, TableAction, TableViewState,
};
use std::io::Write;

#[derive(Debug, Args)]
pub struct BulkArgs {
    /// Number of candidates to generate (defaults to --bulk-count)
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Sort field: id, content, author, era, created_at
    #[arg(long, default_value = "id")]
    pub sort: String,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub dir: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Quote id
    pub id: QuoteId,
}

pub fn execute_init<W: Write>(session: &StoreSession, out: &mut W) -> CliResult<()> {
    actions::init_store(session)?;
    let count = actions::count_quotes(session)?;
    writeln!(
        out,
        "Quote store ready: {} ({count} quote(s))",
        session.db_path().display()
    )?;
    Ok(())
}

pub fn execute_seed<W: Write>(session: &StoreSession, out: &mut W) -> CliResult<()> {
    let report = actions::seed_baseline(session)?;
    writeln!(out, "Seeding finished: {}.", actions::describe_seed(&report))?;
    Ok(())
}

pub fn execute_bulk<W: Write>(session: &StoreSession, count: usize, out: &mut W) -> CliResult<()> {
    writeln!(out, "Generating {count} quotes...")?;
    let report = actions::seed_bulk_reporting(session, count, out)?;
    writeln!(
        out,
        "Bulk generation finished: {}.",
        actions::describe_seed(&report)
    )?;
    Ok(())
}

pub fn execute_dedupe<W: Write>(session: &StoreSession, out: &mut W) -> CliResult<()> {
    let deleted = actions::remove_duplicates(session)?;
    writeln!(out, "Removed {deleted} duplicate quote(s).")?;
    Ok(())
}

/// Prints one page through the table renderer.
///
/// The requested page is clamped into range the same way the table view
/// clamps it, so `--page 0` shows the first page and large pages the last.
pub fn execute_list<W: Write>(
    session: &StoreSession,
    args: ListArgs,
    page_size: u32,
    out: &mut W,
) -> CliResult<()> {
    let order = QuoteOrder::parse_lenient(&args.sort, &args.dir);
    let mut page = actions::list_page(session, args.page, page_size, order)?;

    let state = TableViewState::new(page_size)
        .apply(TableAction::SortBy(order.field))
        .apply(TableAction::SortDirection(order.direction))
        .apply(TableAction::Loaded {
            total_pages: page.total_pages,
        })
        .apply(TableAction::GoTo(args.page))
        .apply(TableAction::Status(format!("{} quote(s)", page.total_count)));
    if state.page != args.page {
        page = actions::list_page(session, state.page, page_size, order)?;
    }

    write!(out, "{}", render_table(&state, &page.items))?;
    Ok(())
}

pub fn execute_show<W: Write>(
    session: &StoreSession,
    args: ShowArgs,
    out: &mut W,
) -> CliResult<()> {
    match actions::find_quote(session, args.id)? {
        Some(quote) => write!(out, "{}", render_detail(&quote))?,
        None => return Err(format!("no quote with id {}", args.id).into()),
    }
    Ok(())
}
