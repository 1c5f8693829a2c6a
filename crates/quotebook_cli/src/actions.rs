//! Store operations shared by every front end.
//!
//! Each function is one unit of work against a freshly opened connection.

use crate::session::{CliResult, StoreSession};
use quotebook_core::db::initialize;
use quotebook_core::{
    Quote, QuoteId, QuoteOrder, QuotePage, QuoteService, SeedReport, SeedService,
    SqliteQuoteRepository,
};
use std::io::Write;

const PROGRESS_EVERY: usize = 100;

pub fn init_store(session: &StoreSession) -> CliResult<()> {
    session.run(|conn| Ok(initialize(conn)?))
}

pub fn seed_baseline(session: &StoreSession) -> CliResult<SeedReport> {
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(SeedService::new(repo).seed_baseline()?)
    })
}

pub fn seed_bulk<F>(session: &StoreSession, target: usize, progress: F) -> CliResult<SeedReport>
where
    F: FnMut(usize, usize),
{
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(SeedService::new(repo).seed_bulk_with_progress(target, progress)?)
    })
}

/// Bulk seeding that writes `Progress: processed/target` to `out` every
/// 100 candidates.
pub fn seed_bulk_reporting<W: Write>(
    session: &StoreSession,
    target: usize,
    out: &mut W,
) -> CliResult<SeedReport> {
    let mut write_error = None;
    let report = seed_bulk(session, target, |processed, target| {
        if processed % PROGRESS_EVERY != 0 || write_error.is_some() {
            return;
        }
        let written = writeln!(out, "Progress: {processed}/{target}");
        if let Err(err) = written.and_then(|()| out.flush()) {
            write_error = Some(err);
        }
    })?;
    match write_error {
        Some(err) => Err(err.into()),
        None => Ok(report),
    }
}

pub fn remove_duplicates(session: &StoreSession) -> CliResult<usize> {
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(QuoteService::new(repo).remove_duplicates()?)
    })
}

pub fn list_all(session: &StoreSession, order: QuoteOrder) -> CliResult<Vec<Quote>> {
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(QuoteService::new(repo).list_all(order)?)
    })
}

pub fn list_page(
    session: &StoreSession,
    page: u32,
    page_size: u32,
    order: QuoteOrder,
) -> CliResult<QuotePage> {
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(QuoteService::new(repo).list_page(page, page_size, order)?)
    })
}

pub fn count_quotes(session: &StoreSession) -> CliResult<u64> {
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(QuoteService::new(repo).count()?)
    })
}

pub fn find_quote(session: &StoreSession, id: QuoteId) -> CliResult<Option<Quote>> {
    session.run(|conn| {
        let repo = SqliteQuoteRepository::try_new(conn)?;
        Ok(QuoteService::new(repo).get(id)?)
    })
}

pub fn describe_seed(report: &SeedReport) -> String {
    format!(
        "inserted {} new quote(s), skipped {} existing",
        report.inserted, report.skipped
    )
}
