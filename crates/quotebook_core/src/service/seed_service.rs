//! Seeding use-cases.
//!
//! # Responsibility
//! - Populate the store from the baseline catalog.
//! - Populate the store with `target` bulk candidates cycling the bulk catalog.
//!
//! # Invariants
//! - A candidate whose `content` already exists is skipped, never inserted.
//! - Catalog order is preserved.
//! - Rows inserted before a failure stay persisted; there is no rollback.

use crate::model::quote::NewQuote;
use crate::repo::quote_repo::{QuoteRepository, RepoResult};
use crate::seed::catalog::{bulk_candidate, CatalogEntry, BASELINE_CATALOG, BULK_CATALOG};
use log::{debug, info};
use std::time::Instant;

const PROGRESS_LOG_INTERVAL: usize = 100;

/// Outcome counters of one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Candidates considered.
    pub requested: usize,
    pub inserted: usize,
    /// Candidates skipped because their content already existed.
    pub skipped: usize,
}

/// Seeding service over a quote repository.
pub struct SeedService<R: QuoteRepository> {
    repo: R,
    baseline: &'static [CatalogEntry],
    bulk: &'static [CatalogEntry],
}

impl<R: QuoteRepository> SeedService<R> {
    /// Creates a service seeding from the built-in catalogs.
    pub fn new(repo: R) -> Self {
        Self::with_catalogs(repo, BASELINE_CATALOG, BULK_CATALOG)
    }

    pub fn with_catalogs(
        repo: R,
        baseline: &'static [CatalogEntry],
        bulk: &'static [CatalogEntry],
    ) -> Self {
        Self {
            repo,
            baseline,
            bulk,
        }
    }

    /// Inserts every baseline entry not already stored.
    pub fn seed_baseline(&self) -> RepoResult<SeedReport> {
        let started_at = Instant::now();
        info!(
            "event=seed_baseline module=seed status=start catalog_len={}",
            self.baseline.len()
        );

        let mut report = SeedReport::default();
        for entry in self.baseline {
            report.requested += 1;
            if self.insert_if_absent(&entry.to_new_quote())? {
                report.inserted += 1;
            } else {
                report.skipped += 1;
            }
        }

        info!(
            "event=seed_baseline module=seed status=ok inserted={} skipped={} duration_ms={}",
            report.inserted,
            report.skipped,
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Inserts up to `target` bulk candidates.
    ///
    /// Candidate `i` (1-based) is bulk entry `(i - 1) % K`; for `i > K` its
    /// content carries a variant marker.
    pub fn seed_bulk(&self, target: usize) -> RepoResult<SeedReport> {
        self.seed_bulk_with_progress(target, |_, _| {})
    }

    /// Same as [`Self::seed_bulk`], calling `progress(processed, target)`
    /// after every candidate.
    pub fn seed_bulk_with_progress<F>(&self, target: usize, mut progress: F) -> RepoResult<SeedReport>
    where
        F: FnMut(usize, usize),
    {
        let started_at = Instant::now();
        info!(
            "event=seed_bulk module=seed status=start target={} catalog_len={}",
            target,
            self.bulk.len()
        );

        let mut report = SeedReport::default();
        for index in 1..=target {
            let Some(candidate) = bulk_candidate(self.bulk, index) else {
                break;
            };
            report.requested += 1;
            if self.insert_if_absent(&candidate)? {
                report.inserted += 1;
            } else {
                report.skipped += 1;
            }

            if index % PROGRESS_LOG_INTERVAL == 0 {
                debug!(
                    "event=seed_bulk module=seed status=progress processed={} inserted={}",
                    index, report.inserted
                );
            }
            progress(index, target);
        }

        info!(
            "event=seed_bulk module=seed status=ok target={} inserted={} skipped={} duration_ms={}",
            target,
            report.inserted,
            report.skipped,
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    fn insert_if_absent(&self, candidate: &NewQuote) -> RepoResult<bool> {
        if self.repo.find_by_content(&candidate.content)?.is_some() {
            return Ok(false);
        }
        self.repo.insert_quote(candidate)?;
        Ok(true)
    }
}
