//! Quote browsing and maintenance use-cases.
//!
//! # Responsibility
//! - Provide listing/lookup entry points for the front ends.
//! - Run the dedup pass and report what it removed.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Service layer remains storage-agnostic.

use crate::model::listing::{QuoteOrder, QuotePage};
use crate::model::quote::{Quote, QuoteId};
use crate::repo::quote_repo::{QuoteRepository, RepoResult};
use log::info;
use std::time::Instant;

/// Use-case service wrapper for reading and deduplicating quotes.
pub struct QuoteService<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_quotes()
    }

    pub fn get(&self, id: QuoteId) -> RepoResult<Option<Quote>> {
        self.repo.find_by_id(id)
    }

    pub fn find_by_content(&self, content: &str) -> RepoResult<Option<Quote>> {
        self.repo.find_by_content(content)
    }

    pub fn list_all(&self, order: QuoteOrder) -> RepoResult<Vec<Quote>> {
        self.repo.list_all(order)
    }

    /// Lists one page; `page` is 1-based and never range checked.
    pub fn list_page(&self, page: u32, page_size: u32, order: QuoteOrder) -> RepoResult<QuotePage> {
        self.repo.list_page(page, page_size, order)
    }

    /// Collapses rows sharing identical content down to the earliest one.
    ///
    /// Returns the number of deleted rows; a second call returns `0`.
    pub fn remove_duplicates(&self) -> RepoResult<usize> {
        let started_at = Instant::now();
        let deleted = self.repo.delete_duplicates()?;
        info!(
            "event=dedupe module=service status=ok deleted={} duration_ms={}",
            deleted,
            started_at.elapsed().as_millis()
        );
        Ok(deleted)
    }
}
