//! Core domain logic for Quotebook.
//! This crate owns the quote store, seeding, and front-end view state.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod view;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::listing::{QuoteOrder, QuotePage, SortDirection, SortField};
pub use model::quote::{NewQuote, Quote, QuoteId, QuoteValidationError};
pub use repo::quote_repo::{QuoteRepository, RepoError, RepoResult, SqliteQuoteRepository};
pub use service::quote_service::QuoteService;
pub use service::seed_service::{SeedReport, SeedService};
pub use view::table::{render_detail, render_table, Column, TableAction, TableViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
