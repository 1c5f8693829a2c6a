//! Quote domain model.
//!
//! # Responsibility
//! - Define the stored quote shape and its insert draft.
//! - Define closed ordering/pagination types used by listings.
//!
//! # Invariants
//! - Every stored quote is identified by a store-assigned `QuoteId`.
//! - Deletion only happens through the dedup pass.

pub mod listing;
pub mod quote;
