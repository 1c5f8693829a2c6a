//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from seeding and browsing services.
//!
//! # Invariants
//! - Repository writes must enforce `NewQuote::validate()` before persistence.
//! - Repositories borrow a caller-owned connection for one unit of work.

pub mod quote_repo;
