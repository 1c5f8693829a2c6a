//! Quote domain model.
//!
//! # Responsibility
//! - Define the stored quote row and the draft used for inserts.
//! - Validate drafts before they reach persistence.
//!
//! # Invariants
//! - `content` is the only uniqueness signal; the store does not enforce it.
//! - `id` and `created_at` are assigned by the store and never change.
//! - Rows are never updated in place.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key. Ordering reflects insertion order only.
pub type QuoteId = i64;

/// One stored quote with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    /// Quote text; the dedup key.
    pub content: String,
    /// Phonetic transcription.
    pub pinyin: Option<String>,
    /// Author or source.
    pub author: Option<String>,
    /// Era or period the quote comes from.
    pub era: Option<String>,
    pub sentiment: Option<String>,
    pub meaning: Option<String>,
    pub usage_scene: Option<String>,
    pub category: Option<String>,
    /// Background story behind the quote.
    pub allusion: Option<String>,
    pub translation: Option<String>,
    pub usage_notes: Option<String>,
    /// SQLite `CURRENT_TIMESTAMP` text (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

/// Insert draft for a quote. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub content: String,
    pub pinyin: Option<String>,
    pub author: Option<String>,
    pub era: Option<String>,
    pub sentiment: Option<String>,
    pub meaning: Option<String>,
    pub usage_scene: Option<String>,
    pub category: Option<String>,
    pub allusion: Option<String>,
    pub translation: Option<String>,
    pub usage_notes: Option<String>,
}

/// Validation failures for quote drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
    /// `content` is empty or whitespace only.
    EmptyContent,
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "quote content must not be blank"),
        }
    }
}

impl Error for QuoteValidationError {}

impl NewQuote {
    /// Creates a draft with only `content` set.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Checks draft invariants before persistence.
    pub fn validate(&self) -> Result<(), QuoteValidationError> {
        if self.content.trim().is_empty() {
            return Err(QuoteValidationError::EmptyContent);
        }
        Ok(())
    }
}
