//! Ordering and pagination types for quote listings.
//!
//! # Responsibility
//! - Restrict sort selection to a closed set of columns and directions.
//! - Map each choice to a fixed SQL fragment.
//!
//! # Invariants
//! - User text never becomes part of a SQL string; unknown names fall back
//!   to `id` / ascending instead of failing.

use crate::model::quote::Quote;
use serde::{Deserialize, Serialize};

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Content,
    Author,
    Era,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Content,
        SortField::Author,
        SortField::Era,
        SortField::CreatedAt,
    ];

    /// Parses a column name, falling back to `Id` for anything unknown.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" => Self::Id,
            "content" => Self::Content,
            "author" => Self::Author,
            // `dynasty` is the column's name in older stores.
            "era" | "dynasty" => Self::Era,
            "created_at" => Self::CreatedAt,
            _ => Self::Id,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Content => "content",
            Self::Author => "author",
            Self::Era => "era",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Listing direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses `asc`/`desc` (or the long forms), falling back to ascending.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub(crate) fn keyword_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Full ordering of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl QuoteOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Builds an order from free text with the permissive fallback policy.
    pub fn parse_lenient(field: &str, direction: &str) -> Self {
        Self::new(
            SortField::parse_lenient(field),
            SortDirection::parse_lenient(direction),
        )
    }

    /// `ORDER BY` body. Ties are broken by `id ASC` so paging is stable.
    pub(crate) fn order_by_sql(self) -> String {
        match self.field {
            SortField::Id => format!("id {}", self.direction.keyword_sql()),
            field => format!(
                "{} {}, id ASC",
                field.as_str(),
                self.direction.keyword_sql()
            ),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePage {
    pub items: Vec<Quote>,
    /// `ceil(total_count / page_size)`; `0` for an empty store.
    pub total_pages: u32,
    /// Requested 1-based page number, echoed as given.
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

/// Number of pages needed for `total_count` rows.
///
/// `page_size` must be non-zero; callers validate it first.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{total_pages, QuoteOrder, SortDirection, SortField};

    #[test]
    fn unknown_sort_names_fall_back_to_id_ascending() {
        let order = QuoteOrder::parse_lenient("content; DROP TABLE quotes", "sideways");
        assert_eq!(order.field, SortField::Id);
        assert_eq!(order.direction, SortDirection::Ascending);
    }

    #[test]
    fn known_names_are_case_insensitive() {
        assert_eq!(SortField::parse_lenient(" Created_At "), SortField::CreatedAt);
        assert_eq!(SortField::parse_lenient("dynasty"), SortField::Era);
        assert_eq!(SortDirection::parse_lenient("DESC"), SortDirection::Descending);
    }

    #[test]
    fn non_id_orders_break_ties_by_id() {
        let order = QuoteOrder::new(SortField::Author, SortDirection::Descending);
        assert_eq!(order.order_by_sql(), "author DESC, id ASC");
        let by_id = QuoteOrder::new(SortField::Id, SortDirection::Descending);
        assert_eq!(by_id.order_by_sql(), "id DESC");
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}
