//! Paginated table view state and text rendering.
//!
//! # Responsibility
//! - Hold every piece of table UI state in one explicit value.
//! - Apply user actions as pure state transitions.
//! - Render a page of quotes into plain text.
//!
//! # Invariants
//! - `page` is always `>= 1` and never exceeds `max(total_pages, 1)` after
//!   navigation or a reload.
//! - At least one column stays visible.
//! - Rendering never touches the store.

use crate::model::listing::{QuoteOrder, SortDirection, SortField};
use crate::model::quote::Quote;
use std::fmt::Write as _;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
const ELLIPSIS: &str = "...";

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Id,
    Content,
    Author,
    Era,
    Meaning,
    CreatedAt,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Content,
        Column::Author,
        Column::Era,
        Column::Meaning,
        Column::CreatedAt,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" => Some(Self::Id),
            "content" => Some(Self::Content),
            "author" => Some(Self::Author),
            "era" | "dynasty" => Some(Self::Era),
            "meaning" => Some(Self::Meaning),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Content => "Quote",
            Self::Author => "Author",
            Self::Era => "Era",
            Self::Meaning => "Meaning",
            Self::CreatedAt => "Added",
        }
    }

    /// Longest cell text shown before truncation, in characters.
    pub fn max_chars(self) -> usize {
        match self {
            Self::Content => 150,
            Self::Meaning => 120,
            Self::Author | Self::Era => 20,
            Self::Id | Self::CreatedAt => 50,
        }
    }

    fn cell(self, quote: &Quote) -> String {
        let raw = match self {
            Self::Id => return quote.id.to_string(),
            Self::Content => quote.content.as_str(),
            Self::Author => quote.author.as_deref().unwrap_or(""),
            Self::Era => quote.era.as_deref().unwrap_or(""),
            Self::Meaning => quote.meaning.as_deref().unwrap_or(""),
            Self::CreatedAt => quote.created_at.as_str(),
        };
        truncate_chars(raw, self.max_chars())
    }
}

/// User actions understood by the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    /// Jumps to a page, clamped to `1..=max(total_pages, 1)`.
    GoTo(u32),
    ToggleColumn(Column),
    /// Changes the sort column and returns to page 1.
    SortBy(SortField),
    /// Changes the sort direction and returns to page 1.
    SortDirection(SortDirection),
    /// A page was fetched; records the store's current page count.
    Loaded { total_pages: u32 },
    Status(String),
}

/// Complete state of the table front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub order: QuoteOrder,
    visible: Vec<Column>,
    pub status: String,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableViewState {
    /// Newest-first, all columns visible, page 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_pages: 0,
            order: QuoteOrder::new(SortField::CreatedAt, SortDirection::Descending),
            visible: Column::ALL.to_vec(),
            status: "Ready".to_string(),
        }
    }

    pub fn visible_columns(&self) -> &[Column] {
        &self.visible
    }

    pub fn is_visible(&self, column: Column) -> bool {
        self.visible.contains(&column)
    }

    pub fn can_go_first(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn can_go_last(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns the state after `action`.
    pub fn apply(mut self, action: TableAction) -> Self {
        match action {
            TableAction::FirstPage => self.page = 1,
            TableAction::PrevPage => self.page = self.page.saturating_sub(1).max(1),
            TableAction::NextPage => {
                if self.can_go_next() {
                    self.page += 1;
                }
            }
            TableAction::LastPage => self.page = self.total_pages.max(1),
            TableAction::GoTo(page) => self.page = page.clamp(1, self.total_pages.max(1)),
            TableAction::ToggleColumn(column) => {
                if self.is_visible(column) {
                    if self.visible.len() > 1 {
                        self.visible.retain(|current| *current != column);
                    }
                } else {
                    self.visible.push(column);
                    self.visible.sort();
                }
            }
            TableAction::SortBy(field) => {
                self.order.field = field;
                self.page = 1;
            }
            TableAction::SortDirection(direction) => {
                self.order.direction = direction;
                self.page = 1;
            }
            TableAction::Loaded { total_pages } => {
                self.total_pages = total_pages;
                self.page = self.page.clamp(1, total_pages.max(1));
            }
            TableAction::Status(status) => self.status = status,
        }
        self
    }
}

/// Renders the visible columns of `rows` plus a footer line.
pub fn render_table(state: &TableViewState, rows: &[Quote]) -> String {
    let columns = state.visible_columns();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|quote| columns.iter().map(|column| column.cell(quote)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            cells
                .iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(column.header().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let headers: Vec<String> = columns
        .iter()
        .map(|column| column.header().to_string())
        .collect();
    push_row(&mut out, &headers, &widths);
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_row(&mut out, &separator, &widths);

    if cells.is_empty() {
        out.push_str("(no quotes)\n");
    }
    for row in &cells {
        push_row(&mut out, row, &widths);
    }

    let _ = writeln!(
        out,
        "page {}/{} | sort: {} {} | {}",
        state.page,
        state.total_pages,
        state.order.field.as_str(),
        state.order.direction.as_str(),
        state.status
    );
    let nav = [
        ("f", state.can_go_first()),
        ("p", state.can_go_prev()),
        ("n", state.can_go_next()),
        ("l", state.can_go_last()),
    ]
    .map(|(key, enabled)| if enabled { key } else { "-" });
    let _ = writeln!(out, "nav: {}", nav.join(" "));
    out
}

/// Renders every field of one quote, one per line.
pub fn render_detail(quote: &Quote) -> String {
    let fields: [(&str, Option<&str>); 12] = [
        ("Quote", Some(quote.content.as_str())),
        ("Pinyin", quote.pinyin.as_deref()),
        ("Author", quote.author.as_deref()),
        ("Era", quote.era.as_deref()),
        ("Sentiment", quote.sentiment.as_deref()),
        ("Meaning", quote.meaning.as_deref()),
        ("Usage scene", quote.usage_scene.as_deref()),
        ("Category", quote.category.as_deref()),
        ("Allusion", quote.allusion.as_deref()),
        ("Translation", quote.translation.as_deref()),
        ("Usage notes", quote.usage_notes.as_deref()),
        ("Added", Some(quote.created_at.as_str())),
    ];

    let mut out = String::from("=====================================\n");
    let _ = writeln!(out, "ID: {}", quote.id);
    for (label, value) in fields {
        let value = value.filter(|text| !text.is_empty()).unwrap_or("-");
        let _ = writeln!(out, "{label}: {value}");
    }
    out.push_str("=====================================\n");
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
