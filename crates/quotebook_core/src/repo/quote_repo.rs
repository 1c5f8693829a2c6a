//! Quote repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/listing/dedup APIs over the `quotes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `NewQuote::validate()` before SQL mutations.
//! - No uniqueness is enforced on insert; the dedup pass reconciles later.
//! - Ordering SQL comes only from `QuoteOrder`, never from caller text.

use crate::db::DbError;
use crate::model::listing::{total_pages, QuoteOrder, QuotePage};
use crate::model::quote::{NewQuote, Quote, QuoteId, QuoteValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUOTE_SELECT_SQL: &str = "SELECT
    id,
    content,
    pinyin,
    author,
    era,
    sentiment,
    meaning,
    usage_scene,
    category,
    allusion,
    translation,
    usage_notes,
    created_at
FROM quotes";

const REQUIRED_COLUMNS: [&str; 13] = [
    "id",
    "content",
    "pinyin",
    "author",
    "era",
    "sentiment",
    "meaning",
    "usage_scene",
    "category",
    "allusion",
    "translation",
    "usage_notes",
    "created_at",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for quote persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuoteValidationError),
    Db(DbError),
    /// Page size must be at least one row.
    InvalidPageSize(u32),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidPageSize(size) => {
                write!(f, "invalid page size {size}; expected at least 1")
            }
            Self::MissingRequiredTable(table) => {
                write!(f, "quote store is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "quote store table `{table}` is missing column `{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<QuoteValidationError> for RepoError {
    fn from(value: QuoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for quote storage.
pub trait QuoteRepository {
    /// Appends one row and returns its store-assigned id.
    fn insert_quote(&self, quote: &NewQuote) -> RepoResult<QuoteId>;
    /// Total number of stored rows.
    fn count_quotes(&self) -> RepoResult<u64>;
    /// Exact-text lookup; the earliest row wins when duplicates exist.
    fn find_by_content(&self, content: &str) -> RepoResult<Option<Quote>>;
    fn find_by_id(&self, id: QuoteId) -> RepoResult<Option<Quote>>;
    /// Every row in the requested order.
    fn list_all(&self, order: QuoteOrder) -> RepoResult<Vec<Quote>>;
    /// One 1-based page; out-of-range pages are empty, not errors.
    fn list_page(&self, page: u32, page_size: u32, order: QuoteOrder) -> RepoResult<QuotePage>;
    /// Keeps the minimum id per `content` and returns the number removed.
    fn delete_duplicates(&self) -> RepoResult<usize>;
}

/// SQLite-backed quote repository borrowing a caller-owned connection.
#[derive(Clone, Copy)]
pub struct SqliteQuoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuoteRepository<'conn> {
    /// Constructs a repository from an initialized connection.
    ///
    /// Fails when the `quotes` table or any of its columns is missing.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_quote_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl QuoteRepository for SqliteQuoteRepository<'_> {
    fn insert_quote(&self, quote: &NewQuote) -> RepoResult<QuoteId> {
        quote.validate()?;

        self.conn.execute(
            "INSERT INTO quotes (
                content,
                pinyin,
                author,
                era,
                sentiment,
                meaning,
                usage_scene,
                category,
                allusion,
                translation,
                usage_notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11);",
            params![
                quote.content.as_str(),
                quote.pinyin.as_deref(),
                quote.author.as_deref(),
                quote.era.as_deref(),
                quote.sentiment.as_deref(),
                quote.meaning.as_deref(),
                quote.usage_scene.as_deref(),
                quote.category.as_deref(),
                quote.allusion.as_deref(),
                quote.translation.as_deref(),
                quote.usage_notes.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn count_quotes(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes;", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn find_by_content(&self, content: &str) -> RepoResult<Option<Quote>> {
        let mut stmt = self.conn.prepare(&format!(
            "{QUOTE_SELECT_SQL}
             WHERE content = ?1
             ORDER BY id ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query([content])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_quote_row(row)?));
        }

        Ok(None)
    }

    fn find_by_id(&self, id: QuoteId) -> RepoResult<Option<Quote>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_quote_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self, order: QuoteOrder) -> RepoResult<Vec<Quote>> {
        let mut stmt = self.conn.prepare(&format!(
            "{QUOTE_SELECT_SQL} ORDER BY {};",
            order.order_by_sql()
        ))?;
        let mut rows = stmt.query([])?;
        let mut quotes = Vec::new();

        while let Some(row) = rows.next()? {
            quotes.push(parse_quote_row(row)?);
        }

        Ok(quotes)
    }

    fn list_page(&self, page: u32, page_size: u32, order: QuoteOrder) -> RepoResult<QuotePage> {
        if page_size == 0 {
            return Err(RepoError::InvalidPageSize(page_size));
        }

        let total_count = self.count_quotes()?;
        let mut items = Vec::new();

        // Page 0 is out of range like any page past the end.
        if let Some(page_index) = page.checked_sub(1) {
            let offset = i64::from(page_index) * i64::from(page_size);
            let mut stmt = self.conn.prepare(&format!(
                "{QUOTE_SELECT_SQL} ORDER BY {} LIMIT ?1 OFFSET ?2;",
                order.order_by_sql()
            ))?;
            let mut rows = stmt.query(params![i64::from(page_size), offset])?;
            while let Some(row) = rows.next()? {
                items.push(parse_quote_row(row)?);
            }
        }

        Ok(QuotePage {
            items,
            total_pages: total_pages(total_count, page_size),
            page,
            page_size,
            total_count,
        })
    }

    fn delete_duplicates(&self) -> RepoResult<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM quotes
             WHERE id NOT IN (
                SELECT MIN(id)
                FROM quotes
                GROUP BY content
             );",
            [],
        )?;
        Ok(deleted)
    }
}

fn parse_quote_row(row: &Row<'_>) -> RepoResult<Quote> {
    Ok(Quote {
        id: row.get("id")?,
        content: row.get("content")?,
        pinyin: row.get("pinyin")?,
        author: row.get("author")?,
        era: row.get("era")?,
        sentiment: row.get("sentiment")?,
        meaning: row.get("meaning")?,
        usage_scene: row.get("usage_scene")?,
        category: row.get("category")?,
        allusion: row.get("allusion")?,
        translation: row.get("translation")?,
        usage_notes: row.get("usage_notes")?,
        created_at: row
            .get::<_, Option<String>>("created_at")?
            .unwrap_or_default(),
    })
}

fn ensure_quote_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "quotes")? {
        return Err(RepoError::MissingRequiredTable("quotes"));
    }

    let columns = table_columns(conn, "quotes")?;
    for column in REQUIRED_COLUMNS {
        if !columns.iter().any(|current| current == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "quotes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(1)?);
    }
    Ok(columns)
}
