use quotebook_core::db::migrations::latest_version;
use quotebook_core::db::{initialize, open_db, open_db_in_memory, DbError};
use quotebook_core::{QuoteRepository, RepoError, SqliteQuoteRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_quotes_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(
        column_names(&conn, "quotes"),
        vec![
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
        ]
    );
}

#[test]
fn initialize_is_idempotent_and_keeps_rows() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
        repo.insert_quote(&quotebook_core::NewQuote::new("海内存知己，天涯若比邻"))
            .unwrap();
    }

    initialize(&mut conn).unwrap();
    initialize(&mut conn).unwrap();

    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    assert_eq!(repo.count_quotes().unwrap(), 1);
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn opening_same_file_twice_is_idempotent_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("quotes.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert!(path.exists());
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn legacy_store_with_dynasty_column_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE quotes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            pinyin TEXT,
            author TEXT,
            dynasty TEXT,
            sentiment TEXT,
            meaning TEXT,
            usage_scene TEXT,
            category TEXT,
            allusion TEXT,
            translation TEXT,
            usage_notes TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        INSERT INTO quotes (content, author, dynasty) VALUES ('塞翁失马，焉知非福', '刘安', '西汉');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    let quote = repo
        .find_by_content("塞翁失马，焉知非福")
        .unwrap()
        .unwrap();
    assert_eq!(quote.era.as_deref(), Some("西汉"));
    assert_eq!(quote.author.as_deref(), Some("刘安"));
    assert!(!column_names(&conn, "quotes").contains(&"dynasty".to_string()));
}

#[test]
fn repository_rejects_connection_without_schema() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteQuoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("quotes")));
}

#[test]
fn repository_rejects_table_missing_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE quotes (id INTEGER PRIMARY KEY, content TEXT NOT NULL);")
        .unwrap();
    let err = SqliteQuoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::MissingRequiredColumn {
            table: "quotes",
            column: "pinyin"
        }
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .unwrap();
    stmt.query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}
