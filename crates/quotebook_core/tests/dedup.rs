use quotebook_core::db::open_db_in_memory;
use quotebook_core::{NewQuote, QuoteOrder, QuoteRepository, QuoteService, SqliteQuoteRepository};
use std::collections::HashMap;

#[test]
fn dedup_keeps_earliest_row_per_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let contents = ["a", "b", "a", "c", "b", "a"];
    let mut first_ids: HashMap<&str, i64> = HashMap::new();
    for content in contents {
        let id = repo.insert_quote(&NewQuote::new(content)).unwrap();
        first_ids.entry(content).or_insert(id);
    }

    let service = QuoteService::new(repo);
    assert_eq!(service.remove_duplicates().unwrap(), 3);

    let remaining = service.list_all(QuoteOrder::default()).unwrap();
    assert_eq!(remaining.len(), 3);
    for quote in &remaining {
        assert_eq!(first_ids[quote.content.as_str()], quote.id);
    }
}

#[test]
fn dedup_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    for content in ["x", "x", "y"] {
        repo.insert_quote(&NewQuote::new(content)).unwrap();
    }

    let service = QuoteService::new(repo);
    assert_eq!(service.remove_duplicates().unwrap(), 1);
    assert_eq!(service.remove_duplicates().unwrap(), 0);
    assert_eq!(service.count().unwrap(), 2);
}

#[test]
fn dedup_on_store_without_duplicates_deletes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    assert_eq!(repo.delete_duplicates().unwrap(), 0);

    repo.insert_quote(&NewQuote::new("only")).unwrap();
    assert_eq!(repo.delete_duplicates().unwrap(), 0);
    assert_eq!(repo.count_quotes().unwrap(), 1);
}

#[test]
fn dedup_is_stable_across_id_gaps() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    for content in ["gap", "filler", "gap"] {
        repo.insert_quote(&NewQuote::new(content)).unwrap();
    }
    conn.execute("DELETE FROM quotes WHERE content = 'filler';", [])
        .unwrap();
    let later = repo.insert_quote(&NewQuote::new("gap")).unwrap();
    let earliest = repo.find_by_content("gap").unwrap().unwrap().id;
    assert!(earliest < later);

    assert_eq!(repo.delete_duplicates().unwrap(), 2);
    let remaining = repo.list_all(QuoteOrder::default()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, earliest);
}
