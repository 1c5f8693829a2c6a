use quotebook_core::db::open_db_in_memory;
use quotebook_core::{
    NewQuote, QuoteOrder, QuoteRepository, RepoError, SortDirection, SortField,
    SqliteQuoteRepository,
};

fn seed_rows(repo: &SqliteQuoteRepository<'_>, count: usize) {
    let authors = ["孔子", "孟子", "屈原", "陆游"];
    for index in 0..count {
        let quote = NewQuote {
            author: Some(authors[index % authors.len()].to_string()),
            era: Some(format!("era-{}", index % 3)),
            ..NewQuote::new(format!("quote-{:02}", (index * 7) % count.max(1)))
        };
        repo.insert_quote(&quote).unwrap();
    }
}

#[test]
fn empty_store_has_zero_pages() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let page = repo
        .list_page(1, 10, QuoteOrder::parse_lenient("id", "asc"))
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_count, 0);
}

#[test]
fn total_pages_is_ceiling_of_count_over_page_size() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    seed_rows(&repo, 23);

    let order = QuoteOrder::default();
    assert_eq!(repo.list_page(1, 10, order).unwrap().total_pages, 3);
    assert_eq!(repo.list_page(1, 23, order).unwrap().total_pages, 1);
    assert_eq!(repo.list_page(1, 1, order).unwrap().total_pages, 23);

    let last = repo.list_page(3, 10, order).unwrap();
    assert_eq!(last.items.len(), 3);
}

#[test]
fn pages_concatenate_to_full_listing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    seed_rows(&repo, 17);

    for field in SortField::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let order = QuoteOrder::new(field, direction);
            let expected: Vec<_> = repo
                .list_all(order)
                .unwrap()
                .into_iter()
                .map(|quote| quote.id)
                .collect();

            for page_size in 1..=8 {
                let total_pages = repo.list_page(1, page_size, order).unwrap().total_pages;
                let mut collected = Vec::new();
                for page in 1..=total_pages {
                    let result = repo.list_page(page, page_size, order).unwrap();
                    collected.extend(result.items.into_iter().map(|quote| quote.id));
                }
                assert_eq!(
                    collected, expected,
                    "order={order:?} page_size={page_size}"
                );
            }
        }
    }
}

#[test]
fn out_of_range_pages_are_empty_without_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();
    seed_rows(&repo, 5);

    let past_end = repo.list_page(9, 2, QuoteOrder::default()).unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_pages, 3);
    assert_eq!(past_end.page, 9);

    let page_zero = repo.list_page(0, 2, QuoteOrder::default()).unwrap();
    assert!(page_zero.items.is_empty());
    assert_eq!(page_zero.total_pages, 3);
}

#[test]
fn zero_page_size_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuoteRepository::try_new(&conn).unwrap();

    let err = repo.list_page(1, 0, QuoteOrder::default()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidPageSize(0)));
}
