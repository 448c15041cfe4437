//! Shared fixtures for facetmap integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use facetmap::prelude::*;
use once_cell::sync::Lazy;

/// Record type used across the integration suite: a small library
/// catalogue entry with a unique id, two lookup attributes, and an
/// unindexed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub author: String,
}

impl Book {
    pub fn new(id: &str, title: &str, author: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            desc: String::new(),
            author: author.into(),
        }
    }
}

impl Record for Book {
    fn shape() -> Shape {
        Shape::Record {
            name: "Book",
            attributes: vec![
                Attribute::primary_key("Id", AttributeKind::Str),
                Attribute::index("Title", AttributeKind::Str),
                Attribute::plain("Desc", AttributeKind::Str),
                Attribute::index("Author", AttributeKind::Str),
            ],
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "Id" => Some(&self.id),
            "Title" => Some(&self.title),
            "Desc" => Some(&self.desc),
            "Author" => Some(&self.author),
            _ => None,
        }
    }
}

/// The three catalogue entries shared by most tests.
pub static SHELF: Lazy<Vec<Arc<Book>>> = Lazy::new(|| {
    vec![
        Arc::new(Book::new("1", "Jane Eyre", "Charlotte Bronte")),
        Arc::new(Book::new("2", "Gone With the Wind", "Margaret Mitchell")),
        Arc::new(Book::new("3", "Pride and Prejudice", "Jane Austen")),
    ]
});

/// A store pre-populated with [`SHELF`].
pub fn shelf_store() -> FacetMap<Book> {
    init_tracing();
    let store = FacetMap::new().expect("Book schema is valid");
    for book in SHELF.iter() {
        store.add(Arc::clone(book)).expect("shelf books are complete");
    }
    store
}

/// Opt-in log output while debugging a test run.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Sorted primary keys of a get() result, for set comparisons.
pub fn ids(records: &[Arc<Book>]) -> Vec<&str> {
    let mut ids: Vec<&str> = records.iter().map(|book| book.id.as_str()).collect();
    ids.sort_unstable();
    ids
}
