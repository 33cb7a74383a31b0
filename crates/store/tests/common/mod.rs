//! Shared test infrastructure for store backend tests.

use std::sync::Arc;

use quill_store::{Author, DocumentStore, MemoryStore, PostDraft, SqliteStore};

/// Returns one instance of every backend under test.
///
/// Each call produces fresh, empty stores; tests never share state.
pub fn backends() -> Vec<Arc<dyn DocumentStore>> {
    let sqlite = SqliteStore::in_memory().expect("Failed to create SQLite store");
    sqlite.init_schema().expect("Failed to initialize schema");

    vec![Arc::new(sqlite), Arc::new(MemoryStore::new())]
}

/// A draft matching the canonical seed record.
pub fn seed_draft() -> PostDraft {
    PostDraft::new(
        "testTitle1",
        "lorem ipsum1",
        Author::new("nameFirst1", "nameLast1"),
    )
    .with_tag("firstTest1")
}

/// A draft with a distinct title and tag, for multi-document tests.
pub fn draft_n(n: usize) -> PostDraft {
    PostDraft::new(
        format!("title-{n}"),
        format!("content-{n}"),
        Author::new("first", "last"),
    )
    .with_tag(format!("tag-{n}"))
}
