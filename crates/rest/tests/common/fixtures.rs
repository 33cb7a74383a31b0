//! Test fixtures for the blog post API.
//!
//! Provides the seed records inserted by the harness before each test.

use quill_store::{Author, PostDraft};
use serde_json::{Value, json};

/// A single seed record.
#[derive(Debug, Clone)]
pub struct PostFixture {
    pub title: String,
    pub content: String,
    pub first_name: String,
    pub last_name: String,
    pub tag: Option<String>,
}

impl PostFixture {
    /// Creates a fixture with the given title and content.
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            first_name: "nameFirst1".to_string(),
            last_name: "nameLast1".to_string(),
            tag: None,
        }
    }

    /// Sets the author names.
    pub fn with_author(mut self, first: &str, last: &str) -> Self {
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        self
    }

    /// Sets the cleanup tag.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Converts the fixture into a store draft.
    pub fn to_draft(&self) -> PostDraft {
        let draft = PostDraft::new(
            &self.title,
            &self.content,
            Author::new(&self.first_name, &self.last_name),
        );
        match &self.tag {
            Some(tag) => draft.with_tag(tag),
            None => draft,
        }
    }

    /// Renders the fixture as a request body.
    pub fn to_body(&self) -> Value {
        let mut body = json!({
            "title": self.title,
            "content": self.content,
            "author": {
                "firstName": self.first_name,
                "lastName": self.last_name,
            },
        });
        if let Some(tag) = &self.tag {
            body["tag"] = json!(tag);
        }
        body
    }
}

/// The set of seed records inserted before a test.
#[derive(Debug, Clone, Default)]
pub struct TestFixtures {
    pub posts: Vec<PostFixture>,
}

impl TestFixtures {
    /// The canonical single seed record.
    pub fn single() -> Self {
        Self {
            posts: vec![
                PostFixture::new("testTitle1", "lorem ipsum1")
                    .with_author("nameFirst1", "nameLast1")
                    .with_tag("firstTest1"),
            ],
        }
    }

    /// N distinct seed records, each with a unique tag.
    pub fn several(n: usize) -> Self {
        Self {
            posts: (1..=n)
                .map(|i| {
                    PostFixture::new(&format!("testTitle{i}"), &format!("lorem ipsum{i}"))
                        .with_author(&format!("nameFirst{i}"), &format!("nameLast{i}"))
                        .with_tag(&format!("seed-{i}"))
                })
                .collect(),
        }
    }

    /// Number of seed records in this set.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
