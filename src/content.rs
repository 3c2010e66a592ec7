//! Content store types shared with the host pipeline.
//!
//! The host owns the rendered content; the feed steps only read it. The
//! article index selects which items appear in the feed and in what order,
//! and that order is preserved verbatim in the output.

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Per-item metadata block.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentMeta {
    /// Publish date in dotted `day.month.year` form (e.g. "01.02.2024").
    pub date: String,

    /// Permalink path fragment, joined to the home URL.
    pub permalink: String,
}

/// One publishable content item.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub title: String,

    /// Short markup-bearing summary; tags are stripped for the feed.
    pub excerpt: String,

    pub meta: ContentMeta,
}

/// Rendered content keyed by article id.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    items: FxHashMap<String, ContentItem>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, item: ContentItem) {
        self.items.insert(id.into(), item);
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered list of article ids selected for the feed.
///
/// Index order is item order in the output. No re-sorting, deduplication or
/// filtering is applied beyond what the index already encodes.
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex(Vec<String>);

impl ArticleIndex {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn push(&mut self, id: impl Into<String>) {
        self.0.push(id.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ArticleIndex {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl FromIterator<String> for ArticleIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
