//! Search state held by the caller between queries

use serde::Serialize;

use crate::data::StandardsCorpus;
use crate::search_index::{search, SearchHit};

/// Query and results of the current search.
///
/// Owned by the caller and passed explicitly; nothing here is global.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<SearchHit>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `query` and replace the results with a fresh search.
    pub fn perform_search(&mut self, corpus: &StandardsCorpus, query: &str) -> &[SearchHit] {
        self.query = query.to_string();
        self.results = if query.trim().is_empty() {
            Vec::new()
        } else {
            search(corpus, query)
        };
        &self.results
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
