//! Hub facade
//!
//! Bundles the two corpora and the document-link base so callers hold one
//! value. Both corpora sit behind `Arc` and are never mutated, so a hub can
//! be cloned cheaply and shared across threads.

use std::sync::Arc;

use tracing::info;

use crate::comparison::{self, ComparisonResult};
use crate::config::HubConfig;
use crate::data::{StandardId, StandardsCorpus};
use crate::error::HubResult;
use crate::references::{build_document_link, ReferenceItem, ReferenceLibrary, ReferenceStandard};
use crate::search_index::{self, SearchHit};
use crate::topics::{self, Topic};

#[derive(Debug, Clone)]
pub struct StandardsHub {
    pub corpus: Arc<StandardsCorpus>,
    pub references: Arc<ReferenceLibrary>,
    pub base_url: String,
}

impl StandardsHub {
    pub fn new(corpus: StandardsCorpus, references: ReferenceLibrary, base_url: impl Into<String>) -> Self {
        Self {
            corpus: Arc::new(corpus),
            references: Arc::new(references),
            base_url: base_url.into(),
        }
    }

    /// Shipped corpora with the default link base
    pub fn embedded() -> HubResult<Self> {
        Ok(Self::new(
            StandardsCorpus::embedded()?,
            ReferenceLibrary::embedded()?,
            HubConfig::default().base_url,
        ))
    }

    pub fn from_config(config: &HubConfig) -> HubResult<Self> {
        let corpus = StandardsCorpus::load(config.standards_path.as_deref())?;
        let references = ReferenceLibrary::load(config.references_path.as_deref())?;
        info!(
            "Hub ready: {} sections, {} references, base '{}'",
            corpus.section_count(),
            references.len(),
            config.base_url
        );
        Ok(Self::new(corpus, references, config.base_url.clone()))
    }

    // ========================================================================
    // Standards
    // ========================================================================

    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        search_index::search(&self.corpus, query)
    }

    pub fn compare(&self, topic_id: &str, selection: &[StandardId]) -> Option<ComparisonResult> {
        comparison::compare(&self.corpus, topic_id, selection)
    }

    pub fn compare_ids<S: AsRef<str>>(&self, topic_id: &str, ids: &[S]) -> Option<ComparisonResult> {
        comparison::compare_ids(&self.corpus, topic_id, ids)
    }

    pub fn topics(&self) -> Vec<Topic> {
        topics::topics(&self.corpus)
    }

    pub fn common_topics(&self) -> Vec<Topic> {
        topics::common_topics(&self.corpus)
    }

    pub fn suggest_topics(&self, query: &str) -> Vec<Topic> {
        topics::suggest_topics(&self.corpus, query, topics::DEFAULT_SUGGESTION_LIMIT)
    }

    // ========================================================================
    // References
    // ========================================================================

    pub fn references_for_topic(&self, topic_id: &str, standard: Option<ReferenceStandard>) -> Vec<&ReferenceItem> {
        self.references.for_topic(topic_id, standard)
    }

    pub fn search_references(&self, query: &str) -> Vec<&ReferenceItem> {
        self.references.search(query)
    }

    /// Link for `item` under the configured base
    pub fn document_link(&self, item: &ReferenceItem) -> String {
        build_document_link(&self.base_url, &item.book_path, item.page)
    }
}
