//! Reference / Bibliography Lookup
//!
//! Flat list of bibliographic entries linking a topic + standard to a source
//! document and page. Declaration order is significant: every lookup returns
//! entries in corpus order, which is the default display order.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::data::StandardId;
use crate::error::{HubError, HubResult};

const EMBEDDED_REFERENCES: &str = include_str!("../data/references.json");

/// Standard a reference belongs to; `General` covers cross-standard sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStandard {
    Pmbok,
    Prince2,
    Iso,
    General,
}

impl ReferenceStandard {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceStandard::Pmbok => "pmbok",
            ReferenceStandard::Prince2 => "prince2",
            ReferenceStandard::Iso => "iso",
            ReferenceStandard::General => "general",
        }
    }
}

impl From<StandardId> for ReferenceStandard {
    fn from(id: StandardId) -> Self {
        match id {
            StandardId::Pmbok => ReferenceStandard::Pmbok,
            StandardId::Prince2 => ReferenceStandard::Prince2,
            StandardId::Iso => ReferenceStandard::Iso,
        }
    }
}

impl std::str::FromStr for ReferenceStandard {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("general") {
            return Ok(ReferenceStandard::General);
        }
        s.parse::<StandardId>().map(Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    Book,
    Url,
    Academic,
    Template,
    Guide,
}

impl ReferenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceType::Book => "book",
            ReferenceType::Url => "url",
            ReferenceType::Academic => "academic",
            ReferenceType::Template => "template",
            ReferenceType::Guide => "guide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceCategory {
    Core,
    Supplementary,
    Comparison,
    Tool,
    Guide,
    Template,
}

impl ReferenceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceCategory::Core => "core",
            ReferenceCategory::Supplementary => "supplementary",
            ReferenceCategory::Comparison => "comparison",
            ReferenceCategory::Tool => "tool",
            ReferenceCategory::Guide => "guide",
            ReferenceCategory::Template => "template",
        }
    }
}

/// A single bibliographic entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    pub id: String,
    pub topic_id: String,
    pub standard_id: ReferenceStandard,
    pub title: String,
    /// Absolute URL or path to a local document
    pub book_path: String,
    /// 1-based page; 0 for unpaginated URLs
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ReferenceCategory>,
}

impl ReferenceItem {
    pub fn is_url(&self) -> bool {
        self.book_path.starts_with("http")
    }
}

/// Per-topic reference counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicStatistics {
    #[serde(rename = "topicId")]
    pub topic_id: String,
    pub total: usize,
    pub pmbok: usize,
    pub prince2: usize,
    pub iso: usize,
    pub general: usize,
}

/// Build a link to a referenced document.
///
/// URLs (anything starting with "http") are returned unchanged. Local paths
/// are joined to `base` with exactly one separator and get a `#page=` anchor.
pub fn build_document_link(base: &str, path: &str, page: u32) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    if path.starts_with('/') {
        format!("{}{}#page={}", base, path, page)
    } else {
        format!("{}/{}#page={}", base, path, page)
    }
}

/// Immutable reference corpus
#[derive(Debug, Clone)]
pub struct ReferenceLibrary {
    items: Vec<ReferenceItem>,
}

impl ReferenceLibrary {
    pub fn embedded() -> HubResult<Self> {
        Self::from_json_str(EMBEDDED_REFERENCES)
    }

    pub fn from_path(path: &Path) -> HubResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| HubError::CorpusIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn load(path: Option<&Path>) -> HubResult<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    pub fn from_json_str(raw: &str) -> HubResult<Self> {
        let items: Vec<ReferenceItem> =
            serde_json::from_str(raw).map_err(|source| HubError::CorpusParse {
                what: "reference",
                source,
            })?;
        Self::new(items)
    }

    /// Build a library, rejecting duplicate ids.
    pub fn new(items: Vec<ReferenceItem>) -> HubResult<Self> {
        let mut seen = FxHashSet::default();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(HubError::DuplicateReference(item.id.clone()));
            }
        }
        tracing::info!("Loaded reference corpus: {} entries", items.len());
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ReferenceItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// References for a topic, optionally narrowed to one standard.
    pub fn for_topic(&self, topic_id: &str, standard: Option<ReferenceStandard>) -> Vec<&ReferenceItem> {
        self.items
            .iter()
            .filter(|r| r.topic_id == topic_id && standard.map_or(true, |s| r.standard_id == s))
            .collect()
    }

    /// Substring search over title, description, topic, standard, type and category.
    pub fn search(&self, query: &str) -> Vec<&ReferenceItem> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&q)
                    || r.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&q))
                    || r.topic_id.to_lowercase().contains(&q)
                    || r.standard_id.as_str().contains(&q)
                    || r.kind.as_str().contains(&q)
                    || r.category.is_some_and(|c| c.as_str().contains(&q))
            })
            .collect()
    }

    /// Bibliography filter: optional standard and topic equality, and a
    /// query over title, description and document path. A blank query
    /// keeps every entry that passes the other filters.
    pub fn filter(
        &self,
        query: &str,
        standard: Option<ReferenceStandard>,
        topic_id: Option<&str>,
    ) -> Vec<&ReferenceItem> {
        let q = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|r| standard.map_or(true, |s| r.standard_id == s))
            .filter(|r| topic_id.map_or(true, |t| r.topic_id == t))
            .filter(|r| {
                q.is_empty()
                    || r.title.to_lowercase().contains(&q)
                    || r.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&q))
                    || r.book_path.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// First entry for `topic_id`, or the first entry overall.
    pub fn first_for_topic(&self, topic_id: Option<&str>) -> Option<&ReferenceItem> {
        self.items
            .iter()
            .find(|r| topic_id.map_or(true, |t| r.topic_id == t))
    }

    pub fn by_type(&self, kind: ReferenceType) -> Vec<&ReferenceItem> {
        self.items.iter().filter(|r| r.kind == kind).collect()
    }

    pub fn by_category(&self, category: ReferenceCategory) -> Vec<&ReferenceItem> {
        self.items
            .iter()
            .filter(|r| r.category == Some(category))
            .collect()
    }

    pub fn by_standard(&self, standard: ReferenceStandard) -> Vec<&ReferenceItem> {
        self.items
            .iter()
            .filter(|r| r.standard_id == standard)
            .collect()
    }

    /// Distinct topic ids in first-seen order.
    pub fn all_topic_ids(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.items
            .iter()
            .map(|r| r.topic_id.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn topic_statistics(&self) -> Vec<TopicStatistics> {
        let topics = self.all_topic_ids();
        let mut stats: FxHashMap<&str, TopicStatistics> = topics
            .iter()
            .map(|&t| {
                (
                    t,
                    TopicStatistics {
                        topic_id: t.to_string(),
                        total: 0,
                        pmbok: 0,
                        prince2: 0,
                        iso: 0,
                        general: 0,
                    },
                )
            })
            .collect();

        for item in &self.items {
            if let Some(entry) = stats.get_mut(item.topic_id.as_str()) {
                entry.total += 1;
                match item.standard_id {
                    ReferenceStandard::Pmbok => entry.pmbok += 1,
                    ReferenceStandard::Prince2 => entry.prince2 += 1,
                    ReferenceStandard::Iso => entry.iso += 1,
                    ReferenceStandard::General => entry.general += 1,
                }
            }
        }

        topics
            .into_iter()
            .filter_map(|t| stats.remove(t))
            .collect()
    }
}
