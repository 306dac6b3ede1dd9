//! Standards Corpus Loading
//!
//! Loads the PMBOK 7 / PRINCE2 / ISO 21502 section corpus from JSON.
//! The shipped corpus is embedded at compile time (`data/standards.json`);
//! a replacement file can be supplied through configuration.
//!
//! Section declaration order is preserved: it drives search encounter order
//! and topic listing order.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};

const EMBEDDED_STANDARDS: &str = include_str!("../data/standards.json");

// ============================================================================
// Standard identifiers
// ============================================================================

/// Closed set of standards held in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardId {
    Pmbok,
    Prince2,
    Iso,
}

impl StandardId {
    /// Every standard, in canonical order.
    pub const ALL: [StandardId; 3] = [StandardId::Pmbok, StandardId::Prince2, StandardId::Iso];

    pub fn as_str(self) -> &'static str {
        match self {
            StandardId::Pmbok => "pmbok",
            StandardId::Prince2 => "prince2",
            StandardId::Iso => "iso",
        }
    }

    /// Short label used in exported documents.
    pub fn label(self) -> &'static str {
        match self {
            StandardId::Pmbok => "PMBOK 7",
            StandardId::Prince2 => "PRINCE2",
            StandardId::Iso => "ISO 21502",
        }
    }

    fn index(self) -> usize {
        match self {
            StandardId::Pmbok => 0,
            StandardId::Prince2 => 1,
            StandardId::Iso => 2,
        }
    }

    /// Parse a list of raw ids, rejecting the first unknown one.
    pub fn parse_list<S: AsRef<str>>(ids: &[S]) -> HubResult<Vec<StandardId>> {
        ids.iter().map(|id| id.as_ref().parse()).collect()
    }
}

impl FromStr for StandardId {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pmbok" => Ok(StandardId::Pmbok),
            "prince2" => Ok(StandardId::Prince2),
            "iso" => Ok(StandardId::Iso),
            _ => Err(HubError::UnknownStandard(s.to_string())),
        }
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Sections and standards
// ============================================================================

/// One topic as covered by one standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardSection {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub practices: Vec<String>,
}

/// A loaded standard with its sections in declaration order.
#[derive(Debug, Clone)]
pub struct Standard {
    pub id: StandardId,
    pub name: String,
    sections: Vec<StandardSection>,
    /// Section id -> position in `sections`
    index: FxHashMap<String, usize>,
}

impl Standard {
    fn new(id: StandardId, name: String, sections: Vec<StandardSection>) -> HubResult<Self> {
        let mut index = FxHashMap::default();
        for (pos, section) in sections.iter().enumerate() {
            if index.insert(section.id.clone(), pos).is_some() {
                return Err(HubError::DuplicateSection {
                    standard: id.to_string(),
                    section: section.id.clone(),
                });
            }
        }
        Ok(Self { id, name, sections, index })
    }

    pub fn section(&self, section_id: &str) -> Option<&StandardSection> {
        self.index.get(section_id).map(|&pos| &self.sections[pos])
    }

    pub fn covers(&self, section_id: &str) -> bool {
        self.index.contains_key(section_id)
    }

    pub fn sections(&self) -> &[StandardSection] {
        &self.sections
    }
}

#[derive(Deserialize)]
struct StandardsFile {
    standards: Vec<RawStandard>,
}

#[derive(Deserialize)]
struct RawStandard {
    id: String,
    name: String,
    sections: Vec<StandardSection>,
}

// ============================================================================
// Corpus
// ============================================================================

/// Immutable standards corpus, one entry per `StandardId`.
#[derive(Debug, Clone)]
pub struct StandardsCorpus {
    /// Indexed by `StandardId::index`
    standards: Vec<Standard>,
}

impl StandardsCorpus {
    /// Load the corpus compiled into the crate.
    pub fn embedded() -> HubResult<Self> {
        Self::from_json_str(EMBEDDED_STANDARDS)
    }

    /// Load from a JSON file on disk.
    pub fn from_path(path: &Path) -> HubResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| HubError::CorpusIo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Read standards corpus from {}", path.display());
        Self::from_json_str(&raw)
    }

    /// Load from `path` when given, otherwise the embedded corpus.
    pub fn load(path: Option<&Path>) -> HubResult<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    pub fn from_json_str(raw: &str) -> HubResult<Self> {
        let file: StandardsFile = serde_json::from_str(raw).map_err(|source| HubError::CorpusParse {
            what: "standards",
            source,
        })?;

        let mut slots: [Option<Standard>; 3] = [None, None, None];
        for raw_std in file.standards {
            let id: StandardId = raw_std.id.parse()?;
            let slot = &mut slots[id.index()];
            if slot.is_some() {
                return Err(HubError::DuplicateStandard(id.to_string()));
            }
            *slot = Some(Standard::new(id, raw_std.name, raw_std.sections)?);
        }

        let mut standards = Vec::with_capacity(3);
        for (id, slot) in StandardId::ALL.iter().zip(slots) {
            standards.push(slot.ok_or_else(|| HubError::MissingStandard(id.to_string()))?);
        }

        let corpus = Self { standards };
        tracing::info!(
            "Loaded standards corpus: {} standards, {} sections",
            corpus.standards.len(),
            corpus.section_count()
        );
        Ok(corpus)
    }

    pub fn standard(&self, id: StandardId) -> &Standard {
        &self.standards[id.index()]
    }

    pub fn section(&self, id: StandardId, section_id: &str) -> Option<&StandardSection> {
        self.standard(id).section(section_id)
    }

    /// Standards in canonical order (pmbok, prince2, iso).
    pub fn iter(&self) -> impl Iterator<Item = &Standard> {
        self.standards.iter()
    }

    pub fn section_count(&self) -> usize {
        self.standards.iter().map(|s| s.sections.len()).sum()
    }
}
