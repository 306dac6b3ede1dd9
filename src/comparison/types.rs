use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{StandardId, StandardSection};

/// Result of comparing one topic across a set of standards.
///
/// Derived per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub topic: String,
    pub topic_id: String,
    /// Compared standards in selection order
    pub selected: Vec<StandardId>,
    pub standards: BTreeMap<StandardId, StandardView>,
    pub analysis: ComparisonAnalysis,
}

impl ComparisonResult {
    pub fn view(&self, standard: StandardId) -> Option<&StandardView> {
        self.standards.get(&standard)
    }

    /// Views in selection order
    pub fn views(&self) -> impl Iterator<Item = (StandardId, &StandardView)> {
        self.selected
            .iter()
            .filter_map(|id| self.standards.get(id).map(|v| (*id, v)))
    }
}

/// A standard's section fields, copied verbatim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardView {
    pub title: String,
    pub content: String,
    pub key_points: Vec<String>,
    pub practices: Vec<String>,
}

impl From<&StandardSection> for StandardView {
    fn from(section: &StandardSection) -> Self {
        Self {
            title: section.title.clone(),
            content: section.content.clone(),
            key_points: section.key_points.clone(),
            practices: section.practices.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonAnalysis {
    pub similarities: Vec<String>,
    pub differences: Vec<String>,
    pub unique_points: Vec<UniquePoints>,
}

/// Points attributable to a single standard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniquePoints {
    pub standard: StandardId,
    pub points: Vec<String>,
}
