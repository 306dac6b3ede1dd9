//! Topic comparison across standards
//!
//! Comparison is all-or-nothing: every selected standard must define the
//! topic or no result is produced.

use std::collections::BTreeMap;

use tracing::debug;

use crate::comparison::analysis::analyze;
use crate::comparison::types::{ComparisonResult, StandardView};
use crate::data::{StandardId, StandardsCorpus};

/// Compare `topic_id` across `selection`.
///
/// An empty selection means all three standards. Repeated ids collapse to
/// their first occurrence.
pub fn compare(corpus: &StandardsCorpus, topic_id: &str, selection: &[StandardId]) -> Option<ComparisonResult> {
    let selected = normalize_selection(selection);

    let mut standards = BTreeMap::new();
    for id in &selected {
        let Some(section) = corpus.section(*id, topic_id) else {
            debug!("Topic '{}' not covered by {}", topic_id, id);
            return None;
        };
        standards.insert(*id, StandardView::from(section));
    }

    let topic = corpus
        .section(StandardId::Pmbok, topic_id)
        .map(|s| s.title.clone())
        .or_else(|| selected.first().and_then(|id| standards.get(id)).map(|v| v.title.clone()))?;

    let compared: Vec<(StandardId, &StandardView)> = selected
        .iter()
        .filter_map(|id| standards.get(id).map(|v| (*id, v)))
        .collect();
    let analysis = analyze(&compared);

    Some(ComparisonResult {
        topic,
        topic_id: topic_id.to_string(),
        selected,
        standards,
        analysis,
    })
}

/// Compare using raw standard ids. Unknown ids yield `None`.
pub fn compare_ids<S: AsRef<str>>(corpus: &StandardsCorpus, topic_id: &str, ids: &[S]) -> Option<ComparisonResult> {
    let selection = match StandardId::parse_list(ids) {
        Ok(selection) => selection,
        Err(e) => {
            debug!("Comparison skipped: {}", e);
            return None;
        }
    };
    compare(corpus, topic_id, &selection)
}

fn normalize_selection(selection: &[StandardId]) -> Vec<StandardId> {
    if selection.is_empty() {
        return StandardId::ALL.to_vec();
    }
    let mut out = Vec::with_capacity(selection.len());
    for id in selection {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}
