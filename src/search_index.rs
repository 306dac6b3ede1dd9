//! Keyword Search Across the Standards Corpus
//!
//! Scores every (standard, section) pair against a query:
//! - title contains the query: +10
//! - each non-overlapping occurrence in the content: +2
//! - each key point containing the query: +5
//!
//! Pairs scoring zero are dropped. Results are ordered by descending relevance
//! with ties kept in corpus order (pmbok, prince2, iso; sections as declared).

use serde::Serialize;

use crate::data::{StandardId, StandardsCorpus};
use crate::utils::{contains_folded, count_folded, excerpt_around, fold};

pub const TITLE_MATCH_SCORE: u32 = 10;
pub const CONTENT_MATCH_SCORE: u32 = 2;
pub const KEY_POINT_MATCH_SCORE: u32 = 5;

/// Characters kept ahead of the first match in an excerpt
pub const EXCERPT_BEFORE: usize = 100;
/// Characters kept from the first match onwards
pub const EXCERPT_AFTER: usize = 200;

/// One ranked hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub standard_id: StandardId,
    pub standard_name: String,
    pub section_id: String,
    pub section_title: String,
    pub excerpt: String,
    pub relevance: u32,
}

/// Search the corpus for `query`.
///
/// A blank query yields no hits. Matching uses the query as typed (only
/// lowercased), so surrounding spaces take part in the match.
pub fn search(corpus: &StandardsCorpus, query: &str) -> Vec<SearchHit> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query_folded = fold(query);
    let mut hits = Vec::new();

    for standard in corpus.iter() {
        for section in standard.sections() {
            let mut relevance = 0;

            if contains_folded(&section.title, &query_folded) {
                relevance += TITLE_MATCH_SCORE;
            }

            relevance += CONTENT_MATCH_SCORE * count_folded(&section.content, &query_folded) as u32;

            relevance += KEY_POINT_MATCH_SCORE
                * section
                    .key_points
                    .iter()
                    .filter(|p| contains_folded(p, &query_folded))
                    .count() as u32;

            if relevance == 0 {
                continue;
            }

            hits.push(SearchHit {
                standard_id: standard.id,
                standard_name: standard.name.clone(),
                section_id: section.id.clone(),
                section_title: section.title.clone(),
                excerpt: excerpt_around(&section.content, query, EXCERPT_BEFORE, EXCERPT_AFTER),
                relevance,
            });
        }
    }

    // Stable: equal scores keep corpus order
    hits.sort_by(|a, b| b.relevance.cmp(&a.relevance));

    tracing::debug!("Search '{}' matched {} sections", query, hits.len());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pmbok_sections: &str) -> StandardsCorpus {
        let raw = format!(
            r#"{{"standards": [
                {{"id": "pmbok", "name": "PMBOK", "sections": [{}]}},
                {{"id": "prince2", "name": "PRINCE2", "sections": []}},
                {{"id": "iso", "name": "ISO", "sections": []}}
            ]}}"#,
            pmbok_sections
        );
        StandardsCorpus::from_json_str(&raw).unwrap()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let c = StandardsCorpus::embedded().unwrap();
        assert!(search(&c, "").is_empty());
        assert!(search(&c, "   \t").is_empty());
    }

    #[test]
    fn test_relevance_components() {
        let c = corpus(
            r#"{"id": "s", "title": "Risk", "content": "risk and RISK",
                "keyPoints": ["risk owner", "no match", "Risk appetite"], "practices": ["risk"]}"#,
        );
        let hits = search(&c, "risk");
        assert_eq!(hits.len(), 1);
        // 10 title + 2*2 content + 2*5 key points; practices do not score
        assert_eq!(hits[0].relevance, 24);
    }

    #[test]
    fn test_zero_relevance_excluded() {
        let c = corpus(
            r#"{"id": "s", "title": "Quality", "content": "text", "keyPoints": [], "practices": ["risk"]}"#,
        );
        assert!(search(&c, "risk").is_empty());
    }

    #[test]
    fn test_title_match_outranks_content_match() {
        let c = corpus(
            r#"{"id": "content-only", "title": "Other", "content": "risk", "keyPoints": []},
               {"id": "title", "title": "Risk", "content": "none", "keyPoints": []}"#,
        );
        let hits = search(&c, "risk");
        assert_eq!(hits[0].section_id, "title");
        assert!(hits[0].relevance > hits[1].relevance);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let c = corpus(
            r#"{"id": "first", "title": "A", "content": "plan", "keyPoints": []},
               {"id": "second", "title": "B", "content": "plan", "keyPoints": []}"#,
        );
        let hits = search(&c, "plan");
        let ids: Vec<&str> = hits.iter().map(|h| h.section_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_query_matched_literally() {
        let c = corpus(r#"{"id": "s", "title": "A", "content": "cost (baseline)", "keyPoints": []}"#);
        assert_eq!(search(&c, "(baseline)").len(), 1);
        assert!(search(&c, "cost.*").is_empty());
    }
}
