//! Topic Catalogue
//!
//! Lists the comparable topics in the corpus, suggests topics for a partial
//! query, and carries the per-topic usage guidance shown alongside a
//! comparison.

use serde::Serialize;

use crate::data::{StandardId, StandardsCorpus};
use crate::utils::{contains_folded, fold};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
}

/// Every PMBOK section, in declaration order
pub fn topics(corpus: &StandardsCorpus) -> Vec<Topic> {
    corpus
        .standard(StandardId::Pmbok)
        .sections()
        .iter()
        .map(|s| Topic {
            id: s.id.clone(),
            title: s.title.clone(),
        })
        .collect()
}

/// Union of all standards' sections, first-seen order
pub fn all_topics(corpus: &StandardsCorpus) -> Vec<Topic> {
    let mut out: Vec<Topic> = Vec::new();
    for standard in corpus.iter() {
        for section in standard.sections() {
            if !out.iter().any(|t| t.id == section.id) {
                out.push(Topic {
                    id: section.id.clone(),
                    title: section.title.clone(),
                });
            }
        }
    }
    out
}

/// Topics that every standard defines, i.e. those comparable with the default selection
pub fn common_topics(corpus: &StandardsCorpus) -> Vec<Topic> {
    all_topics(corpus)
        .into_iter()
        .filter(|t| corpus.iter().all(|s| s.covers(&t.id)))
        .collect()
}

/// Titles starting with the query first, then titles containing it elsewhere.
pub fn suggest_topics(corpus: &StandardsCorpus, query: &str, limit: usize) -> Vec<Topic> {
    let q = fold(query.trim());
    if q.is_empty() {
        return Vec::new();
    }

    let (prefixed, rest): (Vec<Topic>, Vec<Topic>) = all_topics(corpus)
        .into_iter()
        .filter(|t| contains_folded(&t.title, &q))
        .partition(|t| fold(&t.title).starts_with(&q));

    prefixed.into_iter().chain(rest).take(limit).collect()
}

// ============================================================================
// Guidance
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicGuidance {
    pub when_to_use: &'static str,
    pub best_method: &'static str,
}

const FALLBACK_GUIDANCE: TopicGuidance = TopicGuidance {
    when_to_use: "Select appropriate standard based on project context and requirements",
    best_method: "Hybrid approach recommended for balanced coverage",
};

static GUIDANCE: &[(&str, TopicGuidance)] = &[
    ("governance-leadership", TopicGuidance {
        when_to_use: "Use PMBOK for value-focused leadership in adaptive environments; PRINCE2 for structured control in high-risk projects; ISO for governance in standardized settings",
        best_method: "Hybrid PRINCE2-PMBOK for balanced oversight",
    }),
    ("stakeholder-engagement", TopicGuidance {
        when_to_use: "Use PMBOK for adaptive, matrix-based engagement in dynamic projects; PRINCE2 for analytics-driven monitoring; ISO for structured identification in standardized environments",
        best_method: "PMBOK for comprehensive stakeholder analysis",
    }),
    ("business-case-benefits", TopicGuidance {
        when_to_use: "Use PMBOK for value-focused projects in adaptive contexts; PRINCE2 for structured justification in controlled environments; ISO for benefits tracking in standardized settings",
        best_method: "PRINCE2 for consistent business case management",
    }),
    ("planning-scope", TopicGuidance {
        when_to_use: "Use PMBOK for adaptive planning in complex projects; PRINCE2 for product-focused planning in structured settings; ISO for standardized scope control",
        best_method: "PRINCE2 for detailed product planning",
    }),
    ("risk-issues", TopicGuidance {
        when_to_use: "Use PMBOK for comprehensive risk-opportunity management in adaptive projects; PRINCE2 for structured risk/issue separation; ISO for standardized risk treatment",
        best_method: "PMBOK for holistic uncertainty management",
    }),
    ("quality-management", TopicGuidance {
        when_to_use: "Use PMBOK for process-integrated quality in adaptive projects; PRINCE2 for product-specific quality control; ISO for standardized quality assurance",
        best_method: "PRINCE2 for detailed quality tracking",
    }),
    ("change-management", TopicGuidance {
        when_to_use: "Use PMBOK for change-driven adaptive projects; PRINCE2 for integrated change control in structured settings; ISO for standardized change processes",
        best_method: "ISO for formal control frameworks",
    }),
    ("resource-team-management", TopicGuidance {
        when_to_use: "Use PMBOK for leadership-focused teams in adaptive projects; PRINCE2 for structured resource allocation; ISO for detailed resource planning",
        best_method: "PMBOK for team dynamics",
    }),
    ("communication-reporting", TopicGuidance {
        when_to_use: "Use PMBOK for measurement-linked communication in adaptive projects; PRINCE2 for stakeholder-focused reporting; ISO for structured information flow",
        best_method: "ISO for comprehensive communication management",
    }),
    ("performance-measurement", TopicGuidance {
        when_to_use: "Use PMBOK for KPI-driven monitoring in adaptive projects; PRINCE2 for tolerance-based control; ISO for integrated performance management",
        best_method: "PMBOK for detailed metrics",
    }),
    ("tailoring-adaptability", TopicGuidance {
        when_to_use: "Use PMBOK for adaptive tailoring in dynamic projects; PRINCE2 for method-specific adjustments; ISO for life cycle-focused tailoring",
        best_method: "PMBOK for flexible adaptation",
    }),
    ("lessons-learned", TopicGuidance {
        when_to_use: "Use PMBOK for ongoing learning in adaptive projects; PRINCE2 for structured lesson capture; ISO for organizational dissemination",
        best_method: "PRINCE2 for systematic improvement",
    }),
    ("procurement-contracting", TopicGuidance {
        when_to_use: "Use PMBOK with supplementary tools for basic procurement; PRINCE2 for integrated planning; ISO for detailed procurement management",
        best_method: "ISO for comprehensive guidance",
    }),
    ("sustainability-digital", TopicGuidance {
        when_to_use: "Use PMBOK for ethical sustainability focus; PRINCE2 for digital-sustainability integration; ISO with supplementary guidelines",
        best_method: "PRINCE2 for updated relevance",
    }),
    ("agile-hybrid", TopicGuidance {
        when_to_use: "Use PMBOK for diverse method selection; PRINCE2 for structured agile integration; ISO with adaptive tailoring",
        best_method: "PRINCE2 for agile-specific guidance",
    }),
];

/// Usage guidance for a topic; unknown topics get a generic answer.
pub fn topic_guidance(topic_id: &str) -> TopicGuidance {
    GUIDANCE
        .iter()
        .find(|(id, _)| *id == topic_id)
        .map(|(_, g)| *g)
        .unwrap_or(FALLBACK_GUIDANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> StandardsCorpus {
        StandardsCorpus::embedded().unwrap()
    }

    #[test]
    fn test_topics_follow_pmbok_order() {
        let ids: Vec<String> = topics(&corpus()).into_iter().map(|t| t.id).collect();
        assert_eq!(ids.first().map(String::as_str), Some("governance-leadership"));
        assert_eq!(ids.last().map(String::as_str), Some("tailoring-adaptability"));
    }

    #[test]
    fn test_common_topics_exclude_partial_coverage() {
        let c = corpus();
        let common: Vec<String> = common_topics(&c).into_iter().map(|t| t.id).collect();
        assert!(!common.contains(&"tailoring-adaptability".to_string()));
        assert!(common.contains(&"risk-issues".to_string()));
        assert_eq!(common.len() + 1, all_topics(&c).len());
    }

    #[test]
    fn test_suggestions_prefix_first() {
        let c = corpus();
        let all = all_topics(&c);
        let titles: Vec<String> = suggest_topics(&c, "management", 12).into_iter().map(|t| t.title).collect();
        let expected_first = all
            .iter()
            .find(|t| fold(&t.title).starts_with("management"))
            .map(|t| t.title.clone());
        if let Some(first) = expected_first {
            assert_eq!(titles[0], first);
        }
        for t in &titles {
            assert!(fold(t).contains("management"));
        }
    }

    #[test]
    fn test_suggestions_blank_and_limit() {
        let c = corpus();
        assert!(suggest_topics(&c, "  ", 12).is_empty());
        assert!(suggest_topics(&c, "a", 2).len() <= 2);
    }

    #[test]
    fn test_guidance_fallback() {
        assert_eq!(topic_guidance("risk-issues").best_method, "PMBOK for holistic uncertainty management");
        assert_eq!(topic_guidance("unknown"), FALLBACK_GUIDANCE);
    }
}
