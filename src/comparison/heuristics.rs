//! Heuristic Tables for the Comparison Engine
//!
//! Every keyword, sentence template and cap used by the analysis lives here
//! so the rules can be inspected and swapped without touching engine logic.
//!
//! All matching is case-insensitive substring matching; terms are stored
//! lowercase.

use crate::data::StandardId;

// ============================================================================
// Similarities
// ============================================================================

/// Themes checked across key points and practices, in emission order.
pub const SIMILARITY_KEYWORDS: [&str; 10] = [
    "stakeholder",
    "risk",
    "quality",
    "planning",
    "control",
    "monitoring",
    "continuous",
    "engagement",
    "assessment",
    "management",
];

pub const MAX_SIMILARITIES: usize = 5;

pub fn similarity_sentence(keyword: &str) -> String {
    format!("All standards emphasize {} as a critical aspect", keyword)
}

// ============================================================================
// Differences
// ============================================================================

/// How a difference rule inspects the selected standards' content.
#[derive(Debug, Clone, Copy)]
pub enum DifferenceCheck {
    /// Fires when some content contains any of `first` and some content
    /// (possibly the same one) contains any of `second`.
    Contrast {
        first: &'static [&'static str],
        second: &'static [&'static str],
    },
    /// Fires when fewer contents than selected standards contain any of `terms`.
    NotUniversal { terms: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy)]
pub struct DifferenceRule {
    pub name: &'static str,
    pub check: DifferenceCheck,
    pub sentence: &'static str,
}

/// Evaluated in order; each rule contributes at most one sentence.
pub static DIFFERENCE_RULES: &[DifferenceRule] = &[
    DifferenceRule {
        name: "formal_vs_adaptive",
        check: DifferenceCheck::Contrast {
            first: &["formal"],
            second: &["adaptive", "flexible"],
        },
        sentence: "Some standards emphasize formal procedures while others promote adaptive approaches",
    },
    DifferenceRule {
        name: "documentation_emphasis",
        check: DifferenceCheck::NotUniversal {
            terms: &["document", "register"],
        },
        sentence: "Documentation requirements vary significantly across standards",
    },
    DifferenceRule {
        name: "governance_structure",
        check: DifferenceCheck::Contrast {
            first: &["board"],
            second: &["principles"],
        },
        sentence: "Governance approaches differ - some use formal boards while others rely on principles",
    },
];

// ============================================================================
// Unique points
// ============================================================================

pub const MAX_UNIQUE_POINTS: usize = 3;

/// Organizing concept that marks each standard's own framework.
pub fn framework_keyword(standard: StandardId) -> &'static str {
    match standard {
        StandardId::Pmbok => "performance domain",
        StandardId::Prince2 => "theme",
        StandardId::Iso => "international standard",
    }
}

pub fn framework_sentence(keyword: &str) -> String {
    format!("Uses {} as organizational framework", keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for kw in SIMILARITY_KEYWORDS {
            assert_eq!(kw, kw.to_lowercase());
        }
        for rule in DIFFERENCE_RULES {
            let terms: Vec<&str> = match rule.check {
                DifferenceCheck::Contrast { first, second } => first.iter().chain(second).copied().collect(),
                DifferenceCheck::NotUniversal { terms } => terms.to_vec(),
            };
            assert!(terms.iter().all(|t| *t == t.to_lowercase()), "rule {}", rule.name);
        }
        for id in StandardId::ALL {
            let kw = framework_keyword(id);
            assert_eq!(kw, kw.to_lowercase());
        }
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = DIFFERENCE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["formal_vs_adaptive", "documentation_emphasis", "governance_structure"]
        );
    }

    #[test]
    fn test_sentence_templates() {
        assert_eq!(
            similarity_sentence("risk"),
            "All standards emphasize risk as a critical aspect"
        );
        assert_eq!(
            framework_sentence(framework_keyword(StandardId::Prince2)),
            "Uses theme as organizational framework"
        );
    }
}
