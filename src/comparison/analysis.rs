//! Heuristic analysis of compared sections
//!
//! Works on the selected standards' views in selection order. The rules
//! themselves come from `heuristics`.

use crate::comparison::heuristics::{
    framework_keyword, framework_sentence, similarity_sentence, DifferenceCheck, DIFFERENCE_RULES,
    MAX_SIMILARITIES, MAX_UNIQUE_POINTS, SIMILARITY_KEYWORDS,
};
use crate::comparison::types::{ComparisonAnalysis, StandardView, UniquePoints};
use crate::data::StandardId;
use crate::utils::{contains_folded, fold, significant_words};

/// Run all three analyses.
pub fn analyze(compared: &[(StandardId, &StandardView)]) -> ComparisonAnalysis {
    let mut unique_points = Vec::new();
    for (standard, _) in compared {
        let points = find_unique_points(*standard, compared);
        if !points.is_empty() {
            unique_points.push(UniquePoints {
                standard: *standard,
                points,
            });
        }
    }

    ComparisonAnalysis {
        similarities: find_common_themes(compared),
        differences: find_differences(compared),
        unique_points,
    }
}

/// Keywords present in at least one key point or practice of every standard.
pub fn find_common_themes(compared: &[(StandardId, &StandardView)]) -> Vec<String> {
    // Fold every standard's points once
    let folded: Vec<Vec<String>> = compared
        .iter()
        .map(|(_, view)| {
            view.key_points
                .iter()
                .chain(&view.practices)
                .map(|p| fold(p))
                .collect()
        })
        .collect();

    SIMILARITY_KEYWORDS
        .iter()
        .filter(|kw| {
            folded
                .iter()
                .all(|points| points.iter().any(|p| p.contains(*kw)))
        })
        .take(MAX_SIMILARITIES)
        .map(|kw| similarity_sentence(kw))
        .collect()
}

/// Contrasting approaches found in the selected standards' content.
pub fn find_differences(compared: &[(StandardId, &StandardView)]) -> Vec<String> {
    let contents: Vec<String> = compared.iter().map(|(_, v)| fold(&v.content)).collect();

    DIFFERENCE_RULES
        .iter()
        .filter(|rule| match rule.check {
            DifferenceCheck::Contrast { first, second } => {
                contents.iter().any(|c| mentions_any(c, first))
                    && contents.iter().any(|c| mentions_any(c, second))
            }
            DifferenceCheck::NotUniversal { terms } => {
                contents.iter().filter(|c| mentions_any(c, terms)).count() < compared.len()
            }
        })
        .map(|rule| rule.sentence.to_string())
        .collect()
}

fn mentions_any(content: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| content.contains(t))
}

/// Up to three points attributable to `standard` alone.
///
/// The framework sentence comes first when the standard's own organizing
/// keyword appears only in its content. Key points follow, in order, when no
/// other standard's key point contains any of their significant words. A key
/// point without significant words is always unique.
pub fn find_unique_points(standard: StandardId, compared: &[(StandardId, &StandardView)]) -> Vec<String> {
    let Some(this) = compared
        .iter()
        .find(|(id, _)| *id == standard)
        .map(|(_, view)| *view)
    else {
        return Vec::new();
    };
    let others: Vec<&StandardView> = compared
        .iter()
        .filter(|(id, _)| *id != standard)
        .map(|(_, view)| *view)
        .collect();

    let mut unique = Vec::with_capacity(MAX_UNIQUE_POINTS);

    let keyword = framework_keyword(standard);
    if contains_folded(&this.content, keyword)
        && !others.iter().any(|o| contains_folded(&o.content, keyword))
    {
        unique.push(framework_sentence(keyword));
    }

    let other_points: Vec<String> = others
        .iter()
        .flat_map(|o| o.key_points.iter().map(|p| fold(p)))
        .collect();

    for point in &this.key_points {
        if unique.len() >= MAX_UNIQUE_POINTS {
            break;
        }
        let words = significant_words(point);
        let shared = other_points
            .iter()
            .any(|other| words.iter().any(|w| other.contains(w.as_str())));
        if !shared {
            unique.push(point.clone());
        }
    }

    unique
}
