//! Comparison Integration Tests
//!
//! Runs the comparison engine over the shipped corpus and checks the
//! analysis for topics whose expected output is known.

use pm_standards_hub::comparison::heuristics::{MAX_SIMILARITIES, MAX_UNIQUE_POINTS};
use pm_standards_hub::{compare, compare_ids, SimilarityMetrics, StandardId, StandardsCorpus};
use pretty_assertions::assert_eq;

fn corpus() -> StandardsCorpus {
    StandardsCorpus::embedded().unwrap()
}

fn unique_for(result: &pm_standards_hub::ComparisonResult, id: StandardId) -> Option<Vec<String>> {
    result
        .analysis
        .unique_points
        .iter()
        .find(|u| u.standard == id)
        .map(|u| u.points.clone())
}

#[test]
fn test_stakeholder_engagement_scenario() {
    let result = compare(&corpus(), "stakeholder-engagement", &[]).unwrap();

    assert_eq!(
        result.analysis.similarities,
        vec![
            "All standards emphasize stakeholder as a critical aspect".to_string(),
            "All standards emphasize engagement as a critical aspect".to_string(),
        ]
    );
    assert_eq!(
        result.analysis.differences,
        vec![
            "Some standards emphasize formal procedures while others promote adaptive approaches".to_string(),
            "Documentation requirements vary significantly across standards".to_string(),
        ]
    );
    assert_eq!(
        unique_for(&result, StandardId::Pmbok),
        Some(vec![
            "Uses performance domain as organizational framework".to_string(),
            "Prioritize stakeholders by power, interest and influence".to_string(),
        ])
    );
    assert_eq!(
        unique_for(&result, StandardId::Prince2),
        Some(vec!["Uses theme as organizational framework".to_string()])
    );
    assert_eq!(unique_for(&result, StandardId::Iso), None);
}

#[test]
fn test_governance_fires_all_difference_rules() {
    let result = compare(&corpus(), "governance-leadership", &[]).unwrap();
    assert!(result.analysis.similarities.is_empty());
    assert_eq!(result.analysis.differences.len(), 3);
    assert!(result.analysis.differences[2].starts_with("Governance approaches differ"));
    assert_eq!(
        unique_for(&result, StandardId::Iso),
        Some(vec!["Uses international standard as organizational framework".to_string()])
    );
}

#[test]
fn test_communication_has_no_shared_themes() {
    let result = compare(&corpus(), "communication-reporting", &[]).unwrap();
    assert!(result.analysis.similarities.is_empty());
    assert!(result.analysis.differences.is_empty());
}

#[test]
fn test_risk_unique_points_capped() {
    let result = compare(&corpus(), "risk-issues", &[]).unwrap();
    assert_eq!(
        result.analysis.similarities,
        vec!["All standards emphasize risk as a critical aspect".to_string()]
    );
    assert_eq!(
        unique_for(&result, StandardId::Pmbok),
        Some(vec![
            "Uses performance domain as organizational framework".to_string(),
            "Uncertainty includes both threats and opportunities".to_string(),
            "Resilience and adaptability reduce exposure to volatility".to_string(),
        ])
    );
    assert_eq!(
        unique_for(&result, StandardId::Iso),
        Some(vec![
            "Risk management aligns with ISO 31000".to_string(),
            "Risk treatment decisions are communicated to stakeholders".to_string(),
        ])
    );
}

#[test]
fn test_partial_coverage_is_all_or_nothing() {
    let c = corpus();
    assert!(compare(&c, "tailoring-adaptability", &[]).is_none());
    assert!(compare(&c, "tailoring-adaptability", &[StandardId::Iso]).is_none());

    let pair = compare(&c, "tailoring-adaptability", &[StandardId::Pmbok, StandardId::Prince2]).unwrap();
    assert_eq!(pair.standards.keys().copied().collect::<Vec<_>>(), vec![StandardId::Pmbok, StandardId::Prince2]);
    assert!(pair.analysis.similarities.is_empty());
    assert_eq!(
        pair.analysis.differences,
        vec!["Documentation requirements vary significantly across standards".to_string()]
    );
    assert_eq!(unique_for(&pair, StandardId::Prince2).map(|p| p.len()), Some(3));
}

#[test]
fn test_keys_match_selection_for_every_common_topic() {
    let c = corpus();
    let selections: [&[StandardId]; 4] = [
        &[StandardId::Pmbok],
        &[StandardId::Prince2, StandardId::Iso],
        &[StandardId::Iso, StandardId::Pmbok],
        &StandardId::ALL,
    ];
    for topic in pm_standards_hub::topics::common_topics(&c) {
        for selection in selections {
            let result = compare(&c, &topic.id, selection).unwrap();
            let mut keys: Vec<StandardId> = result.standards.keys().copied().collect();
            let mut expected = selection.to_vec();
            keys.sort();
            expected.sort();
            assert_eq!(keys, expected);
            assert_eq!(result.selected, selection.to_vec());

            assert!(result.analysis.similarities.len() <= MAX_SIMILARITIES);
            for unique in &result.analysis.unique_points {
                assert!(!unique.points.is_empty());
                assert!(unique.points.len() <= MAX_UNIQUE_POINTS);
            }
        }
    }
}

#[test]
fn test_unknown_ids_and_topics() {
    let c = corpus();
    assert!(compare(&c, "", &[]).is_none());
    assert!(compare_ids(&c, "risk-issues", &["pmbok", "scrum"]).is_none());
    assert!(StandardId::parse_list(&["pmbok", "scrum"]).is_err());
}

#[test]
fn test_metrics_for_stakeholder_engagement() {
    let result = compare(&corpus(), "stakeholder-engagement", &[]).unwrap();
    let metrics = SimilarityMetrics::from_analysis(&result.analysis);
    // 2 similarities, 2 differences, 3 unique points
    assert_eq!(metrics.total(), 7);
    assert_eq!(metrics.similarity_percentage, 29);
    assert_eq!(metrics.difference_percentage, 29);
    assert_eq!(metrics.unique_percentage, 43);
}
