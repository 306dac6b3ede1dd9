use serde::Serialize;

use crate::comparison::types::ComparisonAnalysis;

/// Counts and shares of the three analysis outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityMetrics {
    pub similarity_count: usize,
    pub difference_count: usize,
    pub unique_count: usize,
    pub similarity_percentage: u32,
    pub difference_percentage: u32,
    pub unique_percentage: u32,
}

impl SimilarityMetrics {
    pub fn from_analysis(analysis: &ComparisonAnalysis) -> Self {
        let similarity_count = analysis.similarities.len();
        let difference_count = analysis.differences.len();
        let unique_count: usize = analysis.unique_points.iter().map(|u| u.points.len()).sum();
        let total = similarity_count + difference_count + unique_count;

        Self {
            similarity_count,
            difference_count,
            unique_count,
            similarity_percentage: percentage(similarity_count, total),
            difference_percentage: percentage(difference_count, total),
            unique_percentage: percentage(unique_count, total),
        }
    }

    pub fn total(&self) -> usize {
        self.similarity_count + self.difference_count + self.unique_count
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}
