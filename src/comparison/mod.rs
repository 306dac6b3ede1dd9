//! Comparison Engine
//!
//! Builds a side-by-side view of one topic across the selected standards and
//! derives heuristic analysis from it:
//! - similarities: shared keywords across key points and practices
//! - differences: contrasting approaches in section content
//! - unique points: framework sentence plus unshared key points

pub mod analysis;
pub mod engine;
pub mod heuristics;
pub mod metrics;
pub mod types;

pub use analysis::{analyze, find_common_themes, find_differences, find_unique_points};
pub use engine::{compare, compare_ids};
pub use metrics::SimilarityMetrics;
pub use types::{ComparisonAnalysis, ComparisonResult, StandardView, UniquePoints};
