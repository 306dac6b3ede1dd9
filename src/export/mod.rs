//! Export of comparisons and recommendations
//!
//! Three formats share one entry point per view:
//! - Markdown (`markdown`)
//! - JSON (`json`), pretty or compact
//! - PDF (`pdf`), rendered in memory
//!
//! Rendering returns bytes; `write_artifact` puts them on disk under the
//! fixed file names.

pub mod json;
pub mod markdown;
pub mod pdf;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::comparison::{ComparisonResult, SimilarityMetrics};
use crate::recommendation::{generate_recommendation, ProjectProfile};
use crate::topics::{topic_guidance, TopicGuidance};

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use pdf::{PdfBlock, PdfDocument, PdfFormatter};

pub const RECOMMENDATION_FILE_STEM: &str = "pm-process-recommendation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[value(name = "md")]
    Markdown,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// `comparison-{topic}.{ext}`
pub fn comparison_file_name(topic_id: &str, format: ExportFormat) -> String {
    format!("comparison-{}.{}", topic_id, format.extension())
}

/// `pm-process-recommendation.{ext}`
pub fn recommendation_file_name(format: ExportFormat) -> String {
    format!("{}.{}", RECOMMENDATION_FILE_STEM, format.extension())
}

// ============================================================================
// Serializable payloads
// ============================================================================

/// A comparison with its usage guidance and summary counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport<'a> {
    #[serde(flatten)]
    pub comparison: &'a ComparisonResult,
    pub recommendations: TopicGuidance,
    pub metrics: SimilarityMetrics,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(comparison: &'a ComparisonResult) -> Self {
        Self {
            comparison,
            recommendations: topic_guidance(&comparison.topic_id),
            metrics: SimilarityMetrics::from_analysis(&comparison.analysis),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub profile: ProjectProfile,
    pub recommendation: String,
}

impl RecommendationReport {
    pub fn new(profile: ProjectProfile) -> Self {
        Self {
            recommendation: generate_recommendation(&profile),
            profile,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

pub fn render_comparison(
    result: &ComparisonResult,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let report = ComparisonReport::new(result);
    let bytes = match format {
        ExportFormat::Markdown => {
            MarkdownFormatter::format_comparison(result, &report.recommendations, generated_at).into_bytes()
        }
        ExportFormat::Json => JsonFormatter::format(&report)
            .context("Failed to serialize comparison")?
            .into_bytes(),
        ExportFormat::Pdf => PdfFormatter::comparison(result, &report.recommendations, generated_at)
            .render()
            .with_context(|| format!("Failed to render comparison PDF for '{}'", result.topic_id))?,
    };
    Ok(bytes)
}

pub fn render_recommendation(
    profile: &ProjectProfile,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let report = RecommendationReport::new(*profile);
    let bytes = match format {
        ExportFormat::Markdown => {
            MarkdownFormatter::format_recommendation(profile, &report.recommendation, generated_at).into_bytes()
        }
        ExportFormat::Json => JsonFormatter::format(&report)
            .context("Failed to serialize recommendation")?
            .into_bytes(),
        ExportFormat::Pdf => PdfFormatter::recommendation(profile, &report.recommendation)
            .render()
            .context("Failed to render recommendation PDF")?,
    };
    Ok(bytes)
}

/// Write `bytes` to `dir/file_name`, creating `dir` if needed.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
