//! Export Integration Tests
//!
//! Renders comparisons and recommendations in every format, writes them to a
//! temporary directory and reads the PDFs back with lopdf.

use chrono::{TimeZone, Utc};
use lopdf::content::Content;
use lopdf::{Document, Object};
use pm_standards_hub::export::pdf::FOOTER_TEXT;
use pm_standards_hub::export::{
    comparison_file_name, recommendation_file_name, render_comparison, render_recommendation, write_artifact,
};
use pm_standards_hub::{ExportFormat, ProjectProfile, StandardsHub};
use tempfile::TempDir;

fn pdf_text(bytes: &[u8]) -> (usize, Vec<String>) {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    let mut strings = Vec::new();
    for page_id in pages.values() {
        let content = Content::decode(&doc.get_page_content(*page_id).unwrap()).unwrap();
        for op in content.operations {
            if op.operator == "Tj" {
                if let Some(Object::String(raw, _)) = op.operands.first() {
                    strings.push(String::from_utf8_lossy(raw).into_owned());
                }
            }
        }
    }
    (pages.len(), strings)
}

#[test]
fn test_comparison_pdf_written_and_readable() {
    let hub = StandardsHub::embedded().unwrap();
    let result = hub.compare("stakeholder-engagement", &[]).unwrap();
    let bytes = render_comparison(&result, ExportFormat::Pdf, Utc::now()).unwrap();

    let dir = TempDir::new().unwrap();
    let name = comparison_file_name("stakeholder-engagement", ExportFormat::Pdf);
    let path = write_artifact(dir.path(), &name, &bytes).unwrap();
    assert_eq!(path.file_name().unwrap(), "comparison-stakeholder-engagement.pdf");
    assert_eq!(std::fs::read(&path).unwrap(), bytes);

    let (pages, text) = pdf_text(&bytes);
    assert!(pages >= 1);
    assert_eq!(text[0], format!("Comparison: {}", result.topic));
    assert!(text.iter().any(|s| s == "Similarities"));
    assert!(text.iter().any(|s| s == "Recommendations"));
    assert_eq!(text.iter().filter(|s| s.as_str() == FOOTER_TEXT).count(), pages);
}

#[test]
fn test_recommendation_pdf_is_plain_text() {
    let profile = ProjectProfile::parse("software", "short", "high").unwrap();
    let bytes = render_recommendation(&profile, ExportFormat::Pdf, Utc::now()).unwrap();
    let (_, text) = pdf_text(&bytes);

    assert!(text.iter().any(|s| s.starts_with("Based on your project profile:")));
    assert!(text.iter().any(|s| s.contains("PMBOK 7 Adaptive Approach")));
    for s in &text {
        assert!(!s.contains("**"), "markdown left in {:?}", s);
        assert!(s.is_ascii(), "non-ascii text {:?}", s);
    }
}

#[test]
fn test_markdown_and_json_exports() {
    let hub = StandardsHub::embedded().unwrap();
    let result = hub.compare("risk-issues", &[]).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 0).unwrap();

    let md = String::from_utf8(render_comparison(&result, ExportFormat::Markdown, at).unwrap()).unwrap();
    assert!(md.contains("## Unique Points"));
    assert!(md.contains("2025-01-02 03:04 UTC"));

    let json = render_comparison(&result, ExportFormat::Json, at).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["topicId"], "risk-issues");
    assert_eq!(value["selected"], serde_json::json!(["pmbok", "prince2", "iso"]));
    assert_eq!(
        value["recommendations"]["bestMethod"],
        "PMBOK for holistic uncertainty management"
    );
    assert!(value["standards"]["prince2"]["keyPoints"].is_array());
}

#[test]
fn test_recommendation_exports_to_dir() {
    let profile = ProjectProfile::parse("marketing", "medium", "low").unwrap();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested");

    for format in [ExportFormat::Markdown, ExportFormat::Json, ExportFormat::Pdf] {
        let bytes = render_recommendation(&profile, format, Utc::now()).unwrap();
        let path = write_artifact(&out, &recommendation_file_name(format), &bytes).unwrap();
        assert!(path.exists());
    }
    assert!(out.join("pm-process-recommendation.pdf").exists());
    assert!(out.join("pm-process-recommendation.md").exists());
}
