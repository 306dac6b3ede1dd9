//! PDF Export
//!
//! A small block-based writer on top of `lopdf`:
//! - A4 pages, Helvetica (regular and bold) with WinAnsiEncoding
//! - blocks are laid out top-down and wrapped from a glyph-width estimate
//! - a new page starts once the cursor passes the bottom margin
//! - every page carries a rule and the "Generated by PM Standards Hub" footer
//!
//! `PdfFormatter` turns comparisons and recommendations into blocks.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::info;

use crate::comparison::ComparisonResult;
use crate::error::HubResult;
use crate::export::text::{chars_per_line, flatten_markdown, sanitize_winansi, winansi_bytes, wrap_text};
use crate::recommendation::ProjectProfile;
use crate::topics::TopicGuidance;

// ============================================================================
// Page geometry
// ============================================================================

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 40.0;
/// Cursor position (from the top) where content starts on each page
pub const TOP: f32 = 60.0;
/// Content stops once the cursor passes this distance from the bottom
pub const BOTTOM_MARGIN: f32 = 60.0;

pub const FOOTER_TEXT: &str = "Generated by PM Standards Hub";
const FOOTER_Y: f32 = 30.0;
const FOOTER_RULE_Y: f32 = 40.0;

const BLOCK_GAP: f32 = 8.0;

#[derive(Debug, Clone, Copy)]
struct BlockStyle {
    font: &'static str,
    size: f32,
    leading: f32,
    gray: f32,
}

const HEADING: BlockStyle = BlockStyle { font: "F2", size: 14.0, leading: 20.0, gray: 0.07 };
const BODY: BlockStyle = BlockStyle { font: "F1", size: 11.0, leading: 16.0, gray: 0.13 };
const META: BlockStyle = BlockStyle { font: "F1", size: 9.0, leading: 13.0, gray: 0.4 };
const FOOTER: BlockStyle = BlockStyle { font: "F1", size: 9.0, leading: 13.0, gray: 0.47 };

// ============================================================================
// Document model
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PdfBlock {
    Heading(String),
    Body(String),
    Meta(String),
    Rule,
}

/// Ordered blocks plus a document title for the info dictionary
#[derive(Debug, Clone, PartialEq)]
pub struct PdfDocument {
    pub title: String,
    pub blocks: Vec<PdfBlock>,
}

impl PdfDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(PdfBlock::Heading(text.into()));
        self
    }

    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(PdfBlock::Body(text.into()));
        self
    }

    pub fn meta(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(PdfBlock::Meta(text.into()));
        self
    }

    pub fn rule(&mut self) -> &mut Self {
        self.blocks.push(PdfBlock::Rule);
        self
    }

    /// Lay out and encode the document.
    pub fn render(&self) -> HubResult<Vec<u8>> {
        let pages = self.layout();
        let bytes = encode(&self.title, pages)?;
        info!("Rendered PDF '{}' ({} bytes)", self.title, bytes.len());
        Ok(bytes)
    }

    fn layout(&self) -> Vec<Vec<Operation>> {
        let mut layout = Layout::new();
        let usable_width = PAGE_WIDTH - 2.0 * MARGIN;

        for block in &self.blocks {
            match block {
                PdfBlock::Heading(text) => layout.text_block(text, HEADING, usable_width),
                PdfBlock::Body(text) => layout.text_block(text, BODY, usable_width),
                PdfBlock::Meta(text) => layout.text_block(text, META, usable_width),
                PdfBlock::Rule => layout.rule(),
            }
        }

        layout.finish()
    }
}

// ============================================================================
// Layout
// ============================================================================

struct Layout {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    /// Distance from the top of the page
    cursor: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            cursor: TOP,
        }
    }

    fn ensure_room(&mut self) {
        if self.cursor > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let mut ops = std::mem::take(&mut self.current);
        ops.extend(footer_ops());
        self.pages.push(ops);
        self.cursor = TOP;
    }

    fn text_block(&mut self, text: &str, style: BlockStyle, width: f32) {
        let clean = sanitize_winansi(text);
        let max_chars = chars_per_line(style.size, width);

        for line in wrap_text(&clean, max_chars) {
            self.ensure_room();
            self.current
                .extend(text_ops(&line, style, MARGIN, PAGE_HEIGHT - self.cursor));
            self.cursor += style.leading;
        }
        self.cursor += BLOCK_GAP;
    }

    fn rule(&mut self) {
        self.ensure_room();
        let y = PAGE_HEIGHT - self.cursor + BODY.leading / 2.0;
        self.current
            .extend(line_ops(MARGIN, y, PAGE_WIDTH - MARGIN, 0.85));
        self.cursor += BLOCK_GAP;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

fn text_ops(text: &str, style: BlockStyle, x: f32, y: f32) -> Vec<Operation> {
    vec![
        Operation::new("rg", vec![Object::Real(style.gray), Object::Real(style.gray), Object::Real(style.gray)]),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![Object::Name(style.font.as_bytes().to_vec()), Object::Real(style.size)]),
        Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
        Operation::new("Tj", vec![Object::String(winansi_bytes(text), StringFormat::Literal)]),
        Operation::new("ET", vec![]),
    ]
}

fn line_ops(x1: f32, y: f32, x2: f32, gray: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![Object::Real(gray), Object::Real(gray), Object::Real(gray)]),
        Operation::new("w", vec![Object::Real(0.75)]),
        Operation::new("m", vec![Object::Real(x1), Object::Real(y)]),
        Operation::new("l", vec![Object::Real(x2), Object::Real(y)]),
        Operation::new("S", vec![]),
    ]
}

fn footer_ops() -> Vec<Operation> {
    let mut ops = line_ops(MARGIN, FOOTER_RULE_Y, PAGE_WIDTH - MARGIN, 0.9);
    ops.extend(text_ops(FOOTER_TEXT, FOOTER, MARGIN, FOOTER_Y));
    ops
}

fn encode(title: &str, pages: Vec<Vec<Operation>>) -> HubResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(winansi_bytes(&sanitize_winansi(title)), StringFormat::Literal),
        "Producer" => Object::string_literal("PM Standards Hub"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(lopdf::Error::from)?;
    Ok(bytes)
}

// ============================================================================
// Formatters
// ============================================================================

/// Builds PDF documents for the hub's exportable views
pub struct PdfFormatter;

impl PdfFormatter {
    pub fn comparison(
        result: &ComparisonResult,
        guidance: &TopicGuidance,
        generated_at: DateTime<Utc>,
    ) -> PdfDocument {
        let mut doc = PdfDocument::new(format!("Comparison: {}", result.topic));
        doc.heading(format!("Comparison: {}", result.topic));

        let labels: Vec<&str> = result.selected.iter().map(|id| id.label()).collect();
        doc.meta(format!(
            "Standards: {}    Generated: {}",
            labels.join(", "),
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        doc.rule();

        for (id, view) in result.views() {
            doc.heading(format!("{}: {}", id.label(), view.title));
            doc.body(view.content.as_str());
            for point in &view.key_points {
                doc.body(format!("  - {}", point));
            }
        }

        doc.heading("Similarities");
        numbered(&mut doc, &result.analysis.similarities);

        doc.heading("Differences");
        numbered(&mut doc, &result.analysis.differences);

        doc.heading("Unique Points");
        if result.analysis.unique_points.is_empty() {
            doc.body("None identified");
        }
        for unique in &result.analysis.unique_points {
            doc.body(format!("{}:", unique.standard.label()));
            for point in &unique.points {
                doc.body(format!("  - {}", point));
            }
        }

        doc.heading("Recommendations");
        doc.body(format!("When to Use: {}", guidance.when_to_use));
        doc.body(format!("Best Method: {}", guidance.best_method));

        doc
    }

    pub fn recommendation(profile: &ProjectProfile, text: &str) -> PdfDocument {
        let mut doc = PdfDocument::new("Tailored Process Recommendation");
        doc.heading("PM Standards Hub - Tailored Process Recommendation");
        doc.meta(profile.summary_line());
        doc.rule();
        for paragraph in flatten_markdown(text) {
            doc.body(paragraph);
        }
        doc
    }
}

fn numbered(doc: &mut PdfDocument, items: &[String]) {
    if items.is_empty() {
        doc.body("None identified");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        doc.body(format!("{}. {}", i + 1, item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_strings(bytes: &[u8]) -> Vec<Vec<String>> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|page_id| {
                let raw = doc.get_page_content(*page_id).unwrap();
                Content::decode(&raw)
                    .unwrap()
                    .operations
                    .into_iter()
                    .filter(|op| op.operator == "Tj")
                    .filter_map(|op| match op.operands.first() {
                        Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_single_page_has_footer() {
        let mut doc = PdfDocument::new("Test");
        doc.heading("Heading").body("Body text").rule().meta("meta");
        let bytes = doc.render().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let pages = page_strings(&bytes);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].first().map(String::as_str), Some("Heading"));
        assert!(pages[0].contains(&FOOTER_TEXT.to_string()));
    }

    #[test]
    fn test_long_document_paginates() {
        let mut doc = PdfDocument::new("Long");
        for i in 0..120 {
            doc.body(format!("Paragraph {}", i));
        }
        let pages = page_strings(&doc.render().unwrap());
        assert!(pages.len() > 1);
        for page in &pages {
            assert_eq!(page.last().map(String::as_str), Some(FOOTER_TEXT));
        }
        let all: Vec<&String> = pages.iter().flatten().collect();
        assert!(all.iter().any(|s| s.as_str() == "Paragraph 119"));
    }

    #[test]
    fn test_empty_document_still_has_a_page() {
        let pages = page_strings(&PdfDocument::new("Empty").render().unwrap());
        assert_eq!(pages, vec![vec![FOOTER_TEXT.to_string()]]);
    }

    #[test]
    fn test_text_is_sanitized() {
        let mut doc = PdfDocument::new("Sanitize");
        doc.body("🔹 Plan \u{2014} now");
        let pages = page_strings(&doc.render().unwrap());
        assert_eq!(pages[0][0], "Plan - now");
    }

    #[test]
    fn test_recommendation_blocks_flatten_markdown() {
        let profile = ProjectProfile::parse("software", "short", "low").unwrap();
        let doc = PdfFormatter::recommendation(&profile, "Intro\n\n**Bold** text");
        assert_eq!(
            doc.blocks[3..].to_vec(),
            vec![PdfBlock::Body("Intro".into()), PdfBlock::Body("Bold text".into())]
        );
    }
}
