//! PM Standards Hub
//!
//! Search, comparison and export over three project management standards
//! (PMBOK 7, PRINCE2, ISO 21502), plus a bibliography that links topics to
//! pages in the source documents.
//!
//! Modules:
//! - `data`: standards corpus and the `StandardId` set
//! - `search_index`: keyword search with relevance scoring
//! - `comparison`: topic comparison and heuristic analysis
//! - `references`: bibliography lookup and document links
//! - `topics`: topic catalogue, suggestions and usage guidance
//! - `recommendation`: tailored process recommendation text
//! - `export`: Markdown, JSON and PDF output
//! - `session`: explicit search state for front ends
//! - `hub`: facade bundling the corpora with configuration
//!
//! Everything is synchronous and pure over immutable corpora.

pub mod comparison;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod hub;
pub mod recommendation;
pub mod references;
pub mod search_index;
pub mod session;
pub mod topics;
pub mod utils;

// Re-export commonly used types
pub use comparison::{compare, compare_ids, ComparisonAnalysis, ComparisonResult, SimilarityMetrics, StandardView, UniquePoints};
pub use config::HubConfig;
pub use data::{Standard, StandardId, StandardSection, StandardsCorpus};
pub use error::{HubError, HubResult};
pub use export::{ExportFormat, JsonFormatter, MarkdownFormatter, PdfDocument, PdfFormatter};
pub use hub::StandardsHub;
pub use recommendation::{generate_recommendation, Duration, ProjectProfile, ProjectType, RiskLevel};
pub use references::{build_document_link, ReferenceItem, ReferenceLibrary, ReferenceStandard};
pub use search_index::{search, SearchHit};
pub use session::SearchSession;
pub use topics::{topic_guidance, Topic, TopicGuidance};
