//! Utility modules shared across the engines
//!
//! - Text: case folding, substring counting, excerpts, significant words

pub mod text;

// Re-export commonly used helpers
pub use text::{contains_folded, count_folded, excerpt_around, fold, significant_words};
