//! Error types for corpus loading, parsing boundaries and export.
//!
//! Lookups that simply find nothing (unknown topic, empty query) are not errors;
//! they return `None` or an empty list. Errors here are reserved for malformed
//! input data and failures while producing an artifact.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("failed to read corpus file {path}")]
    CorpusIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what} corpus")]
    CorpusParse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown standard id '{0}' (expected pmbok, prince2 or iso)")]
    UnknownStandard(String),

    #[error("standard '{0}' is defined more than once")]
    DuplicateStandard(String),

    #[error("standard '{0}' is missing from the corpus")]
    MissingStandard(String),

    #[error("section '{section}' is defined more than once in standard '{standard}'")]
    DuplicateSection { standard: String, section: String },

    #[error("reference id '{0}' is defined more than once")]
    DuplicateReference(String),

    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidProfile {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to encode PDF document")]
    Pdf(#[from] lopdf::Error),
}

pub type HubResult<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_standard_message() {
        let err = HubError::UnknownStandard("agile".to_string());
        assert_eq!(
            err.to_string(),
            "unknown standard id 'agile' (expected pmbok, prince2 or iso)"
        );
    }

    #[test]
    fn test_duplicate_section_message() {
        let err = HubError::DuplicateSection {
            standard: "iso".to_string(),
            section: "risk-issues".to_string(),
        };
        assert!(err.to_string().contains("'risk-issues'"));
        assert!(err.to_string().contains("'iso'"));
    }
}
