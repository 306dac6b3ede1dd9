//! Runtime configuration from environment variables
//!
//! | Variable            | Default | Meaning                       |
//! |---------------------|---------|-------------------------------|
//! | `PM_HUB_BASE_URL`   | `/`     | base for document links       |
//! | `PM_HUB_STANDARDS`  | unset   | standards corpus override     |
//! | `PM_HUB_REFERENCES` | unset   | reference corpus override     |
//! | `PM_HUB_OUTPUT_DIR` | `.`     | directory for exported files  |
//!
//! Unset corpus paths mean the embedded corpora. Command-line flags
//! override every field.

use std::path::PathBuf;

pub const ENV_BASE_URL: &str = "PM_HUB_BASE_URL";
pub const ENV_STANDARDS: &str = "PM_HUB_STANDARDS";
pub const ENV_REFERENCES: &str = "PM_HUB_REFERENCES";
pub const ENV_OUTPUT_DIR: &str = "PM_HUB_OUTPUT_DIR";

pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub base_url: String,
    pub standards_path: Option<PathBuf>,
    pub references_path: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            standards_path: None,
            references_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl HubConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            standards_path: get(ENV_STANDARDS).map(PathBuf::from),
            references_path: get(ENV_REFERENCES).map(PathBuf::from),
            output_dir: get(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }
}
