//! Error types for the compliance engine

use std::path::PathBuf;

use thiserror::Error;

use crate::jurisdiction::State;

/// Per-call failure. An unrecognized jurisdiction is the only one: a will
/// that breaks every rule still produces a normal `ValidationResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplianceError {
    #[error("State code {code} not found")]
    NotFound { code: String },
}

impl ComplianceError {
    pub fn not_found(code: &str) -> Self {
        ComplianceError::NotFound {
            code: code.to_string(),
        }
    }
}

/// Failure to load a jurisdiction table. Fatal at startup.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to read jurisdiction data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid jurisdiction data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Jurisdiction {0} is defined more than once")]
    DuplicateCode(State),

    #[error("Jurisdiction {code} is named '{found}', expected '{expected}'")]
    NameMismatch {
        code: State,
        expected: &'static str,
        found: String,
    },

    #[error("Jurisdiction table is empty")]
    Empty,
}
