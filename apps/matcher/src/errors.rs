use serde_json::{json, Value};
use thiserror::Error;

use crate::extraction::DocumentFormat;

/// Failure to turn a submitted document into text.
///
/// Extraction is atomic: when this is returned no partial profile exists. Callers must
/// report it differently from a low `MatchResult`, which is never an error.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read {format} document: {reason}")]
    Unreadable {
        format: DocumentFormat,
        reason: String,
    },

    #[error("Invalid text encoding in {format} document: {reason}")]
    Encoding {
        format: DocumentFormat,
        reason: String,
    },
}

impl ExtractionError {
    /// Stable machine-readable code for collaborators.
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ExtractionError::Unreadable { .. } => "UNREADABLE_DOCUMENT",
            ExtractionError::Encoding { .. } => "INVALID_ENCODING",
        }
    }

    /// Error body in the `{"error": {"code", "message"}}` shape used by the upload API.
    pub fn to_payload(&self) -> Value {
        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string()
            }
        })
    }
}

/// Rejected aggregation weight table.
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("Weight for {0} must be a finite, non-negative number")]
    Invalid(&'static str),

    #[error("Weights must sum to 1.0, got {0}")]
    BadSum(f64),
}
