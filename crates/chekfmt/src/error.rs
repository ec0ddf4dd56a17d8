//! Error type for document rendering.
//!
//! Formatting itself is total — [`crate::format`] accepts any string and
//! always produces a document. Only the output backends can fail, and only
//! when serializing the document for structured output.

use std::fmt;

/// Error type for rendering a [`crate::StyledDocument`] to an output mode.
#[derive(Debug)]
pub enum RenderError {
    /// Document serialization error (JSON output mode).
    SerializationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}
