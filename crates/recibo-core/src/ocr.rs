//! Boundary types for the external OCR collaborator.
//!
//! The tagging engine consumes plain text; producing that text from document
//! bytes is the job of an external recognition provider. This module defines
//! the seam: the provider's output shapes, its failure taxonomy, and the
//! caller-side adaptation from structured key/value output to the flat text
//! blob the tagger expects. No provider implementation lives in this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by the recognition provider.
///
/// These are distinguished, typed failures. They must reach the caller as
/// errors; a provider failure is never presented as a record with all fields
/// absent.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Provider credentials are missing or rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The document bytes are malformed or in an unsupported format.
    #[error("unsupported or malformed document: {0}")]
    UnsupportedDocument(String),

    /// The recognition service could not be reached or answered with a
    /// server-side failure.
    #[error("recognition service unavailable: {0}")]
    Unavailable(String),

    /// The provider's usage quota is exhausted.
    #[error("recognition quota exceeded")]
    QuotaExceeded,
}

/// Line-oriented output of a recognition pass over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    /// Recognized lines in reading order.
    pub lines: Vec<String>,
}

impl RecognizedText {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Flatten the lines to the single text blob the tagger consumes.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<Vec<String>> for RecognizedText {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

/// One key/value pair from a form-analysis recognition pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValueBlock {
    /// Label side of the pair (e.g. "Importe enviado").
    pub key: String,
    /// Value side of the pair (e.g. "S/ 1250.00").
    pub value: String,
}

/// Render key/value blocks to the flat text form the tagger consumes.
///
/// Keeping each pair on its own line preserves the label-then-value shape
/// the field patterns are written against. This adaptation is the caller's
/// responsibility, not the tagger's.
pub fn flatten_blocks(blocks: &[KeyValueBlock]) -> String {
    blocks
        .iter()
        .map(|block| format!("{} {}", block.key.trim(), block.value.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Seam for recognition providers (e.g. a Textract-style service).
pub trait DocumentRecognizer {
    /// Recognize the document as a sequence of text lines.
    fn detect_text(&self, document: &[u8]) -> Result<RecognizedText, OcrError>;

    /// Recognize the document as labeled key/value blocks.
    fn analyze_forms(&self, document: &[u8]) -> Result<Vec<KeyValueBlock>, OcrError>;
}
