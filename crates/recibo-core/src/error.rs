//! Error types for the recibo-core library.

use thiserror::Error;

use crate::ocr::OcrError;

/// Main error type for the recibo library.
///
/// Field tagging itself is infallible (an unrecognized field is simply
/// absent from the record); errors only arise at the collaborator and
/// serialization boundaries.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// Failure reported by the OCR collaborator.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Serialization of an export document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the recibo library.
pub type Result<T> = std::result::Result<T, ReciboError>;
