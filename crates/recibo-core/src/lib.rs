//! Core library for banking receipt analysis.
//!
//! This crate provides:
//! - Rule-based field tagging over the OCR-recognized text of Peruvian
//!   transfer receipts (amounts, fees, operation data, accounts, banks)
//! - Account-number and bank-name resolution heuristics
//! - Record and export models for downstream reconciliation tooling
//! - Boundary types for the external OCR collaborator

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{ReciboError, Result};
pub use models::export::{ExportSummary, ReceiptExport};
pub use models::receipt::{FieldKind, ReceiptField, ReceiptRecord};
pub use ocr::{flatten_blocks, DocumentRecognizer, KeyValueBlock, OcrError, RecognizedText};
pub use receipt::{extract_banking_fields, ReceiptTagger};
