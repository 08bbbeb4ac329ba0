//! Receipt field tagging module.

pub mod rules;
mod tagger;

pub use tagger::{extract_banking_fields, ReceiptTagger};
