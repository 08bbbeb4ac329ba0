//! Receipt field tagging engine.

use tracing::debug;

use crate::models::receipt::{FieldKind, ReceiptField, ReceiptRecord};

use super::rules::{numeric, patterns_for, resolve_accounts, resolve_bank};

/// Rule-based tagger that turns recognized receipt text into a
/// [`ReceiptRecord`].
///
/// Tagging is a pure function of the input text and the static pattern
/// registry: no I/O, no shared mutable state, and identical input always
/// yields an identical record. A tagger value can be shared freely across
/// threads.
pub struct ReceiptTagger {
    validate_captures: bool,
}

impl ReceiptTagger {
    /// Create a tagger with capture validation enabled.
    pub fn new() -> Self {
        Self {
            validate_captures: true,
        }
    }

    /// Set whether captures must pass the field's shape check before being
    /// stored (amounts parse as decimals, digit fields are all digits). A
    /// capture failing the check leaves the field absent.
    pub fn with_capture_validation(mut self, validate: bool) -> Self {
        self.validate_captures = validate;
        self
    }

    /// Tag every recognized field in the text.
    ///
    /// A field whose patterns do not match stays absent. That is the normal
    /// outcome for sparse receipts, not an error. Empty or garbled input
    /// yields an all-absent record.
    pub fn tag(&self, text: &str) -> ReceiptRecord {
        let mut record = ReceiptRecord::new();

        for field in ReceiptField::ALL {
            // The account fields go through the ordinal resolver below.
            for pattern in patterns_for(field) {
                if let Some(caps) = pattern.captures(text) {
                    let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                    if !self.validate_captures || self.capture_is_sane(field, value) {
                        record.set(field, value);
                    }
                    // First matching pattern wins; later patterns in the
                    // list are never consulted, even when the capture was
                    // rejected.
                    break;
                }
            }
        }

        let accounts = resolve_accounts(text);
        if let Some(origin) = accounts.origin {
            record.set(ReceiptField::CuentaOrigen, &origin);
        }
        if let Some(destination) = accounts.destination {
            record.set(ReceiptField::CuentaDestino, &destination);
        }

        // The known-institution scan only fills the slot when no labeled
        // pattern already did.
        if record.get(ReceiptField::EntidadDestino).is_none() {
            if let Some(bank) = resolve_bank(text) {
                record.set(ReceiptField::EntidadDestino, bank);
            }
        }

        debug!(
            "Tagged {} of {} fields",
            record.present_count(),
            ReceiptField::ALL.len()
        );

        record
    }

    fn capture_is_sane(&self, field: ReceiptField, value: &str) -> bool {
        match field.kind() {
            FieldKind::Amount => numeric::parse_amount(value).is_some(),
            FieldKind::Digits => numeric::is_digits(value),
            FieldKind::Text => !value.is_empty(),
        }
    }
}

impl Default for ReceiptTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag banking fields with the default tagger configuration.
pub fn extract_banking_fields(text: &str) -> ReceiptRecord {
    ReceiptTagger::new().tag(text)
}
