//! Export document handed to downstream reconciliation tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::receipt::{ReceiptField, ReceiptRecord};

/// Serialized export form of one tagged receipt.
///
/// Carries the extraction timestamp and a completeness summary alongside the
/// record itself. Absent fields are omitted from the `campos_extraidos`
/// block; they are never serialized as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptExport {
    /// When the extraction ran.
    pub timestamp: DateTime<Utc>,

    /// The tagged fields.
    #[serde(rename = "campos_extraidos")]
    pub fields: ReceiptRecord,

    /// Detection summary.
    #[serde(rename = "resumen")]
    pub summary: ExportSummary,
}

/// Detection summary for one export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Total number of fields in the schema.
    #[serde(rename = "total_campos")]
    pub total_fields: usize,

    /// Number of fields with a detected value.
    #[serde(rename = "campos_detectados")]
    pub detected_fields: usize,

    /// Ratio of detected fields to total fields, in `[0, 1]`.
    #[serde(rename = "completitud")]
    pub completeness: f64,
}

impl ReceiptExport {
    /// Build an export document with an explicit timestamp.
    pub fn new(fields: ReceiptRecord, timestamp: DateTime<Utc>) -> Self {
        let summary = ExportSummary {
            total_fields: ReceiptField::ALL.len(),
            detected_fields: fields.present_count(),
            completeness: fields.completeness(),
        };
        Self {
            timestamp,
            fields,
            summary,
        }
    }

    /// Build an export document stamped with the current time.
    pub fn now(fields: ReceiptRecord) -> Self {
        Self::new(fields, Utc::now())
    }

    /// Serialize to the JSON document handed to downstream tooling.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_record() -> ReceiptRecord {
        let mut record = ReceiptRecord::new();
        record.set(ReceiptField::ImporteEnviado, "500.00");
        record.set(ReceiptField::EntidadDestino, "Interbank");
        record.set(ReceiptField::NumeroOperacion, "00123456");
        record.set(ReceiptField::Estado, "Operación exitosa");
        record
    }

    #[test]
    fn test_summary_counts() {
        let export = ReceiptExport::now(sample_record());
        assert_eq!(export.summary.total_fields, 10);
        assert_eq!(export.summary.detected_fields, 4);
        assert_eq!(export.summary.completeness, 0.4);
    }

    #[test]
    fn test_export_json_shape() {
        let timestamp = "2025-07-12T10:33:00Z".parse::<DateTime<Utc>>().unwrap();
        let export = ReceiptExport::new(sample_record(), timestamp);

        let value = serde_json::to_value(&export).unwrap();
        assert!(value.get("campos_extraidos").is_some());
        assert_eq!(value["resumen"]["total_campos"], 10);
        assert_eq!(value["resumen"]["campos_detectados"], 4);
        assert_eq!(value["resumen"]["completitud"], 0.4);
        assert_eq!(
            value["campos_extraidos"]["entidad_destino"],
            "Interbank"
        );
        // Absent fields stay out of the document entirely.
        assert!(value["campos_extraidos"].get("comision").is_none());
    }
}
