//! Field patterns for Peruvian transfer receipts.
//!
//! Each field owns an ordered list of patterns, most-specific-first: labeled
//! forms come before generic amount forms, and the first pattern that
//! matches the text wins. Every pattern captures exactly one group, the
//! field's value. The lists are compiled once per process and never mutated.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::receipt::ReceiptField;

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|s| Regex::new(s).unwrap()).collect()
}

lazy_static! {
    static ref IMPORTE_ENVIADO: Vec<Regex> = compile(&[
        r"(?i)Importe enviado\s*S/\s*(\d+(?:\.\d+)?)",
        r"(?i)Importe enviado\s*(\d+(?:\.\d+)?)",
        r"(?i)Monto\s*S/\s*(\d+(?:\.\d+)?)",
        r"(?i)Importe\s*S/\s*(\d+(?:\.\d+)?)",
        r"S/\s*(\d+(?:\.\d+)?)",
    ]);

    static ref ENTIDAD_DESTINO: Vec<Regex> = compile(&[
        r"(?i)Entidad destino\s*([^\n]+)",
        r"(?i)Banco destino\s*([^\n]+)",
        r"(?i)Destino\s*([^\n]+)",
    ]);

    static ref COMISION: Vec<Regex> = compile(&[
        r"(?i)Comisi[óo]n\s*S/\s*(\d+(?:\.\d+)?)",
        r"(?i)Comisi[óo]n\s*(\d+(?:\.\d+)?)",
    ]);

    static ref ITF: Vec<Regex> = compile(&[
        r"(?i)ITF\s*S/\s*(\d+(?:\.\d+)?)",
        r"(?i)ITF\s*(\d+(?:\.\d+)?)",
    ]);

    static ref NUMERO_OPERACION: Vec<Regex> = compile(&[
        r"(?i)N[úu]mero de operaci[óo]n\s*(\d+)",
        r"(?i)Nro\.?\s*operaci[óo]n\s*(\d+)",
        r"(?i)Operaci[óo]n\s*(\d+)",
    ]);

    static ref TIPO_OPERACION: Vec<Regex> = compile(&[
        r"(?i)Tipo de operaci[óo]n\s*([^\n]+)",
        r"(?i)Operaci[óo]n\s*([^\n]+)",
    ]);

    // Date-time shapes are unlabeled on most receipts: a long Spanish form
    // ("12 julio 2025, 10:33 h"), D/M/YYYY HH:MM, and ISO date HH:MM.
    static ref FECHA_HORA: Vec<Regex> = compile(&[
        r"(\d{1,2}\s+\w+\s+\d{4},?\s+\d{1,2}:\d{2}\s*h?)",
        r"(\d{1,2}/\d{1,2}/\d{4}\s+\d{1,2}:\d{2})",
        r"(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2})",
    ]);

    static ref ESTADO: Vec<Regex> = compile(&[
        r"(?i)(Operaci[óo]n exitosa)",
        r"(?i)(Exitosa)",
        r"(?i)(Completada)",
        r"(?i)(Aprobada)",
    ]);
}

/// Ordered candidate patterns for a field.
///
/// The two account fields return an empty list: their patterns belong to
/// the account resolver, which also decides origin/destination assignment.
pub fn patterns_for(field: ReceiptField) -> &'static [Regex] {
    match field {
        ReceiptField::ImporteEnviado => &IMPORTE_ENVIADO[..],
        ReceiptField::EntidadDestino => &ENTIDAD_DESTINO[..],
        ReceiptField::Comision => &COMISION[..],
        ReceiptField::Itf => &ITF[..],
        ReceiptField::NumeroOperacion => &NUMERO_OPERACION[..],
        ReceiptField::TipoOperacion => &TIPO_OPERACION[..],
        ReceiptField::FechaHora => &FECHA_HORA[..],
        ReceiptField::Estado => &ESTADO[..],
        ReceiptField::CuentaOrigen | ReceiptField::CuentaDestino => &[],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn first_capture(field: ReceiptField, text: &str) -> Option<String> {
        for pattern in patterns_for(field) {
            if let Some(caps) = pattern.captures(text) {
                return caps.get(1).map(|m| m.as_str().to_string());
            }
        }
        None
    }

    #[test]
    fn test_labeled_amount_with_currency() {
        assert_eq!(
            first_capture(ReceiptField::ImporteEnviado, "Importe enviado S/ 1250.00"),
            Some("1250.00".to_string())
        );
    }

    #[test]
    fn test_labeled_amount_without_currency() {
        assert_eq!(
            first_capture(ReceiptField::ImporteEnviado, "Importe enviado 35.50"),
            Some("35.50".to_string())
        );
    }

    #[test]
    fn test_generic_amount_is_last_resort() {
        // A bare "S/" figure is only captured when no labeled form matches.
        assert_eq!(
            first_capture(ReceiptField::ImporteEnviado, "Pagaste S/ 45.50 con la app"),
            Some("45.50".to_string())
        );
        assert_eq!(
            first_capture(
                ReceiptField::ImporteEnviado,
                "S/ 99.00 de saldo\nImporte enviado S/ 10.00"
            ),
            Some("10.00".to_string())
        );
    }

    #[test]
    fn test_accented_and_plain_labels() {
        assert_eq!(
            first_capture(ReceiptField::NumeroOperacion, "Número de operación 01234567"),
            Some("01234567".to_string())
        );
        assert_eq!(
            first_capture(ReceiptField::NumeroOperacion, "Numero de operacion 01234567"),
            Some("01234567".to_string())
        );
        assert_eq!(
            first_capture(ReceiptField::Comision, "Comision S/ 3.50"),
            Some("3.50".to_string())
        );
    }

    #[test]
    fn test_label_and_value_on_separate_lines() {
        assert_eq!(
            first_capture(ReceiptField::ImporteEnviado, "Importe enviado\nS/ 120.00"),
            Some("120.00".to_string())
        );
    }

    #[test]
    fn test_date_shapes() {
        assert_eq!(
            first_capture(ReceiptField::FechaHora, "12 julio 2025, 10:33 h"),
            Some("12 julio 2025, 10:33 h".to_string())
        );
        assert_eq!(
            first_capture(ReceiptField::FechaHora, "el 12/07/2025 10:33 se procesó"),
            Some("12/07/2025 10:33".to_string())
        );
        assert_eq!(
            first_capture(ReceiptField::FechaHora, "2025-07-12 10:33"),
            Some("2025-07-12 10:33".to_string())
        );
    }

    #[test]
    fn test_status_full_phrase_beats_fragment() {
        assert_eq!(
            first_capture(ReceiptField::Estado, "¡Operación exitosa!"),
            Some("Operación exitosa".to_string())
        );
        assert_eq!(
            first_capture(ReceiptField::Estado, "Transferencia Completada"),
            Some("Completada".to_string())
        );
    }

    #[test]
    fn test_account_fields_have_no_registry_patterns() {
        assert!(patterns_for(ReceiptField::CuentaOrigen).is_empty());
        assert!(patterns_for(ReceiptField::CuentaDestino).is_empty());
    }

    #[test]
    fn test_every_pattern_has_one_capture_group() {
        for field in ReceiptField::ALL {
            for pattern in patterns_for(field) {
                assert_eq!(
                    pattern.captures_len(),
                    2,
                    "pattern {} for {:?}",
                    pattern.as_str(),
                    field
                );
            }
        }
    }
}
