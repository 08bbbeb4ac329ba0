//! Receipt record model with a closed set of extractable fields.

use serde::{Deserialize, Serialize};

/// The closed set of fields recognized on a banking transfer receipt.
///
/// Serialized names are the stable Spanish snake_case keys consumed by
/// downstream reconciliation tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptField {
    /// Amount sent (importe enviado).
    ImporteEnviado,
    /// Destination institution.
    EntidadDestino,
    /// Transfer fee.
    Comision,
    /// Financial transaction tax (impuesto a las transacciones financieras).
    Itf,
    /// Operation number assigned by the bank.
    NumeroOperacion,
    /// Operation type (transfer, service payment, ...).
    TipoOperacion,
    /// Date and time of the operation.
    FechaHora,
    /// Operation status (e.g. "Operación exitosa").
    Estado,
    /// Origin account (masked or explicit).
    CuentaOrigen,
    /// Destination account (masked or explicit).
    CuentaDestino,
}

/// Shape constraint a captured value must satisfy before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Monetary value, must parse as a decimal number.
    Amount,
    /// Digit string (operation numbers, account numbers).
    Digits,
    /// Free-form text, only required to be non-empty after trimming.
    Text,
}

impl ReceiptField {
    /// Canonical iteration order over all fields.
    pub const ALL: [ReceiptField; 10] = [
        ReceiptField::ImporteEnviado,
        ReceiptField::EntidadDestino,
        ReceiptField::Comision,
        ReceiptField::Itf,
        ReceiptField::NumeroOperacion,
        ReceiptField::TipoOperacion,
        ReceiptField::FechaHora,
        ReceiptField::Estado,
        ReceiptField::CuentaOrigen,
        ReceiptField::CuentaDestino,
    ];

    /// Stable key used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            ReceiptField::ImporteEnviado => "importe_enviado",
            ReceiptField::EntidadDestino => "entidad_destino",
            ReceiptField::Comision => "comision",
            ReceiptField::Itf => "itf",
            ReceiptField::NumeroOperacion => "numero_operacion",
            ReceiptField::TipoOperacion => "tipo_operacion",
            ReceiptField::FechaHora => "fecha_hora",
            ReceiptField::Estado => "estado",
            ReceiptField::CuentaOrigen => "cuenta_origen",
            ReceiptField::CuentaDestino => "cuenta_destino",
        }
    }

    /// Human-facing label, as shown on the receipts themselves.
    pub fn label(&self) -> &'static str {
        match self {
            ReceiptField::ImporteEnviado => "Importe Enviado",
            ReceiptField::EntidadDestino => "Entidad Destino",
            ReceiptField::Comision => "Comisión",
            ReceiptField::Itf => "ITF",
            ReceiptField::NumeroOperacion => "Número de Operación",
            ReceiptField::TipoOperacion => "Tipo de Operación",
            ReceiptField::FechaHora => "Fecha y Hora",
            ReceiptField::Estado => "Estado Operación",
            ReceiptField::CuentaOrigen => "Cuenta Origen",
            ReceiptField::CuentaDestino => "Cuenta Destino",
        }
    }

    /// Shape constraint for captured values of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            ReceiptField::ImporteEnviado | ReceiptField::Comision | ReceiptField::Itf => {
                FieldKind::Amount
            }
            ReceiptField::NumeroOperacion
            | ReceiptField::CuentaOrigen
            | ReceiptField::CuentaDestino => FieldKind::Digits,
            ReceiptField::EntidadDestino
            | ReceiptField::TipoOperacion
            | ReceiptField::FechaHora
            | ReceiptField::Estado => FieldKind::Text,
        }
    }
}

/// Structured result of tagging one receipt text.
///
/// One optional slot per [`ReceiptField`]. A present value is always
/// non-empty after trimming; "not found" is represented by `None`, never by
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importe_enviado: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entidad_destino: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comision: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub itf: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_operacion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_operacion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hora: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuenta_origen: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuenta_destino: Option<String>,
}

impl ReceiptRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, if present.
    pub fn get(&self, field: ReceiptField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Store a value for a field. The value is trimmed; empty values are
    /// dropped so the record never holds an empty string.
    pub fn set(&mut self, field: ReceiptField, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        *self.slot_mut(field) = Some(trimmed.to_string());
    }

    /// Number of fields with a value.
    pub fn present_count(&self) -> usize {
        ReceiptField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    /// Fields without a value, in canonical order.
    pub fn missing_fields(&self) -> Vec<ReceiptField> {
        ReceiptField::ALL
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// Ratio of present fields to total fields, in `[0, 1]`.
    pub fn completeness(&self) -> f64 {
        self.present_count() as f64 / ReceiptField::ALL.len() as f64
    }

    /// True when no field has a value.
    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }

    fn slot(&self, field: ReceiptField) -> &Option<String> {
        match field {
            ReceiptField::ImporteEnviado => &self.importe_enviado,
            ReceiptField::EntidadDestino => &self.entidad_destino,
            ReceiptField::Comision => &self.comision,
            ReceiptField::Itf => &self.itf,
            ReceiptField::NumeroOperacion => &self.numero_operacion,
            ReceiptField::TipoOperacion => &self.tipo_operacion,
            ReceiptField::FechaHora => &self.fecha_hora,
            ReceiptField::Estado => &self.estado,
            ReceiptField::CuentaOrigen => &self.cuenta_origen,
            ReceiptField::CuentaDestino => &self.cuenta_destino,
        }
    }

    fn slot_mut(&mut self, field: ReceiptField) -> &mut Option<String> {
        match field {
            ReceiptField::ImporteEnviado => &mut self.importe_enviado,
            ReceiptField::EntidadDestino => &mut self.entidad_destino,
            ReceiptField::Comision => &mut self.comision,
            ReceiptField::Itf => &mut self.itf,
            ReceiptField::NumeroOperacion => &mut self.numero_operacion,
            ReceiptField::TipoOperacion => &mut self.tipo_operacion,
            ReceiptField::FechaHora => &mut self.fecha_hora,
            ReceiptField::Estado => &mut self.estado,
            ReceiptField::CuentaOrigen => &mut self.cuenta_origen,
            ReceiptField::CuentaDestino => &mut self.cuenta_destino,
        }
    }
}
