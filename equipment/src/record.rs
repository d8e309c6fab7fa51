//! FILENAME: equipment/src/record.rs
//! PURPOSE: Defines the single equipment measurement record and its fields.
//! CONTEXT: `Equipment` is the row both engines read. `NumericField` names the
//! three measurements the analytics work over, `EquipmentField` names every
//! column the table view can search and sort on.

use serde::{Deserialize, Serialize};

/// Stable identifier of a record within its dataset.
pub type EquipmentId = i64;

/// One measurement row of an uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    #[serde(rename = "equipment_name")]
    pub name: String,
    /// Group-by key for the per-type analytics. Case-sensitive.
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

impl Equipment {
    pub fn new(
        id: EquipmentId,
        name: impl Into<String>,
        equipment_type: impl Into<String>,
        flowrate: f64,
        pressure: f64,
        temperature: f64,
    ) -> Self {
        Equipment {
            id,
            name: name.into(),
            equipment_type: equipment_type.into(),
            flowrate,
            pressure,
            temperature,
        }
    }
}

// ============================================================================
// NUMERIC FIELDS
// ============================================================================

/// The real-valued measurements of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericField {
    Flowrate,
    Pressure,
    Temperature,
}

impl NumericField {
    /// Every numeric field, in correlation matrix order.
    pub const ALL: [NumericField; 3] = [
        NumericField::Flowrate,
        NumericField::Pressure,
        NumericField::Temperature,
    ];

    /// Reads this field from a record.
    pub fn value_of(self, record: &Equipment) -> f64 {
        match self {
            NumericField::Flowrate => record.flowrate,
            NumericField::Pressure => record.pressure,
            NumericField::Temperature => record.temperature,
        }
    }

    /// Collects this field across records, aligned by record index.
    pub fn extract(self, records: &[Equipment]) -> Vec<f64> {
        records.iter().map(|r| self.value_of(r)).collect()
    }

    /// Short axis label used by the charts.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Flowrate => "Flow",
            NumericField::Pressure => "Pressure",
            NumericField::Temperature => "Temp",
        }
    }
}

// ============================================================================
// TABLE COLUMNS
// ============================================================================

/// A column of the record table. Serialized with the API's key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentField {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "equipment_name")]
    Name,
    #[serde(rename = "equipment_type")]
    Type,
    #[serde(rename = "flowrate")]
    Flowrate,
    #[serde(rename = "pressure")]
    Pressure,
    #[serde(rename = "temperature")]
    Temperature,
}

impl EquipmentField {
    pub const ALL: [EquipmentField; 6] = [
        EquipmentField::Id,
        EquipmentField::Name,
        EquipmentField::Type,
        EquipmentField::Flowrate,
        EquipmentField::Pressure,
        EquipmentField::Temperature,
    ];

    /// The numeric measurement behind this column, if it is one.
    pub fn as_numeric(self) -> Option<NumericField> {
        match self {
            EquipmentField::Flowrate => Some(NumericField::Flowrate),
            EquipmentField::Pressure => Some(NumericField::Pressure),
            EquipmentField::Temperature => Some(NumericField::Temperature),
            EquipmentField::Id | EquipmentField::Name | EquipmentField::Type => None,
        }
    }

    /// Whether the column holds free text rather than a number.
    pub fn is_text(self) -> bool {
        matches!(self, EquipmentField::Name | EquipmentField::Type)
    }

    /// Returns the display value of the column as a String.
    /// Numbers use their default decimal form (`10`, `2.5`), no fixed precision.
    pub fn display_value(self, record: &Equipment) -> String {
        match self {
            EquipmentField::Id => record.id.to_string(),
            EquipmentField::Name => record.name.clone(),
            EquipmentField::Type => record.equipment_type.clone(),
            EquipmentField::Flowrate => display_number(record.flowrate),
            EquipmentField::Pressure => display_number(record.pressure),
            EquipmentField::Temperature => display_number(record.temperature),
        }
    }
}

/// Negative zero prints as `0`.
fn display_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl From<NumericField> for EquipmentField {
    fn from(field: NumericField) -> Self {
        match field {
            NumericField::Flowrate => EquipmentField::Flowrate,
            NumericField::Pressure => EquipmentField::Pressure,
            NumericField::Temperature => EquipmentField::Temperature,
        }
    }
}
