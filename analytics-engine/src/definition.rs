//! FILENAME: analytics-engine/src/definition.rs
//! Analytics Definition - The serializable chart-ready outputs.
//!
//! This module contains all the types the analytics engine PRODUCES.
//! These structures are designed to be:
//! - Serializable (handed to chart renderers as JSON)
//! - Independent of the input records (owned values, no borrows)
//! - Deterministically ordered

use serde::{Deserialize, Serialize};
use equipment::NumericField;

/// Number of histogram bins when the caller does not choose one.
pub const DEFAULT_BIN_COUNT: usize = 10;

// ============================================================================
// GROUPED AVERAGES
// ============================================================================

/// Arithmetic means of the numeric fields over all records of one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageByType {
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
    /// Number of records in the group (always at least 1).
    pub count: usize,
}

impl AverageByType {
    /// Mean of one numeric field for this group.
    pub fn mean_of(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Flowrate => self.flowrate,
            NumericField::Pressure => self.pressure,
            NumericField::Temperature => self.temperature,
        }
    }
}

/// Number of records carrying one type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub count: usize,
}

// ============================================================================
// HISTOGRAM
// ============================================================================

/// One interval of a histogram and the number of values inside it.
///
/// Bins are half-open `[lo, hi)` except the last, which also holds the maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// `"{lo}-{hi}"`, both bounds to one decimal place.
    pub label: String,
    pub count: usize,
}

impl HistogramBin {
    pub fn new(lo: f64, hi: f64) -> Self {
        HistogramBin {
            label: format!("{:.1}-{:.1}", lo, hi),
            count: 0,
        }
    }
}

// ============================================================================
// CORRELATION
// ============================================================================

/// Pearson coefficients between every pair of numeric fields.
///
/// Rows and columns follow `fields`. The matrix is symmetric; a diagonal cell
/// is `1.0` unless its field is constant, in which case it is `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub fields: [NumericField; 3],
    pub values: [[f64; 3]; 3],
}

impl CorrelationMatrix {
    /// Coefficient between two fields.
    pub fn get(&self, row: NumericField, col: NumericField) -> f64 {
        self.values[self.position(row)][self.position(col)]
    }

    /// Axis labels in row/column order.
    pub fn labels(&self) -> [&'static str; 3] {
        self.fields.map(NumericField::label)
    }

    fn position(&self, field: NumericField) -> usize {
        self.fields
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()
    }
}

// ============================================================================
// SCATTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// The points of one equipment type, plotted as one colored series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub points: Vec<ScatterPoint>,
}
