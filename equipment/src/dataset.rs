//! FILENAME: equipment/src/dataset.rs
//! PURPOSE: An uploaded dataset as delivered by the remote API.
//! CONTEXT: The dataset is loaded elsewhere and handed to the engines as a
//! value. Loading only checks what the engines rely on: unique record ids.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::record::Equipment;

pub type DatasetId = i64;

/// Dataset-level statistics, computed once at upload time.
///
/// The `min_*` / `max_*` fields are optional because the web API only
/// returns the counts and averages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: usize,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    /// Record count per equipment type.
    pub type_distribution: BTreeMap<String, usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_flowrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_flowrate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temperature: Option<f64>,
}

/// An ordered collection of records plus the metadata it was uploaded with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub row_count: usize,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl Dataset {
    /// Creates a dataset whose row count matches its records.
    pub fn new(
        id: DatasetId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        equipment: Vec<Equipment>,
    ) -> Self {
        Dataset {
            id,
            name: name.into(),
            created_at,
            row_count: equipment.len(),
            summary: None,
            equipment,
        }
    }

    /// Decodes an API payload and validates it.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        log::debug!(
            target: "dataset",
            "loaded dataset {} ({:?}) with {} records",
            dataset.id,
            dataset.name,
            dataset.equipment.len()
        );
        Ok(dataset)
    }

    /// Checks that record ids are unique.
    ///
    /// A `row_count` that disagrees with the records only warrants a warning:
    /// the engines never read it.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::with_capacity(self.equipment.len());
        for record in &self.equipment {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId(record.id));
            }
        }

        if self.row_count != self.equipment.len() {
            log::warn!(
                target: "dataset",
                "dataset {} declares {} rows but carries {} records",
                self.id,
                self.row_count,
                self.equipment.len()
            );
        }
        Ok(())
    }

    pub fn records(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }
}
