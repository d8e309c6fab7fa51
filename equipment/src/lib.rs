//! FILENAME: equipment/src/lib.rs
//! PURPOSE: Main library entry point for the equipment data model.
//! CONTEXT: Re-exports the record, dataset and error types shared by
//! `analytics-engine` and `table-engine`.

pub mod dataset;
pub mod error;
pub mod record;

// Re-export commonly used types at the crate root
pub use dataset::{Dataset, DatasetId, Summary};
pub use error::DatasetError;
pub use record::{Equipment, EquipmentField, EquipmentId, NumericField};
