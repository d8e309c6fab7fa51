//! FILENAME: equipment/src/error.rs

use thiserror::Error;

use crate::record::EquipmentId;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate equipment id: {0}")]
    DuplicateId(EquipmentId),
}
