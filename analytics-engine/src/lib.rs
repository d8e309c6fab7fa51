//! FILENAME: analytics-engine/src/lib.rs
//! Chart analytics for the equipment dashboard.
//!
//! This crate turns an in-memory collection of equipment records into
//! chart-ready aggregates. It depends on `equipment` only for the shared
//! record and summary types.
//!
//! Layers:
//! - `definition`: Serializable outputs (WHAT the charts receive)
//! - `engine`: Pure calculation functions (HOW we compute them)

pub mod definition;
pub mod engine;

pub use definition::*;
pub use engine::{
    averages_by_type, correlation, correlation_matrix, correlation_matrix_of,
    histogram, histogram_of, scatter_by_type, summarize, type_distribution,
};
