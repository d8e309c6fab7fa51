//! FILENAME: table-engine/src/lib.rs
//! Record table subsystem for the equipment dashboard.
//!
//! This crate filters, sorts and paginates equipment records for the
//! interactive table. It depends on `equipment` for the record type and is
//! independent of `analytics-engine`.
//!
//! Layers:
//! - `definition`: Serializable query state (what the table should SHOW)
//! - `view`: The rendered page (WHAT we display)
//! - `engine`: The filter/sort/paginate pipeline (HOW we compute it)

pub mod definition;
pub mod view;
pub mod engine;

pub use definition::*;
pub use view::*;
pub use engine::{compare_by, distinct_types, matches_search, query};
