//! FILENAME: table-engine/src/definition.rs
//! Table Definition - The serializable query state.
//!
//! This module contains the types that DESCRIBE what the table should show.
//! The state is owned by the caller and handed to the engine on every query;
//! the engine never mutates it.

use serde::{Deserialize, Serialize};
use equipment::EquipmentField;

/// Rows per page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Direction of the single-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search, sort and page parameters of the table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Case-insensitive substring matched against name, type and the numbers.
    #[serde(default)]
    pub search_term: String,

    /// Exact (case-sensitive) type a record must have, if any.
    #[serde(default)]
    pub type_filter: Option<String>,

    /// Column to sort by. `None` keeps input order.
    #[serde(default)]
    pub sort_key: Option<EquipmentField>,

    #[serde(default)]
    pub sort_direction: SortDirection,

    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search_term: String::new(),
            type_filter: None,
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            page: default_page(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// The state after the user clicks the header of `key`.
    ///
    /// Clicking the column already sorted ascending flips it to descending;
    /// any other click sorts ascending on `key`.
    pub fn toggle_sort(&self, key: EquipmentField) -> QueryState {
        let direction = if self.sort_key == Some(key)
            && self.sort_direction == SortDirection::Ascending
        {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        QueryState {
            sort_key: Some(key),
            sort_direction: direction,
            ..self.clone()
        }
    }
}
