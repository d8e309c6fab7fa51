//! FILENAME: table-engine/src/view.rs
//! Table View - One rendered page of the record table.

use serde::{Deserialize, Serialize};
use equipment::Equipment;

/// The page the table shows plus the counts its pagination controls need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Filtered and sorted records of the requested page.
    pub page_items: Vec<Equipment>,
    /// Records passing the filters, across all pages.
    pub total_matching: usize,
    /// `ceil(total_matching / page_size)`; `0` when nothing matches.
    pub total_pages: usize,
    /// Size of the unfiltered collection ("N of M records").
    pub total_records: usize,
}

impl QueryResult {
    pub fn empty(total_records: usize) -> Self {
        QueryResult {
            page_items: Vec::new(),
            total_matching: 0,
            total_pages: 0,
            total_records,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.total_matching != self.total_records
    }
}
