//! FILENAME: table-engine/src/engine.rs
//! Table Engine - Filter, sort and paginate records for the table view.
//!
//! Algorithm, recomputed from the full collection on every call:
//! 1. Filter by search term and type
//! 2. Sort by the selected column, if any
//! 3. Slice out the requested page

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Range;

use equipment::{Equipment, EquipmentField};

use crate::definition::QueryState;
use crate::view::QueryResult;

// ============================================================================
// FILTER
// ============================================================================

/// Whether a record contains `needle` (already lower-cased) in its name, its
/// type, or the default decimal form of any measurement. The id is not
/// searched.
pub fn matches_search(record: &Equipment, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    EquipmentField::ALL
        .iter()
        .filter(|&&field| field != EquipmentField::Id)
        .any(|&field| {
            let shown = field.display_value(record);
            if field.is_text() {
                shown.to_lowercase().contains(needle)
            } else {
                shown.contains(needle)
            }
        })
}

fn passes_filters(record: &Equipment, needle: &str, type_filter: Option<&str>) -> bool {
    if let Some(wanted) = type_filter {
        if record.equipment_type != wanted {
            return false;
        }
    }
    matches_search(record, needle)
}

// ============================================================================
// SORT
// ============================================================================

/// Ascending ordering of two records on one column.
///
/// Numbers compare numerically, names and types lexicographically.
pub fn compare_by(a: &Equipment, b: &Equipment, key: EquipmentField) -> Ordering {
    if let Some(field) = key.as_numeric() {
        return field.value_of(a).total_cmp(&field.value_of(b));
    }
    match key {
        EquipmentField::Name => a.name.cmp(&b.name),
        EquipmentField::Type => a.equipment_type.cmp(&b.equipment_type),
        _ => a.id.cmp(&b.id),
    }
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Index range of `page` (1-based) within `len` items, if it holds any.
fn page_range(page: usize, page_size: usize, len: usize) -> Option<Range<usize>> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= len {
        return None;
    }
    Some(start..start.saturating_add(page_size).min(len))
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Runs the filter -> sort -> paginate pipeline over `records`.
///
/// Never fails: a page past the end, or a zero page/page size, yields an
/// empty `page_items`.
pub fn query(records: &[Equipment], state: &QueryState) -> QueryResult {
    let needle = state.search_term.to_lowercase();
    let type_filter = state.type_filter.as_deref();

    let mut matched: Vec<&Equipment> = records
        .iter()
        .filter(|record| passes_filters(record, &needle, type_filter))
        .collect();

    if let Some(key) = state.sort_key {
        let direction = state.sort_direction;
        matched.sort_by(|a, b| direction.apply(compare_by(a, b, key)));
    }

    let total_matching = matched.len();
    if state.page_size == 0 {
        log::warn!(target: "table", "query with zero page size");
        return QueryResult {
            total_matching,
            ..QueryResult::empty(records.len())
        };
    }
    let total_pages = total_matching.div_ceil(state.page_size);

    let page_items: Vec<Equipment> = page_range(state.page, state.page_size, total_matching)
        .map(|range| matched[range].iter().map(|r| (*r).clone()).collect())
        .unwrap_or_default();

    log::debug!(
        target: "table",
        "query {:?}: {} of {} records match, page {}/{} has {} rows",
        state.search_term,
        total_matching,
        records.len(),
        state.page,
        total_pages,
        page_items.len()
    );

    QueryResult {
        page_items,
        total_matching,
        total_pages,
        total_records: records.len(),
    }
}

/// Sorted, de-duplicated, non-empty type labels for the type filter.
pub fn distinct_types(records: &[Equipment]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.equipment_type.as_str())
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
