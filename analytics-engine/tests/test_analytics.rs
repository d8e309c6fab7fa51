//! FILENAME: tests/test_analytics.rs
//! Integration tests for the chart analytics over a realistic plant dataset.

mod common;

use std::collections::HashSet;

use analytics_engine::{
    averages_by_type, correlation, correlation_matrix_of, histogram_of, scatter_by_type,
    summarize, type_distribution, DEFAULT_BIN_COUNT,
};
use common::{assert_close, EquipmentFixture};
use equipment::{Equipment, NumericField};

// ============================================================================
// GROUPED AVERAGES
// ============================================================================

#[test]
fn test_group_count_matches_distinct_types() {
    let records = EquipmentFixture::records();
    let averages = averages_by_type(&records);

    let distinct: HashSet<&str> = records.iter().map(|r| r.equipment_type.as_str()).collect();
    assert_eq!(averages.len(), distinct.len());

    let total: usize = averages.iter().map(|a| a.count).sum();
    assert_eq!(total, records.len());
}

#[test]
fn test_pump_group_means() {
    let averages = averages_by_type(&EquipmentFixture::records());
    let pump = &averages[0];

    assert_eq!(pump.equipment_type, "Pump");
    assert_eq!(pump.count, 3);
    assert_close(pump.flowrate, 120.0);
    assert_close(pump.mean_of(NumericField::Pressure), 5.2);
    assert_close(pump.temperature, 110.0);
}

#[test]
fn test_averages_serialize_with_type_key() {
    let averages = averages_by_type(&EquipmentFixture::records());
    let json = serde_json::to_value(&averages[1]).unwrap();
    assert_eq!(json["type"], "Valve");
    assert_eq!(json["count"], 2);
}

// ============================================================================
// HISTOGRAMS
// ============================================================================

#[test]
fn test_histogram_of_every_field_accounts_for_all_records() {
    let records = EquipmentFixture::records();
    for field in NumericField::ALL {
        let bins = histogram_of(&records, field, DEFAULT_BIN_COUNT);
        assert_eq!(bins.len(), DEFAULT_BIN_COUNT);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, records.len(), "field {:?}", field);
    }
}

#[test]
fn test_flowrate_histogram_bounds() {
    let bins = histogram_of(&EquipmentFixture::records(), NumericField::Flowrate, 5);
    // min 58, max 155, step 19.4
    assert_eq!(bins[0].label, "58.0-77.4");
    assert_eq!(bins[4].label, "135.6-155.0");
    assert_eq!(bins[0].count, 2);
    assert_eq!(bins[4].count, 4);
}

#[test]
fn test_histogram_of_empty_dataset() {
    assert!(histogram_of(&[], NumericField::Pressure, DEFAULT_BIN_COUNT).is_empty());
}

// ============================================================================
// CORRELATION
// ============================================================================

#[test]
fn test_matrix_matches_pairwise_correlation() {
    let records = EquipmentFixture::records();
    let matrix = correlation_matrix_of(&records);

    for a in NumericField::ALL {
        for b in NumericField::ALL {
            if a == b {
                assert_eq!(matrix.get(a, b), 1.0);
            } else {
                assert_eq!(matrix.get(a, b), correlation(&a.extract(&records), &b.extract(&records)));
            }
            assert_eq!(matrix.get(a, b), matrix.get(b, a));
            assert!(matrix.get(a, b).abs() <= 1.0 + 1e-12);
        }
    }
    assert_eq!(matrix.labels(), ["Flow", "Pressure", "Temp"]);
}

#[test]
fn test_flow_and_temperature_move_together() {
    let matrix = correlation_matrix_of(&EquipmentFixture::records());
    assert!(matrix.get(NumericField::Flowrate, NumericField::Temperature) > 0.7);
}

#[test]
fn test_single_record_matrix_is_all_zero() {
    let records = vec![Equipment::new(1, "Pump-1", "Pump", 10.0, 2.0, 20.0)];
    let matrix = correlation_matrix_of(&records);
    assert!(matrix.values.iter().flatten().all(|v| *v == 0.0));
}

// ============================================================================
// SUMMARY, DISTRIBUTION, SCATTER
// ============================================================================

#[test]
fn test_summary_agrees_with_distribution() {
    let records = EquipmentFixture::records();
    let summary = summarize(&records);
    let distribution = type_distribution(&records);

    assert_eq!(summary.total_count, 12);
    assert_eq!(summary.min_flowrate, Some(58.0));
    assert_eq!(summary.max_flowrate, Some(155.0));
    assert_eq!(summary.type_distribution.len(), distribution.len());
    for entry in &distribution {
        assert_eq!(summary.type_distribution.get(&entry.equipment_type), Some(&entry.count));
    }
    assert_eq!(distribution[0].equipment_type, "Pump");
    assert_eq!(distribution[0].count, 3);
}

#[test]
fn test_scatter_series_cover_every_record() {
    let records = EquipmentFixture::records();
    let series = scatter_by_type(&records, NumericField::Temperature, NumericField::Pressure);

    let points: usize = series.iter().map(|s| s.points.len()).sum();
    assert_eq!(points, records.len());
    assert_eq!(series[0].equipment_type, "Pump");
    assert_eq!(series[0].points[0].x, 110.0);
    assert_eq!(series[0].points[0].y, 5.2);
}
