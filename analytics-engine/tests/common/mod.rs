//! FILENAME: tests/common/mod.rs
//! Fixtures and assertion helpers for analytics integration tests.

#![allow(dead_code)]

use equipment::Equipment;

pub struct EquipmentFixture;

impl EquipmentFixture {
    /// (name, type, flowrate, pressure, temperature)
    pub fn data() -> Vec<(&'static str, &'static str, f64, f64, f64)> {
        vec![
            ("Pump-1", "Pump", 120.0, 5.2, 110.0),
            ("Pump-2", "Pump", 115.0, 5.0, 108.0),
            ("Valve-1", "Valve", 60.0, 4.1, 105.0),
            ("Compressor-1", "Compressor", 95.0, 8.4, 95.0),
            ("HeatExchanger-1", "HeatExchanger", 150.0, 6.2, 130.0),
            ("Valve-2", "Valve", 58.0, 4.0, 102.0),
            ("Reactor-1", "Reactor", 140.0, 7.5, 140.0),
            ("Pump-3", "Pump", 125.0, 5.4, 112.0),
            ("Condenser-1", "Condenser", 100.0, 3.8, 85.0),
            ("Compressor-2", "Compressor", 98.0, 8.7, 97.0),
            ("HeatExchanger-2", "HeatExchanger", 155.0, 6.5, 128.0),
            ("Reactor-2", "Reactor", 145.0, 7.8, 138.0),
        ]
    }

    pub fn records() -> Vec<Equipment> {
        Self::data()
            .into_iter()
            .enumerate()
            .map(|(i, (name, kind, flow, pressure, temperature))| {
                Equipment::new(i as i64 + 1, name, kind, flow, pressure, temperature)
            })
            .collect()
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert that two floats agree to within 1e-9.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
