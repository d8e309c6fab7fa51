//! FILENAME: tests/common/mod.rs
//! Fixtures for table query integration tests.

#![allow(dead_code)]

use equipment::{Dataset, Equipment};

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

    /// The fixture as the API would deliver it.
    pub fn dataset_json() -> String {
        let equipment = serde_json::to_value(Self::records()).unwrap();
        serde_json::json!({
            "id": 42,
            "name": "sample_equipment_data.csv",
            "created_at": "2025-02-01T10:00:00Z",
            "row_count": 12,
            "equipment": equipment,
        })
        .to_string()
    }

    pub fn dataset() -> Dataset {
        Dataset::from_json(&Self::dataset_json()).unwrap()
    }
}
