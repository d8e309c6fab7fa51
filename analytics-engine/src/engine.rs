//! FILENAME: analytics-engine/src/engine.rs
//! Analytics Engine - Pure functions that turn records into chart data.
//!
//! Every function reads its input once or twice and allocates a fresh
//! result. Nothing is cached: callers recompute whenever the records change.
//!
//! Degenerate inputs have defined outputs rather than errors:
//! - empty input yields empty sequences (or a zero summary)
//! - a constant field correlates as `0.0`
//! - a zero-width histogram puts every value in the first bin

use std::collections::BTreeMap;

use equipment::{Equipment, NumericField, Summary};
use rustc_hash::FxHashMap;

use crate::definition::{
    AverageByType, CorrelationMatrix, HistogramBin, ScatterPoint, ScatterSeries, TypeCount,
};

// ============================================================================
// GROUPING
// ============================================================================

/// Accumulators keyed by type label, iterated in first-appearance order.
struct TypeGroups<'a, A> {
    index: FxHashMap<&'a str, usize>,
    groups: Vec<(&'a str, A)>,
}

impl<'a, A: Default> TypeGroups<'a, A> {
    fn new() -> Self {
        TypeGroups {
            index: FxHashMap::default(),
            groups: Vec::new(),
        }
    }

    /// Returns the accumulator for `key`, creating it on first sight.
    fn entry(&mut self, key: &'a str) -> &mut A {
        let next = self.groups.len();
        let slot = *self.index.entry(key).or_insert(next);
        if slot == next {
            self.groups.push((key, A::default()));
        }
        &mut self.groups[slot].1
    }

    fn into_groups(self) -> Vec<(&'a str, A)> {
        self.groups
    }
}

/// Running sums for one type.
#[derive(Default)]
struct FieldSums {
    flowrate: f64,
    pressure: f64,
    temperature: f64,
    count: usize,
}

/// Averages every numeric field per equipment type.
///
/// Groups appear in the order their type first occurs in `records`.
pub fn averages_by_type(records: &[Equipment]) -> Vec<AverageByType> {
    let mut groups: TypeGroups<FieldSums> = TypeGroups::new();

    for record in records {
        let sums = groups.entry(&record.equipment_type);
        sums.flowrate += record.flowrate;
        sums.pressure += record.pressure;
        sums.temperature += record.temperature;
        sums.count += 1;
    }

    // Every group holds at least one record, so count is never zero here.
    let averages: Vec<AverageByType> = groups
        .into_groups()
        .into_iter()
        .map(|(equipment_type, sums)| {
            let n = sums.count as f64;
            AverageByType {
                equipment_type: equipment_type.to_string(),
                flowrate: sums.flowrate / n,
                pressure: sums.pressure / n,
                temperature: sums.temperature / n,
                count: sums.count,
            }
        })
        .collect();

    log::debug!(
        target: "analytics",
        "averages_by_type: {} records -> {} groups",
        records.len(),
        averages.len()
    );
    averages
}

/// Counts records per type, largest first. Ties keep first-appearance order.
pub fn type_distribution(records: &[Equipment]) -> Vec<TypeCount> {
    let mut groups: TypeGroups<usize> = TypeGroups::new();
    for record in records {
        *groups.entry(&record.equipment_type) += 1;
    }

    let mut counts: Vec<TypeCount> = groups
        .into_groups()
        .into_iter()
        .map(|(equipment_type, count)| TypeCount {
            equipment_type: equipment_type.to_string(),
            count,
        })
        .collect();
    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Splits records into one `(x, y)` series per type.
pub fn scatter_by_type(
    records: &[Equipment],
    x: NumericField,
    y: NumericField,
) -> Vec<ScatterSeries> {
    let mut groups: TypeGroups<Vec<ScatterPoint>> = TypeGroups::new();
    for record in records {
        groups.entry(&record.equipment_type).push(ScatterPoint {
            x: x.value_of(record),
            y: y.value_of(record),
        });
    }

    groups
        .into_groups()
        .into_iter()
        .map(|(equipment_type, points)| ScatterSeries {
            equipment_type: equipment_type.to_string(),
            points,
        })
        .collect()
}

// ============================================================================
// HISTOGRAM
// ============================================================================

/// Buckets `values` into `bin_count` equal-width bins between their min and max.
///
/// The maximum lands in the last bin. When every value is the same the bins
/// have zero width and all values are counted in the first one.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }
    if bin_count == 0 {
        log::warn!(target: "analytics", "histogram requested with zero bins");
        return Vec::new();
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    // Halved coordinates keep the span finite for any pair of finite bounds.
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let origin = min * scale;
    let step = (max * scale - origin) / bin_count as f64;
    let edge = |i: usize| -> f64 {
        if i == bin_count {
            max
        } else {
            ((origin + i as f64 * step) / scale).clamp(min, max)
        }
    };

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin::new(edge(i), edge(i + 1)))
        .collect();

    for &value in values {
        bins[bin_index(value * scale, origin, step, bin_count)].count += 1;
    }

    log::debug!(
        target: "analytics",
        "histogram: {} values in [{}, {}] over {} bins",
        values.len(),
        min,
        max,
        bin_count
    );
    bins
}

/// Histogram of one numeric field across `records`.
pub fn histogram_of(records: &[Equipment], field: NumericField, bin_count: usize) -> Vec<HistogramBin> {
    histogram(&field.extract(records), bin_count)
}

fn bin_index(value: f64, min: f64, step: f64, bin_count: usize) -> usize {
    if step == 0.0 {
        return 0;
    }
    let raw = ((value - min) / step).floor();
    if raw.is_nan() || raw < 0.0 {
        return 0;
    }
    (raw as usize).min(bin_count - 1)
}

// ============================================================================
// CORRELATION
// ============================================================================

/// Deviations from the mean after scaling the vector into `[-1, 1]`.
///
/// Pearson's r is invariant under positive scaling, and the scaled values
/// cannot overflow or underflow when squared and summed.
fn deviations(values: &[f64]) -> Vec<f64> {
    let peak = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let scaled: Vec<f64> = if peak == 0.0 {
        values.to_vec()
    } else {
        values.iter().map(|v| v / peak).collect()
    };
    let mean = scaled.iter().sum::<f64>() / scaled.len() as f64;
    scaled.into_iter().map(|v| v - mean).collect()
}

/// Square root of the summed squared deviations (population convention).
fn spread(deviations: &[f64]) -> f64 {
    deviations.iter().map(|d| d * d).sum::<f64>().sqrt()
}

/// Pearson correlation coefficient between two aligned vectors.
///
/// Returns `0.0` when the vectors are empty, differ in length, or either one
/// is constant.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n == 0 || n != y.len() {
        return 0.0;
    }

    let dx = deviations(x);
    let dy = deviations(y);
    let spread_x = spread(&dx);
    let spread_y = spread(&dy);
    if spread_x == 0.0 || spread_y == 0.0 {
        return 0.0;
    }

    let covariance: f64 = dx.iter().zip(&dy).map(|(a, b)| a * b).sum();
    covariance / (spread_x * spread_y)
}

/// Correlation of a vector with itself: exactly `1.0`, or `0.0` if it is
/// empty or constant.
fn self_correlation(x: &[f64]) -> f64 {
    if x.is_empty() || spread(&deviations(x)) == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Builds the 3x3 matrix over flowrate, pressure and temperature vectors.
///
/// `field_vectors` must be aligned by record index. A pair whose lengths
/// differ correlates as `0.0`.
pub fn correlation_matrix(field_vectors: [&[f64]; 3]) -> CorrelationMatrix {
    let mut values = [[0.0; 3]; 3];
    for (i, x) in field_vectors.iter().enumerate() {
        for (j, y) in field_vectors.iter().enumerate() {
            values[i][j] = if i == j {
                self_correlation(x)
            } else {
                correlation(x, y)
            };
        }
    }

    log::debug!(target: "analytics", "correlation_matrix: {:?}", values);
    CorrelationMatrix {
        fields: NumericField::ALL,
        values,
    }
}

/// Correlation matrix of the numeric fields across `records`.
pub fn correlation_matrix_of(records: &[Equipment]) -> CorrelationMatrix {
    let [flow, pressure, temperature] = NumericField::ALL.map(|f| f.extract(records));
    correlation_matrix([&flow[..], &pressure[..], &temperature[..]])
}

// ============================================================================
// SUMMARY
// ============================================================================

fn field_range(records: &[Equipment], field: NumericField) -> Option<(f64, f64)> {
    records.iter().map(|r| field.value_of(r)).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn field_mean(records: &[Equipment], field: NumericField) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| field.value_of(r)).sum::<f64>() / records.len() as f64
}

/// Dataset-level statistics: count, per-field mean/min/max and type counts.
///
/// An empty input gives a zero count, `0.0` means and no ranges.
pub fn summarize(records: &[Equipment]) -> Summary {
    let mut type_distribution: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *type_distribution
            .entry(record.equipment_type.clone())
            .or_insert(0) += 1;
    }

    let flow = field_range(records, NumericField::Flowrate);
    let pressure = field_range(records, NumericField::Pressure);
    let temperature = field_range(records, NumericField::Temperature);

    Summary {
        total_count: records.len(),
        avg_flowrate: field_mean(records, NumericField::Flowrate),
        avg_pressure: field_mean(records, NumericField::Pressure),
        avg_temperature: field_mean(records, NumericField::Temperature),
        type_distribution,
        min_flowrate: flow.map(|r| r.0),
        max_flowrate: flow.map(|r| r.1),
        min_pressure: pressure.map(|r| r.0),
        max_pressure: pressure.map(|r| r.1),
        min_temperature: temperature.map(|r| r.0),
        max_temperature: temperature.map(|r| r.1),
    }
}
