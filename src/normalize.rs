//! Baseline-relative normalization

use crate::error::DataError;
use crate::error::FigureResult;
use crate::table::ResultTable;

/// Normalize every configuration's raw series against the baseline
/// configuration, elementwise `baseline[b] / config[b]`.
///
/// For cycle counts this is speedup (fewer cycles, larger ratio); for
/// energy it is efficiency, since `(1/x) / (1/x0) == x0 / x`. The
/// baseline row of the result is all 1.0.
pub fn speedups(
    table: &ResultTable,
    baseline: usize,
) -> FigureResult<Vec<Vec<f64>>> {
    let base = table.row(baseline);
    let mut result = Vec::with_capacity(table.num_configs());

    for (c, config) in table.configs.iter().enumerate() {
        let row = table.row(c);
        let mut series = Vec::with_capacity(row.len());
        for (b, raw) in row.iter().enumerate() {
            if *raw == 0.0 {
                return Err(DataError::InvalidMeasurement {
                    series: config.clone(),
                    entry: table.benchmarks[b].clone(),
                }
                .into());
            }
            series.push(base[b] / raw);
        }
        result.push(series);
    }

    Ok(result)
}

/// Convert a raw series to rates (elementwise reciprocal), used for the
/// performance and energy-efficiency axes of scatter plots. `entries`
/// names each position for error reporting.
pub fn rates(
    label: &str,
    entries: &[&str],
    series: &[f64],
) -> FigureResult<Vec<f64>> {
    assert!(entries.len() == series.len());

    series
        .iter()
        .zip(entries)
        .map(|(raw, entry)| {
            if *raw == 0.0 {
                Err(DataError::InvalidMeasurement {
                    series: label.to_string(),
                    entry: entry.to_string(),
                }
                .into())
            } else {
                Ok(1.0 / raw)
            }
        })
        .collect()
}

/// Normalize a rate series against its own leading entry, named
/// `first_entry` for error reporting
pub fn normalize_to_first(
    label: &str,
    first_entry: &str,
    series: &[f64],
) -> FigureResult<Vec<f64>> {
    assert!(!series.is_empty());

    let reference = series[0];
    if reference == 0.0 {
        return Err(DataError::InvalidMeasurement {
            series: label.to_string(),
            entry: first_entry.to_string(),
        }
        .into());
    }

    Ok(series.iter().map(|v| v / reference).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FigureError;

    fn cycle_table() -> ResultTable {
        ResultTable::from_rows(
            &["A", "B", "C"],
            &["bm"],
            &[[100.0], [50.0], [25.0]],
        )
    }

    #[test]
    fn test_speedups_against_baseline() {
        let norm = speedups(&cycle_table(), 0).unwrap();
        assert_eq!(norm, vec![vec![1.0], vec![2.0], vec![4.0]]);
    }

    #[test]
    fn test_self_normalization_is_unity() {
        let table = ResultTable::from_rows(
            &["io", "o3"],
            &["a", "b"],
            &[[3.0, 7.0], [2.0, 5.0]],
        );
        for baseline in 0..table.num_configs() {
            let norm = speedups(&table, baseline).unwrap();
            assert!(norm[baseline].iter().all(|v| *v == 1.0));
        }
    }

    #[test]
    fn test_zero_measurement_fails() {
        let table = ResultTable::from_rows(
            &["io", "o3"],
            &["a"],
            &[[3.0], [0.0]],
        );
        let err = speedups(&table, 0).unwrap_err();
        match err {
            FigureError::DataError(DataError::InvalidMeasurement {
                series,
                entry,
            }) => {
                assert_eq!(series, "o3");
                assert_eq!(entry, "a");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rates_and_normalization() {
        let r = rates("bm", &["x", "y", "z"], &[4.0, 2.0, 1.0]).unwrap();
        assert_eq!(r, vec![0.25, 0.5, 1.0]);
        assert_eq!(
            normalize_to_first("bm", "x", &r).unwrap(),
            vec![1.0, 2.0, 4.0]
        );
    }

    #[test]
    fn test_rates_names_offending_entry() {
        let err =
            rates("bm", &["x", "y"], &[4.0, 0.0]).unwrap_err();
        match err {
            FigureError::DataError(DataError::InvalidMeasurement {
                series,
                entry,
            }) => {
                assert_eq!(series, "bm");
                assert_eq!(entry, "y");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_normalize_to_first_zero_reference_fails() {
        let err =
            normalize_to_first("bm", "io", &[0.0, 2.0]).unwrap_err();
        match err {
            FigureError::DataError(DataError::InvalidMeasurement {
                series,
                entry,
            }) => {
                assert_eq!(series, "bm");
                assert_eq!(entry, "io");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
