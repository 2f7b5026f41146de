//! Display reordering and summary columns

use crate::error::DataError;
use crate::error::FigureResult;

/// Permute a derived series from canonical benchmark order into the
/// display order used by a specific chart
pub fn reorder(
    values: &[f64],
    canonical: &[&str],
    display: &[&str],
) -> FigureResult<Vec<f64>> {
    assert!(values.len() == canonical.len());

    let mut result = Vec::with_capacity(display.len());
    for name in display {
        let index = canonical
            .iter()
            .position(|b| b == name)
            .ok_or_else(|| DataError::UnknownBenchmark(name.to_string()))?;
        result.push(values[index]);
    }

    Ok(result)
}

/// Arithmetic mean over the real benchmarks of a series
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Append the `avg` and `avg/area` summary columns to a normalized
/// series. The area-adjusted mean scales each value by
/// `baseline_area / config_area` first, rewarding configurations that
/// achieve their speedup with less silicon.
pub fn append_summaries(
    series: &[f64],
    baseline_area: f64,
    config_area: f64,
) -> Vec<f64> {
    let area_ratio = baseline_area / config_area;
    let avg = mean(series);
    let avg_area =
        series.iter().map(|v| v * area_ratio).sum::<f64>()
            / series.len() as f64;

    let mut result = series.to_vec();
    result.push(avg);
    result.push(avg_area);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FigureError;

    #[test]
    fn test_reorder() {
        let reordered =
            reorder(&[1.0, 2.0], &["a", "b"], &["b", "a"]).unwrap();
        assert_eq!(reordered, vec![2.0, 1.0]);
    }

    #[test]
    fn test_identity_reorder_is_noop() {
        let canonical = ["a", "b", "c"];
        let values = [3.0, 1.0, 2.0];
        let reordered = reorder(&values, &canonical, &canonical).unwrap();
        assert_eq!(reordered, values.to_vec());
    }

    #[test]
    fn test_display_order_may_omit_benchmarks() {
        let reordered =
            reorder(&[1.0, 2.0, 3.0], &["a", "b", "c"], &["c", "a"])
                .unwrap();
        assert_eq!(reordered, vec![3.0, 1.0]);
    }

    #[test]
    fn test_unknown_benchmark_fails() {
        let err =
            reorder(&[1.0], &["a"], &["nope"]).unwrap_err();
        match err {
            FigureError::DataError(DataError::UnknownBenchmark(name)) => {
                assert_eq!(name, "nope");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn test_append_summaries() {
        // Half the baseline area doubles each area-adjusted value
        let series = [2.0, 4.0, 6.0];
        let appended = append_summaries(&series, 2.0, 1.0);
        assert_eq!(appended.len(), 5);
        assert_eq!(appended[3], 4.0);
        assert_eq!(appended[4], 8.0);
    }
}
