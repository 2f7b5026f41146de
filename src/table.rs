//! Raw result tables

/// A hand-entered table of raw measurements, one row per configuration
/// and one column per benchmark (or component, for breakdown tables).
///
/// The table is immutable once constructed; all derived series are
/// computed into fresh vectors.
pub struct ResultTable {
    pub configs: Vec<String>,
    pub benchmarks: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ResultTable {
    pub fn make(
        configs: Vec<String>,
        benchmarks: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Self {
        // A malformed literal table is a programming error
        assert!(values.len() == configs.len());
        for row in &values {
            assert!(row.len() == benchmarks.len());
        }

        Self {
            configs,
            benchmarks,
            values,
        }
    }

    /// Build a table from static name slices and fixed-size rows,
    /// the common case for figure data entered as array literals
    pub fn from_rows<const N: usize>(
        configs: &[&str],
        benchmarks: &[&str],
        rows: &[[f64; N]],
    ) -> Self {
        Self::make(
            configs.iter().map(|s| s.to_string()).collect(),
            benchmarks.iter().map(|s| s.to_string()).collect(),
            rows.iter().map(|r| r.to_vec()).collect(),
        )
    }

    pub fn num_configs(&self) -> usize {
        self.configs.len()
    }

    pub fn num_benchmarks(&self) -> usize {
        self.benchmarks.len()
    }

    /// The raw series for the given configuration index
    pub fn row(&self, config: usize) -> &[f64] {
        &self.values[config]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make() {
        let table = ResultTable::from_rows(
            &["io", "o3"],
            &["a", "b", "c"],
            &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
        );
        assert_eq!(table.num_configs(), 2);
        assert_eq!(table.num_benchmarks(), 3);
        assert_eq!(table.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic]
    fn test_ragged_table_panics() {
        ResultTable::make(
            vec!["io".to_string()],
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0]],
        );
    }
}
