//! Aggregation and conversion over tabular numeric data
//!
//! This module provides stateless functions that total rows and columns of a
//! [`TableSource`], compute cumulative percentages over a [`KeyedSource`],
//! convert primitive slices into boxed numeric sequences, and deep-compare or
//! deep-copy jagged 2D arrays.
//!
//! Missing values (absent cells) are skipped during aggregation, never
//! treated as zero-valued entries or errors. Non-finite inputs (NaN,
//! ±Infinity) are not errors either; they propagate as IEEE 754 results.

use crate::values::{KeyedList, KeyedSource, TableSource};

// =============================================================================
// Row and column totals
// =============================================================================

/// Total of all present cells in one column
///
/// Missing cells contribute nothing to the sum.
pub fn calculate_column_total(data: &impl TableSource, column: usize) -> f64 {
    let mut total = 0.0;
    for row in 0..data.row_count() {
        if let Some(value) = data.cell(row, column) {
            total += value;
        }
    }
    total
}

/// Total of the present cells in one column, restricted to the given rows
pub fn calculate_column_total_for_rows(
    data: &impl TableSource,
    column: usize,
    rows: &[usize],
) -> f64 {
    let mut total = 0.0;
    for &row in rows {
        if let Some(value) = data.cell(row, column) {
            total += value;
        }
    }
    total
}

/// Total of all present cells in one row
///
/// Missing cells contribute nothing to the sum.
pub fn calculate_row_total(data: &impl TableSource, row: usize) -> f64 {
    let mut total = 0.0;
    for column in 0..data.column_count() {
        if let Some(value) = data.cell(row, column) {
            total += value;
        }
    }
    total
}

/// Total of the present cells in one row, restricted to the given columns
pub fn calculate_row_total_for_columns(
    data: &impl TableSource,
    row: usize,
    columns: &[usize],
) -> f64 {
    let mut total = 0.0;
    for &column in columns {
        if let Some(value) = data.cell(row, column) {
            total += value;
        }
    }
    total
}

// =============================================================================
// Boxed numeric sequences
// =============================================================================

/// Copy a slice into a boxed numeric sequence
///
/// Length and order are preserved exactly, including NaN and ±Infinity
/// bit patterns. An empty input yields an empty (non-absent) output.
pub fn create_number_array(data: &[f64]) -> Box<[f64]> {
    data.to_vec().into_boxed_slice()
}

/// Copy a jagged 2D array into boxed numeric sequences
///
/// Each input row becomes an independently boxed inner sequence of its own
/// length; rows are not forced to a common width and zero-length rows are
/// preserved. An empty input yields an empty (non-absent) output.
pub fn create_number_array_2d(data: &[Vec<f64>]) -> Box<[Box<[f64]>]> {
    data.iter()
        .map(|row| row.clone().into_boxed_slice())
        .collect()
}

// =============================================================================
// Cumulative percentages
// =============================================================================

/// Running total through each key, divided by the grand total
///
/// The grand total sums all present values; missing values contribute
/// nothing to either the total or the running sum but still emit an entry.
/// Entries are emitted in the input's own iteration order, one per input
/// key. When the grand total is zero every emitted percentage is NaN
/// (`0.0 / 0.0`). An empty input yields an empty output.
pub fn cumulative_percentages<S: KeyedSource>(data: &S) -> KeyedList<S::Key> {
    let mut total = 0.0;
    for index in 0..data.item_count() {
        if let Some(value) = data.value_at(index) {
            total += value;
        }
    }

    let mut result = KeyedList::with_capacity(data.item_count());
    let mut running_total = 0.0;
    for index in 0..data.item_count() {
        if let Some(value) = data.value_at(index) {
            running_total += value;
        }
        result.push(data.key_at(index), Some(running_total / total));
    }
    result
}

// =============================================================================
// Jagged 2D array helpers
// =============================================================================

/// Structural equality of two optional jagged 2D arrays
///
/// Two absent arrays are equal; an absent and a present array are not.
/// Present arrays must match in outer length and per-row inner length, and
/// elements are compared by representation rather than IEEE equality: NaN
/// equals NaN, and all other values must share a bit pattern (so same-signed
/// infinities are equal while `0.0` and `-0.0` are not).
pub fn equal_2d(a: Option<&[Vec<f64>]>, b: Option<&[Vec<f64>]>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(row_a, row_b)| {
        row_a.len() == row_b.len()
            && row_a
                .iter()
                .zip(row_b)
                .all(|(&x, &y)| same_representation(x, y))
    })
}

/// Deep copy of a jagged 2D array
///
/// Every inner row is an independent allocation preserving its own length,
/// so mutating the clone never affects the original.
pub fn clone_2d(data: &[Vec<f64>]) -> Vec<Vec<f64>> {
    data.to_vec()
}

/// Representation equality: NaN equals NaN, everything else compares bits
fn same_representation(x: f64, y: f64) -> bool {
    (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dense in-memory table with optional cells
    struct MatrixTable {
        cells: Vec<Vec<Option<f64>>>,
        columns: usize,
    }

    impl MatrixTable {
        fn new(cells: Vec<Vec<Option<f64>>>) -> Self {
            let columns = cells.first().map_or(0, Vec::len);
            Self { cells, columns }
        }
    }

    impl TableSource for MatrixTable {
        fn row_count(&self) -> usize {
            self.cells.len()
        }

        fn column_count(&self) -> usize {
            self.columns
        }

        fn cell(&self, row: usize, column: usize) -> Option<f64> {
            self.cells[row][column]
        }
    }

    fn sample_table() -> MatrixTable {
        MatrixTable::new(vec![
            vec![Some(0.0), Some(1.0), Some(2.0)],
            vec![Some(10.0), Some(20.0), Some(30.0)],
        ])
    }

    fn table_with_missing_cell() -> MatrixTable {
        MatrixTable::new(vec![
            vec![Some(0.0), None, Some(2.0)],
            vec![Some(10.0), Some(20.0), Some(30.0)],
        ])
    }

    #[test]
    fn test_column_totals() {
        let table = sample_table();
        assert_eq!(calculate_column_total(&table, 0), 10.0);
        assert_eq!(calculate_column_total(&table, 1), 21.0);
        assert_eq!(calculate_column_total(&table, 2), 32.0);
    }

    #[test]
    fn test_column_total_skips_missing_cell() {
        let table = table_with_missing_cell();
        assert_eq!(calculate_column_total(&table, 1), 20.0);
    }

    #[test]
    fn test_row_totals() {
        let table = sample_table();
        assert_eq!(calculate_row_total(&table, 0), 3.0);
        assert_eq!(calculate_row_total(&table, 1), 60.0);
    }

    #[test]
    fn test_row_total_skips_missing_cell() {
        let table = table_with_missing_cell();
        assert_eq!(calculate_row_total(&table, 0), 2.0);
    }

    #[test]
    fn test_subset_totals() {
        let table = sample_table();
        assert_eq!(calculate_column_total_for_rows(&table, 2, &[1]), 30.0);
        assert_eq!(calculate_row_total_for_columns(&table, 1, &[0, 2]), 40.0);
        assert_eq!(calculate_column_total_for_rows(&table, 0, &[]), 0.0);
    }

    #[test]
    fn test_create_number_array_preserves_special_values() {
        let data = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        let result = create_number_array(&data);
        assert_eq!(result.len(), 3);
        assert!(result[0].is_nan());
        assert_eq!(result[1], f64::INFINITY);
        assert_eq!(result[2], f64::NEG_INFINITY);
    }

    #[test]
    fn test_create_number_array_empty() {
        assert_eq!(create_number_array(&[]).len(), 0);
    }

    #[test]
    fn test_create_number_array_2d_preserves_jagged_shape() {
        let data = vec![vec![], vec![1.0]];
        let result = create_number_array_2d(&data);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].len(), 0);
        assert_eq!(result[1].len(), 1);
        assert_eq!(result[1][0], 1.0);
    }

    #[test]
    fn test_create_number_array_2d_empty() {
        assert_eq!(create_number_array_2d(&[]).len(), 0);
    }

    #[test]
    fn test_equal_2d_absent_handling() {
        assert!(equal_2d(None, None));
        assert!(!equal_2d(Some(&[vec![1.0]]), None));
        assert!(!equal_2d(None, Some(&[vec![1.0]])));
    }

    #[test]
    fn test_equal_2d_shape_mismatch() {
        let a = vec![vec![1.0]];
        let b = vec![vec![1.0], vec![2.0]];
        assert!(!equal_2d(Some(&a), Some(&b)));

        let c = vec![vec![1.0, 2.0]];
        let d = vec![vec![1.0]];
        assert!(!equal_2d(Some(&c), Some(&d)));
    }

    #[test]
    fn test_equal_2d_special_values() {
        let nan_a = vec![vec![f64::NAN]];
        let nan_b = vec![vec![f64::NAN]];
        assert!(equal_2d(Some(&nan_a), Some(&nan_b)));

        let inf_a = vec![vec![f64::INFINITY]];
        let inf_b = vec![vec![f64::INFINITY]];
        assert!(equal_2d(Some(&inf_a), Some(&inf_b)));

        let pos_inf = vec![vec![f64::INFINITY]];
        let neg_inf = vec![vec![f64::NEG_INFINITY]];
        assert!(!equal_2d(Some(&pos_inf), Some(&neg_inf)));
    }

    #[test]
    fn test_equal_2d_distinguishes_signed_zero() {
        let pos = vec![vec![0.0]];
        let neg = vec![vec![-0.0]];
        assert!(!equal_2d(Some(&pos), Some(&neg)));
    }

    #[test]
    fn test_clone_2d_preserves_jagged_shape() {
        let source = vec![vec![1.0], vec![2.0, 3.0]];
        let cloned = clone_2d(&source);
        assert_eq!(cloned.len(), 2);
        assert_eq!(cloned[0], vec![1.0]);
        assert_eq!(cloned[1], vec![2.0, 3.0]);
    }

    #[test]
    fn test_clone_2d_is_independent() {
        let source = vec![vec![1.0], vec![2.0, 3.0]];
        let mut cloned = clone_2d(&source);
        cloned[1][0] = 99.0;
        assert_eq!(source[1][0], 2.0);
    }
}
