//! Weighted confusion matrix with labeled axes
//!
//! Rows are true classes (e.g. genomes), columns are predicted classes
//! (e.g. bins), cell values are non-negative weights (e.g. base pairs).
//! Row and column label sets need not be identical; metrics align the two
//! axes by matching label names.

use std::collections::HashMap;
use std::fmt;

use crate::error::{EvalError, Result};

/// Weighted confusion matrix cross-tabulating true vs predicted classes
///
/// Element `[i][j]` holds the weight of items with true label `row_labels[i]`
/// assigned to predicted label `col_labels[j]`. The matrix is immutable after
/// construction, so shared references may be used from multiple threads.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    weights: Vec<Vec<f64>>,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    row_index: HashMap<String, usize>,
    col_index: HashMap<String, usize>,
    title: String,
}

impl ConfusionMatrix {
    /// Create a matrix from weights and axis labels
    ///
    /// Validates eagerly: the number of rows must match the row-label count,
    /// every row must be as wide as the column-label count, labels must be
    /// unique within their axis, and all weights must be non-negative.
    pub fn new(
        weights: Vec<Vec<f64>>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        title: impl Into<String>,
    ) -> Result<Self> {
        if weights.len() != row_labels.len() {
            return Err(EvalError::RowCountMismatch {
                rows: weights.len(),
                labels: row_labels.len(),
            });
        }
        for (label, row) in row_labels.iter().zip(&weights) {
            if row.len() != col_labels.len() {
                return Err(EvalError::RowWidthMismatch {
                    label: label.clone(),
                    found: row.len(),
                    expected: col_labels.len(),
                });
            }
        }
        let row_index = build_index(&row_labels, "row")?;
        let col_index = build_index(&col_labels, "column")?;
        for (rname, row) in row_labels.iter().zip(&weights) {
            for (cname, &w) in col_labels.iter().zip(row) {
                if w < 0.0 {
                    return Err(EvalError::NegativeWeight {
                        row: rname.clone(),
                        col: cname.clone(),
                        weight: w,
                    });
                }
            }
        }
        Ok(Self {
            weights,
            row_labels,
            col_labels,
            row_index,
            col_index,
            title: title.into(),
        })
    }

    /// Matrix title (empty if none was given)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of rows (true classes)
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns (predicted classes)
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Row labels in input order
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels in input order
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Weight at (`row`, `col`), or `None` if either label is absent
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = *self.row_index.get(row)?;
        let c = *self.col_index.get(col)?;
        Some(self.weights[r][c])
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }

    /// Row-major iteration over every cell as `((row_label, col_label), weight)`
    ///
    /// The iterator borrows the matrix; calling `items()` again restarts from
    /// the first cell.
    pub fn items(&self) -> impl Iterator<Item = ((&str, &str), f64)> + '_ {
        self.row_labels.iter().enumerate().flat_map(move |(r, rname)| {
            self.col_labels
                .iter()
                .enumerate()
                .map(move |(c, cname)| ((rname.as_str(), cname.as_str()), self.weights[r][c]))
        })
    }

    /// Weights of the row named `label`
    ///
    /// A missing label yields a zero-filled vector with one entry per column.
    pub fn get_row(&self, label: &str) -> Vec<f64> {
        match self.row_index.get(label) {
            Some(&r) => self.weights[r].clone(),
            None => vec![0.0; self.col_labels.len()],
        }
    }

    /// Weights of the column named `label`
    ///
    /// A missing label yields a zero-filled vector with one entry per row.
    pub fn get_col(&self, label: &str) -> Vec<f64> {
        match self.col_index.get(label) {
            Some(&c) => self.weights.iter().map(|row| row[c]).collect(),
            None => vec![0.0; self.row_labels.len()],
        }
    }

    /// Iterate `(label, weights)` over rows in input order
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<f64>)> + '_ {
        self.row_labels
            .iter()
            .map(move |name| (name.as_str(), self.get_row(name)))
    }

    /// Iterate `(label, weights)` over columns in input order
    pub fn cols(&self) -> impl Iterator<Item = (&str, Vec<f64>)> + '_ {
        self.col_labels
            .iter()
            .map(move |name| (name.as_str(), self.get_col(name)))
    }

    // Internal indexed access for the metric modules.

    pub(crate) fn row_index_of(&self, label: &str) -> Option<usize> {
        self.row_index.get(label).copied()
    }

    pub(crate) fn col_index_of(&self, label: &str) -> Option<usize> {
        self.col_index.get(label).copied()
    }

    pub(crate) fn weight_at(&self, r: usize, c: usize) -> f64 {
        self.weights[r][c]
    }

    pub(crate) fn row_at(&self, r: usize) -> &[f64] {
        &self.weights[r]
    }

    pub(crate) fn row_sum(&self, r: usize) -> f64 {
        self.weights[r].iter().sum()
    }

    pub(crate) fn col_sum(&self, c: usize) -> f64 {
        self.weights.iter().map(|row| row[c]).sum()
    }
}

fn build_index(labels: &[String], axis: &'static str) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(labels.len());
    for (i, label) in labels.iter().enumerate() {
        if index.insert(label.clone(), i).is_some() {
            return Err(EvalError::DuplicateLabel {
                axis,
                label: label.clone(),
            });
        }
    }
    Ok(index)
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for cname in &self.col_labels {
            write!(f, "\t{cname}")?;
        }
        writeln!(f)?;
        for (rname, row) in self.row_labels.iter().zip(&self.weights) {
            write!(f, "{rname}")?;
            for w in row {
                write!(f, "\t{w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> ConfusionMatrix {
        ConfusionMatrix::new(
            vec![vec![8.0, 2.0], vec![1.0, 9.0]],
            labels(&["A", "B"]),
            labels(&["A", "B"]),
            "sample",
        )
        .unwrap()
    }

    #[test]
    fn test_construction_valid() {
        let cm = sample();
        assert_eq!(cm.n_rows(), 2);
        assert_eq!(cm.n_cols(), 2);
        assert_eq!(cm.title(), "sample");
        assert_eq!(cm.get("A", "B"), Some(2.0));
        assert_eq!(cm.get("B", "A"), Some(1.0));
        assert_eq!(cm.get("A", "missing"), None);
        assert!((cm.total() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_construction_row_count_mismatch() {
        let err = ConfusionMatrix::new(
            vec![vec![1.0, 2.0]],
            labels(&["A", "B"]),
            labels(&["A", "B"]),
            "",
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::RowCountMismatch { rows: 1, labels: 2 }));
    }

    #[test]
    fn test_construction_row_width_mismatch() {
        let err = ConfusionMatrix::new(
            vec![vec![1.0, 2.0], vec![3.0]],
            labels(&["A", "B"]),
            labels(&["A", "B"]),
            "",
        )
        .unwrap_err();
        match err {
            EvalError::RowWidthMismatch {
                label,
                found,
                expected,
            } => {
                assert_eq!(label, "B");
                assert_eq!(found, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_construction_duplicate_label() {
        let err = ConfusionMatrix::new(
            vec![vec![1.0], vec![2.0]],
            labels(&["A", "A"]),
            labels(&["X"]),
            "",
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::DuplicateLabel { axis: "row", .. }));
    }

    #[test]
    fn test_construction_negative_weight() {
        let err = ConfusionMatrix::new(
            vec![vec![1.0, -0.5]],
            labels(&["A"]),
            labels(&["X", "Y"]),
            "",
        )
        .unwrap_err();
        match err {
            EvalError::NegativeWeight { row, col, weight } => {
                assert_eq!(row, "A");
                assert_eq!(col, "Y");
                assert!((weight + 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rectangular_axes() {
        // Two genomes spread over three bins.
        let cm = ConfusionMatrix::new(
            vec![vec![5.0, 1.0, 0.0], vec![0.0, 2.0, 7.0]],
            labels(&["g1", "g2"]),
            labels(&["g1", "b2", "g2"]),
            "",
        )
        .unwrap();
        assert_eq!(cm.n_rows(), 2);
        assert_eq!(cm.n_cols(), 3);
        assert_eq!(cm.get("g2", "b2"), Some(2.0));
    }

    #[test]
    fn test_items_row_major_and_restartable() {
        let cm = sample();
        let cells: Vec<_> = cm.items().collect();
        assert_eq!(
            cells,
            vec![
                (("A", "A"), 8.0),
                (("A", "B"), 2.0),
                (("B", "A"), 1.0),
                (("B", "B"), 9.0),
            ]
        );
        // A second call starts over from the first cell.
        assert_eq!(cm.items().next(), Some((("A", "A"), 8.0)));
    }

    #[test]
    fn test_get_row_and_col() {
        let cm = sample();
        assert_eq!(cm.get_row("A"), vec![8.0, 2.0]);
        assert_eq!(cm.get_col("B"), vec![2.0, 9.0]);
    }

    #[test]
    fn test_get_row_missing_is_zero_filled_to_column_count() {
        let cm = ConfusionMatrix::new(
            vec![vec![1.0, 2.0, 3.0]],
            labels(&["A"]),
            labels(&["X", "Y", "Z"]),
            "",
        )
        .unwrap();
        assert_eq!(cm.get_row("missing"), vec![0.0, 0.0, 0.0]);
        assert_eq!(cm.get_col("missing"), vec![0.0]);
    }

    #[test]
    fn test_rows_and_cols_iteration_order() {
        let cm = sample();
        let row_names: Vec<_> = cm.rows().map(|(name, _)| name.to_string()).collect();
        assert_eq!(row_names, vec!["A", "B"]);
        let cols: Vec<_> = cm.cols().collect();
        assert_eq!(cols[0], ("A", vec![8.0, 1.0]));
        assert_eq!(cols[1], ("B", vec![2.0, 9.0]));
    }

    #[test]
    fn test_display_tab_separated() {
        let cm = sample();
        let text = format!("{cm}");
        assert!(text.starts_with("sample\tA\tB\n"));
        assert!(text.contains("A\t8\t2\n"));
        assert!(text.contains("B\t1\t9\n"));
    }
}
