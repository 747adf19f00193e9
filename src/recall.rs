//! Recall statistics: how much of each true class ends up under its own name
//!
//! Recall is computed along rows. For a row label `l`, `size` is the row
//! total and `correct` is the weight in the column also named `l`.

use crate::average::MacroAverage;
use crate::confusion::ConfusionMatrix;

impl ConfusionMatrix {
    /// Row total and correctly assigned weight for one true class
    ///
    /// A missing row label yields `(0.0, 0.0)`; a row without a same-named
    /// column has `correct = 0.0`.
    pub fn recall_freq(&self, label: &str) -> (f64, f64) {
        let Some(r) = self.row_index_of(label) else {
            return (0.0, 0.0);
        };
        let size = self.row_sum(r);
        let correct = match self.col_index_of(label) {
            Some(c) => self.weight_at(r, c),
            None => 0.0,
        };
        (size, correct)
    }

    /// Recall for one true class; NaN when the class is missing or empty
    pub fn recall(&self, label: &str) -> f64 {
        let (size, correct) = self.recall_freq(label);
        correct / size
    }

    /// Iterate `(label, size, correct)` over all non-empty true classes
    ///
    /// Rows with zero total weight are skipped, matching the aggregate
    /// metrics which never count empty classes.
    pub fn recall_freqs(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.row_labels().iter().enumerate().filter_map(move |(r, name)| {
            let size = self.row_sum(r);
            if size == 0.0 {
                return None;
            }
            let correct = match self.col_index_of(name) {
                Some(c) => self.weight_at(r, c),
                None => 0.0,
            };
            Some((name.as_str(), size, correct))
        })
    }

    /// Iterate `(label, recall)` over all non-empty true classes
    pub fn recalls(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.recall_freqs()
            .map(|(name, size, correct)| (name, correct / size))
    }

    /// Unweighted mean and population std dev of per-class recall
    ///
    /// Classes named `ignore` and classes with zero size are excluded.
    pub fn macro_recall(&self, ignore: Option<&str>) -> MacroAverage {
        let values: Vec<f64> = self
            .recalls()
            .filter(|(name, _)| Some(*name) != ignore)
            .map(|(_, rec)| rec)
            .collect();
        MacroAverage::of(&values)
    }

    /// Size-weighted recall over all non-ignored classes
    ///
    /// This is the same weighted-diagonal ratio as [`accuracy`] and
    /// [`micro_precision`]; NaN when the eligible total is zero.
    ///
    /// [`accuracy`]: ConfusionMatrix::accuracy
    /// [`micro_precision`]: ConfusionMatrix::micro_precision
    pub fn micro_recall(&self, ignore: Option<&str>) -> f64 {
        let mut total_size = 0.0;
        let mut total_correct = 0.0;
        for (name, size, correct) in self.recall_freqs() {
            if Some(name) != ignore {
                total_size += size;
                total_correct += correct;
            }
        }
        total_correct / total_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> ConfusionMatrix {
        ConfusionMatrix::new(
            vec![vec![8.0, 2.0], vec![1.0, 9.0]],
            labels(&["A", "B"]),
            labels(&["A", "B"]),
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_recall_freq() {
        let cm = sample();
        assert_eq!(cm.recall_freq("A"), (10.0, 8.0));
        assert_eq!(cm.recall_freq("B"), (10.0, 9.0));
    }

    #[test]
    fn test_recall_freq_missing_label() {
        let cm = sample();
        assert_eq!(cm.recall_freq("missing"), (0.0, 0.0));
    }

    #[test]
    fn test_recall_freq_row_without_matching_column() {
        let cm = ConfusionMatrix::new(
            vec![vec![4.0, 6.0]],
            labels(&["g1"]),
            labels(&["b1", "b2"]),
            "",
        )
        .unwrap();
        assert_eq!(cm.recall_freq("g1"), (10.0, 0.0));
        assert_relative_eq!(cm.recall("g1"), 0.0);
    }

    #[test]
    fn test_recall_single_label() {
        let cm = sample();
        assert_relative_eq!(cm.recall("A"), 0.8);
        assert_relative_eq!(cm.recall("B"), 0.9);
    }

    #[test]
    fn test_recall_missing_or_empty_is_nan() {
        let cm = sample();
        assert!(cm.recall("missing").is_nan());

        let empty_row = ConfusionMatrix::new(
            vec![vec![1.0, 0.0], vec![0.0, 0.0]],
            labels(&["A", "B"]),
            labels(&["A", "B"]),
            "",
        )
        .unwrap();
        assert!(empty_row.recall("B").is_nan());
    }

    #[test]
    fn test_recall_freqs_skips_empty_rows() {
        let cm = ConfusionMatrix::new(
            vec![vec![1.0, 0.0], vec![0.0, 0.0]],
            labels(&["A", "B"]),
            labels(&["A", "B"]),
            "",
        )
        .unwrap();
        let names: Vec<_> = cm.recall_freqs().map(|(name, _, _)| name).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_macro_recall() {
        let cm = sample();
        let avg = cm.macro_recall(None);
        assert_relative_eq!(avg.mean, 0.85);
        assert_relative_eq!(avg.std_dev, 0.05, epsilon = 1e-12);
        assert_eq!(avg.count, 2);
    }

    #[test]
    fn test_macro_recall_ignore_class() {
        let cm = sample();
        let avg = cm.macro_recall(Some("B"));
        assert_relative_eq!(avg.mean, 0.8);
        assert_eq!(avg.count, 1);
    }

    #[test]
    fn test_macro_recall_no_eligible_classes() {
        let cm = ConfusionMatrix::new(
            vec![vec![0.0], vec![0.0]],
            labels(&["A", "B"]),
            labels(&["A"]),
            "",
        )
        .unwrap();
        let avg = cm.macro_recall(None);
        assert!(avg.mean.is_nan());
        assert!(avg.std_dev.is_nan());
        assert_eq!(avg.count, 0);
    }

    #[test]
    fn test_micro_recall_equals_accuracy() {
        let cm = sample();
        assert_relative_eq!(cm.micro_recall(None), 0.85);
        assert_relative_eq!(cm.micro_recall(None), cm.accuracy(None));
    }

    #[test]
    fn test_micro_recall_zero_total_is_nan() {
        let cm = ConfusionMatrix::new(vec![vec![0.0]], labels(&["A"]), labels(&["A"]), "")
            .unwrap();
        assert!(cm.micro_recall(None).is_nan());
    }
}
