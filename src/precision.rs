//! Precision statistics: how pure each predicted class is
//!
//! Precision mirrors recall along columns. For a column label `l`, `size` is
//! the column total and `correct` is the weight in the row also named `l`.
//! Macro-precision additionally supports truncation to the largest predicted
//! classes, with ties at the boundary size always included.

use crate::average::MacroAverage;
use crate::confusion::ConfusionMatrix;
use crate::error::{EvalError, Result};
use crate::truncate::Truncate;

impl ConfusionMatrix {
    /// Column total and correctly assigned weight for one predicted class
    ///
    /// A missing column label yields `(0.0, 0.0)`; a column without a
    /// same-named row has `correct = 0.0`.
    pub fn precision_freq(&self, label: &str) -> (f64, f64) {
        let Some(c) = self.col_index_of(label) else {
            return (0.0, 0.0);
        };
        let size = self.col_sum(c);
        let correct = match self.row_index_of(label) {
            Some(r) => self.weight_at(r, c),
            None => 0.0,
        };
        (size, correct)
    }

    /// Precision for one predicted class; NaN when missing or empty
    pub fn precision(&self, label: &str) -> f64 {
        let (size, correct) = self.precision_freq(label);
        correct / size
    }

    /// Iterate `(label, size, correct)` over all non-empty predicted classes
    pub fn precision_freqs(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.col_labels().iter().enumerate().filter_map(move |(c, name)| {
            let size = self.col_sum(c);
            if size == 0.0 {
                return None;
            }
            let correct = match self.row_index_of(name) {
                Some(r) => self.weight_at(r, c),
                None => 0.0,
            };
            Some((name.as_str(), size, correct))
        })
    }

    /// Iterate `(label, precision)` over all non-empty predicted classes
    pub fn precisions(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.precision_freqs()
            .map(|(name, size, correct)| (name, correct / size))
    }

    /// Unweighted mean and population std dev of per-class precision
    ///
    /// Classes named `ignore` and empty classes are excluded. With
    /// [`Truncate::Largest`] or [`Truncate::Fraction`] the average is
    /// restricted to the largest predicted classes by size; classes tying
    /// in size with the last included one are also included. A fraction
    /// outside the open interval (0, 1) is rejected.
    pub fn macro_precision(
        &self,
        ignore: Option<&str>,
        truncate: Truncate,
    ) -> Result<MacroAverage> {
        let mut classes: Vec<(f64, f64)> = self
            .precision_freqs()
            .filter(|(name, _, _)| Some(*name) != ignore)
            .map(|(_, size, correct)| (size, correct / size))
            .collect();

        let values: Vec<f64> = match truncate {
            Truncate::None | Truncate::Largest(0) => {
                classes.iter().map(|&(_, prec)| prec).collect()
            }
            Truncate::Fraction(fraction) => {
                if !(fraction > 0.0 && fraction < 1.0) {
                    return Err(EvalError::InvalidTruncate(fraction));
                }
                let total: f64 = classes.iter().map(|&(size, _)| size).sum();
                classes.sort_by(|a, b| b.0.total_cmp(&a.0));
                let threshold = (total * fraction).ceil();
                let mut selected = Vec::new();
                let mut cum_size = 0.0;
                let mut last_size = 0.0;
                for &(size, prec) in &classes {
                    if cum_size > threshold && size < last_size {
                        break;
                    }
                    selected.push(prec);
                    cum_size += size;
                    last_size = size;
                }
                selected
            }
            Truncate::Largest(n) => {
                classes.sort_by(|a, b| b.0.total_cmp(&a.0));
                if n >= classes.len() {
                    classes.iter().map(|&(_, prec)| prec).collect()
                } else {
                    let boundary = classes[n - 1].0;
                    let mut selected: Vec<f64> =
                        classes[..n].iter().map(|&(_, prec)| prec).collect();
                    // Size-ties with the n-th class stay in.
                    selected.extend(
                        classes[n..]
                            .iter()
                            .take_while(|&&(size, _)| size >= boundary)
                            .map(|&(_, prec)| prec),
                    );
                    selected
                }
            }
        };

        Ok(MacroAverage::of(&values))
    }

    /// Size-weighted precision over all non-ignored classes
    ///
    /// Equals [`accuracy`] and [`micro_recall`]; NaN when the eligible
    /// total is zero.
    ///
    /// [`accuracy`]: ConfusionMatrix::accuracy
    /// [`micro_recall`]: ConfusionMatrix::micro_recall
    pub fn micro_precision(&self, ignore: Option<&str>) -> f64 {
        let mut total_size = 0.0;
        let mut total_correct = 0.0;
        for (name, size, correct) in self.precision_freqs() {
            if Some(name) != ignore {
                total_size += size;
                total_correct += correct;
            }
        }
        total_correct / total_size
    }
}
