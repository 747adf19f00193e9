//! Macro-average summary over per-class ratios

use serde::Serialize;

/// Unweighted average of a per-class metric
///
/// `std_dev` is the population standard deviation. An empty selection is
/// represented as `(NaN, NaN, 0)` so that batch reporting over many matrices
/// never aborts on a degenerate one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MacroAverage {
    /// Mean of the selected per-class values
    pub mean: f64,
    /// Population standard deviation of the selected values
    pub std_dev: f64,
    /// Number of classes that entered the average
    pub count: usize,
}

impl MacroAverage {
    /// Summarize a slice of per-class values
    pub(crate) fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: f64::NAN,
                std_dev: f64::NAN,
                count: 0,
            };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std_dev: var.sqrt(),
            count: values.len(),
        }
    }
}
