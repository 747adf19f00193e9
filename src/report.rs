//! Summary reporting over one or many matrices
//!
//! Reporting renders the metric surface into the tab-separated rows the
//! benchmark pipeline concatenates across tools, or into JSON.

use serde::Serialize;

use crate::average::MacroAverage;
use crate::confusion::ConfusionMatrix;
use crate::error::Result;
use crate::truncate::Truncate;

/// All aggregate metrics of one matrix
#[derive(Clone, Debug, Serialize)]
pub struct EvalSummary {
    pub title: String,
    pub accuracy: f64,
    pub misclassification_rate: f64,
    pub macro_recall: MacroAverage,
    pub micro_recall: f64,
    pub macro_precision: MacroAverage,
    pub micro_precision: f64,
    pub entropy: f64,
    pub rand: f64,
    pub adjusted_rand: f64,
}

/// Compute every aggregate metric of `cm` in one pass
pub fn summarize(
    cm: &ConfusionMatrix,
    ignore: Option<&str>,
    truncate: Truncate,
) -> Result<EvalSummary> {
    let rand = cm.rand_index(ignore);
    Ok(EvalSummary {
        title: cm.title().to_string(),
        accuracy: cm.accuracy(ignore),
        misclassification_rate: cm.misclassification_rate(ignore),
        macro_recall: cm.macro_recall(ignore),
        micro_recall: cm.micro_recall(ignore),
        macro_precision: cm.macro_precision(ignore, truncate)?,
        micro_precision: cm.micro_precision(ignore),
        entropy: cm.entropy(ignore),
        rand: rand.rand,
        adjusted_rand: rand.adjusted,
    })
}

/// Header line matching [`EvalSummary::to_tsv_row`]
pub fn tsv_header() -> String {
    [
        "title",
        "accuracy",
        "misclassification_rate",
        "macro_recall",
        "macro_recall_std",
        "macro_recall_classes",
        "macro_precision",
        "macro_precision_std",
        "macro_precision_classes",
        "entropy",
        "rand",
        "adjusted_rand",
    ]
    .join("\t")
}

impl EvalSummary {
    /// Render as one tab-separated report row
    pub fn to_tsv_row(&self) -> String {
        format!(
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{}\t{:.6}\t{:.6}\t{}\t{:.6}\t{:.6}\t{:.6}",
            self.title,
            self.accuracy,
            self.misclassification_rate,
            self.macro_recall.mean,
            self.macro_recall.std_dev,
            self.macro_recall.count,
            self.macro_precision.mean,
            self.macro_precision.std_dev,
            self.macro_precision.count,
            self.entropy,
            self.rand,
            self.adjusted_rand,
        )
    }
}

/// Per-class table of sizes, recall and precision
///
/// Labels appearing on both axes are listed once; recall comes from the row
/// of that name, precision from the column. Missing or empty counterparts
/// show as NaN.
pub fn class_table(cm: &ConfusionMatrix, ignore: Option<&str>) -> String {
    let mut out = String::from("class\trecall_size\trecall\tprecision_size\tprecision\n");
    let mut seen: Vec<&str> = Vec::new();
    for name in cm.row_labels().iter().chain(cm.col_labels()) {
        if Some(name.as_str()) == ignore || seen.contains(&name.as_str()) {
            continue;
        }
        seen.push(name);
        let (rsize, _) = cm.recall_freq(name);
        let (psize, _) = cm.precision_freq(name);
        out.push_str(&format!(
            "{}\t{}\t{:.6}\t{}\t{:.6}\n",
            name,
            rsize,
            cm.recall(name),
            psize,
            cm.precision(name),
        ));
    }
    out
}
