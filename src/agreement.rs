//! Whole-matrix agreement: accuracy, misclassification rate and Rand indices

use crate::confusion::ConfusionMatrix;

/// Pairwise agreement between the true and predicted partitions
///
/// `adjusted` corrects for chance agreement under the random-labeling
/// baseline; it is NaN when the matrix carries no item pairs or when the
/// correction denominator vanishes (degenerate one-cluster agreement).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandScore {
    /// Plain Rand index
    pub rand: f64,
    /// Adjusted Rand index
    pub adjusted: f64,
}

/// Unnormalized pair count; the constant 1/2 cancels in every ratio
fn pair(x: f64) -> f64 {
    x * (x - 1.0)
}

impl ConfusionMatrix {
    /// Fraction of non-ignored weight assigned to the same-named column
    ///
    /// NaN when the non-ignored total is zero.
    pub fn accuracy(&self, ignore: Option<&str>) -> f64 {
        let mut total_size = 0.0;
        let mut total_correct = 0.0;
        for (r, name) in self.row_labels().iter().enumerate() {
            if Some(name.as_str()) == ignore {
                continue;
            }
            total_size += self.row_sum(r);
            if let Some(c) = self.col_index_of(name) {
                total_correct += self.weight_at(r, c);
            }
        }
        total_correct / total_size
    }

    /// Fraction of non-ignored weight assigned to a wrong, non-ignored column
    ///
    /// Weight falling into the ignore-named column counts as rejected, not
    /// misclassified. NaN when the non-ignored total is zero.
    pub fn misclassification_rate(&self, ignore: Option<&str>) -> f64 {
        let ignore_col = ignore.and_then(|name| self.col_index_of(name));
        let mut total_size = 0.0;
        let mut total_correct = 0.0;
        let mut total_rejected = 0.0;
        for (r, name) in self.row_labels().iter().enumerate() {
            if Some(name.as_str()) == ignore {
                continue;
            }
            total_size += self.row_sum(r);
            if let Some(c) = self.col_index_of(name) {
                total_correct += self.weight_at(r, c);
            }
            if let Some(c) = ignore_col {
                total_rejected += self.weight_at(r, c);
            }
        }
        (total_size - total_correct - total_rejected) / total_size
    }

    /// Rand index and adjusted Rand index between the two partitions
    ///
    /// Rows and columns named `ignore` are left out entirely. Both scores
    /// are NaN when fewer than two items of weight remain.
    pub fn rand_index(&self, ignore: Option<&str>) -> RandScore {
        let mut all_pair_sum = 0.0;
        let mut row_pair_sum = 0.0;
        let mut grand_total = 0.0;
        let mut col_sums = vec![0.0; self.n_cols()];

        for (r, rname) in self.row_labels().iter().enumerate() {
            if Some(rname.as_str()) == ignore {
                continue;
            }
            let mut row_sum = 0.0;
            for (c, cname) in self.col_labels().iter().enumerate() {
                if Some(cname.as_str()) == ignore {
                    continue;
                }
                let w = self.weight_at(r, c);
                all_pair_sum += pair(w);
                row_sum += w;
                col_sums[c] += w;
            }
            grand_total += row_sum;
            row_pair_sum += pair(row_sum);
        }
        let col_pair_sum: f64 = col_sums.iter().map(|&s| pair(s)).sum();

        let total_pair_sum = pair(grand_total);
        if total_pair_sum == 0.0 {
            return RandScore {
                rand: f64::NAN,
                adjusted: f64::NAN,
            };
        }

        let rand = 1.0 + (2.0 * all_pair_sum - row_pair_sum - col_pair_sum) / total_pair_sum;

        let expected_term = row_pair_sum * col_pair_sum / total_pair_sum;
        let denominator = (row_pair_sum + col_pair_sum) / 2.0 - expected_term;
        let adjusted = if denominator == 0.0 {
            f64::NAN
        } else {
            (all_pair_sum - expected_term) / denominator
        };

        RandScore { rand, adjusted }
    }
}
