//! Entropy-based cluster quality
//!
//! Each predicted class (cluster) contributes its size-weighted entropy over
//! the true classes it contains; the sum is normalized by the total weight
//! and by `log2` of the number of true classes. A perfectly pure clustering
//! scores 0. Follows the weighted-cluster-entropy normalization of
//! doi:10.1093/bioinformatics/btm134.

use crate::confusion::ConfusionMatrix;

impl ConfusionMatrix {
    /// Iterate `(label, h_cluster, size)` over non-ignored predicted classes
    ///
    /// `h_cluster` is the unnormalized, size-weighted entropy
    /// `-Σ w * log2(w / size)` over non-ignored rows with nonzero weight;
    /// `size` is the full column sum.
    pub fn entropy_freqs<'a>(
        &'a self,
        ignore: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a str, f64, f64)> + 'a {
        self.col_labels()
            .iter()
            .enumerate()
            .filter(move |(_, name)| Some(name.as_str()) != ignore)
            .map(move |(c, name)| {
                let size = self.col_sum(c);
                let mut h_cluster = 0.0;
                for (r, rname) in self.row_labels().iter().enumerate() {
                    if Some(rname.as_str()) == ignore {
                        continue;
                    }
                    let w = self.weight_at(r, c);
                    if w > 0.0 {
                        h_cluster -= w * (w / size).log2();
                    }
                }
                (name.as_str(), h_cluster, size)
            })
    }

    /// Normalized cluster entropy; 0 for a perfectly pure clustering
    ///
    /// NaN when fewer than two true classes remain after excluding the
    /// ignore class, or when no weight remains.
    pub fn entropy(&self, ignore: Option<&str>) -> f64 {
        let ignored_row = ignore.map_or(0, |name| usize::from(self.row_index_of(name).is_some()));
        let n_classes = self.n_rows() - ignored_row;
        if n_classes <= 1 {
            return f64::NAN;
        }

        let mut total_size = 0.0;
        let mut h = 0.0;
        for (_, h_cluster, size) in self.entropy_freqs(ignore) {
            total_size += size;
            h += h_cluster;
        }

        let denominator = total_size * (n_classes as f64).log2();
        if denominator == 0.0 {
            return f64::NAN;
        }
        h / denominator
    }
}
