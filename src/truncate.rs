//! Truncation strategies for macro-precision

/// Selection of predicted classes for macro-precision
///
/// Truncation restricts the average to the largest predicted classes by
/// size, so that a flood of tiny bins cannot dominate an unweighted mean.
/// Classes tying in size with the last included one are always included,
/// preventing an arbitrary cut mid-tie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Truncate {
    /// Average over all eligible classes
    None,
    /// Keep the `n` largest classes plus any size-ties with the `n`-th.
    /// `Largest(0)` behaves like `None`.
    Largest(usize),
    /// Keep the largest classes until their cumulative size exceeds
    /// `ceil(total * fraction)`; must be strictly between 0 and 1
    Fraction(f64),
}

impl Default for Truncate {
    fn default() -> Self {
        Truncate::None
    }
}
