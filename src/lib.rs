//! Confusion-matrix statistics for binning and clustering evaluation
//!
//! `evaluar` cross-tabulates predicted group membership (bins) against true
//! group membership (genomes), weighted by item size, and derives quality
//! statistics from the resulting matrix:
//!
//! - per-class and aggregate recall and precision, the latter optionally
//!   truncated to the largest predicted classes
//! - accuracy and misclassification rate
//! - entropy-based cluster quality
//! - the Rand and adjusted Rand indices
//!
//! The matrix is immutable after construction, so all statistics are pure
//! reads and shared references are safe across threads. Degenerate inputs
//! (empty classes, zero totals, single-class entropy) yield NaN instead of
//! panicking, so batch reporting over many matrices never aborts on one
//! pathological block.
//!
//! # Example
//!
//! ```
//! use evaluar::ConfusionMatrix;
//!
//! let cm = ConfusionMatrix::new(
//!     vec![vec![8.0, 2.0], vec![1.0, 9.0]],
//!     vec!["A".into(), "B".into()],
//!     vec!["A".into(), "B".into()],
//!     "example",
//! )?;
//! assert!((cm.accuracy(None) - 0.85).abs() < 1e-12);
//! assert!((cm.recall("A") - 0.8).abs() < 1e-12);
//! # Ok::<(), evaluar::EvalError>(())
//! ```

mod agreement;
mod average;
mod confusion;
mod entropy;
mod error;
mod parse;
mod precision;
mod recall;
mod report;
mod truncate;

pub mod cli;

pub use agreement::RandScore;
pub use average::MacroAverage;
pub use confusion::ConfusionMatrix;
pub use error::{EvalError, Result};
pub use parse::{parse_matrices, read_matrices};
pub use report::{class_table, summarize, tsv_header, EvalSummary};
pub use truncate::Truncate;
