//! Error types for matrix construction, truncation and ingestion

use thiserror::Error;

/// Errors raised by matrix construction, metric arguments and ingestion
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("matrix has {rows} rows but {labels} row labels")]
    RowCountMismatch { rows: usize, labels: usize },

    #[error("row '{label}' has {found} values but there are {expected} column labels")]
    RowWidthMismatch {
        label: String,
        found: usize,
        expected: usize,
    },

    #[error("duplicate {axis} label '{label}'")]
    DuplicateLabel { axis: &'static str, label: String },

    #[error("negative weight {weight} in row '{row}', column '{col}'")]
    NegativeWeight {
        row: String,
        col: String,
        weight: f64,
    },

    #[error("truncate must be an integer count or a fractional threshold strictly between 0 and 1, got {0}")]
    InvalidTruncate(f64),

    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for evaluar operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::RowCountMismatch { rows: 3, labels: 2 };
        assert!(format!("{err}").contains("3 rows"));
        assert!(format!("{err}").contains("2 row labels"));

        let err = EvalError::DuplicateLabel {
            axis: "column",
            label: "bin_0".to_string(),
        };
        assert!(format!("{err}").contains("duplicate column label"));
        assert!(format!("{err}").contains("bin_0"));

        let err = EvalError::InvalidTruncate(1.5);
        assert!(format!("{err}").contains("strictly between 0 and 1"));

        let err = EvalError::Parse {
            line: 7,
            msg: "invalid weight".to_string(),
        };
        assert!(format!("{err}").contains("line 7"));
    }
}
