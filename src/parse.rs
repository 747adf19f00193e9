//! Ingestion of tab-separated confusion-matrix blocks
//!
//! The benchmark pipeline concatenates matrices into a single text stream.
//! Blank lines and `#` comments separate blocks; each block starts with a
//! `title \t col…` header line followed by `rowname \t weight…` lines until
//! a blank line or end of input.

use std::io::BufRead;

use crate::confusion::ConfusionMatrix;
use crate::error::{EvalError, Result};

/// Parse every matrix block contained in `input`
pub fn parse_matrices(input: &str) -> Result<Vec<ConfusionMatrix>> {
    let mut matrices = Vec::new();
    let mut block = BlockBuilder::default();
    for (n, line) in input.lines().enumerate() {
        block.feed(n + 1, line, &mut matrices)?;
    }
    block.finish(&mut matrices)?;
    Ok(matrices)
}

/// Read and parse matrix blocks from a buffered reader
pub fn read_matrices<R: BufRead>(reader: R) -> Result<Vec<ConfusionMatrix>> {
    let mut matrices = Vec::new();
    let mut block = BlockBuilder::default();
    for (n, line) in reader.lines().enumerate() {
        block.feed(n + 1, &line?, &mut matrices)?;
    }
    block.finish(&mut matrices)?;
    Ok(matrices)
}

/// Accumulates one block of lines into a matrix
#[derive(Default)]
struct BlockBuilder {
    header: Option<(String, Vec<String>)>,
    row_labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl BlockBuilder {
    fn feed(&mut self, n: usize, line: &str, out: &mut Vec<ConfusionMatrix>) -> Result<()> {
        if self.header.is_none() {
            // Between blocks: blank lines and comments are skipped.
            if line.is_empty() || line.starts_with('#') {
                return Ok(());
            }
            let mut fields = line.split('\t');
            let title = fields.next().unwrap_or_default().to_string();
            let col_labels: Vec<String> = fields.map(str::to_string).collect();
            self.header = Some((title, col_labels));
            return Ok(());
        }

        if line.is_empty() {
            return self.finish(out);
        }

        let mut fields = line.split('\t');
        let label = fields.next().unwrap_or_default().to_string();
        let mut weights = Vec::new();
        for field in fields {
            let w: f64 = field.parse().map_err(|_| EvalError::Parse {
                line: n,
                msg: format!("invalid weight '{field}' in row '{label}'"),
            })?;
            weights.push(w);
        }
        self.row_labels.push(label);
        self.rows.push(weights);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<ConfusionMatrix>) -> Result<()> {
        if let Some((title, col_labels)) = self.header.take() {
            let rows = std::mem::take(&mut self.rows);
            let row_labels = std::mem::take(&mut self.row_labels);
            out.push(ConfusionMatrix::new(rows, row_labels, col_labels, title)?);
        }
        Ok(())
    }
}
