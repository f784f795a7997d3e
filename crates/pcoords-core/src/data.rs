// File: crates/pcoords-core/src/data.rs
// Summary: Rectangular observation matrix with optional named columns.

use crate::error::{PcoordsError, Result};

/// Numeric table of shape (n_rows x n_cols). Rows are instances, columns
/// are features. Column names are optional; when present the resolver
/// uses them as feature names.
#[derive(Clone, Debug)]
pub struct DataTable {
    rows: Vec<Vec<f64>>,
    columns: Option<Vec<String>>,
    n_cols: usize,
}

impl DataTable {
    /// Build a table from rows, enforcing rectangularity.
    /// An empty table (zero rows) has zero columns.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(PcoordsError::RaggedRow {
                    row: idx,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { rows, columns: None, n_cols })
    }

    /// Attach column names. Count must match the column count.
    pub fn with_columns(mut self, columns: Vec<String>) -> Result<Self> {
        if columns.len() != self.n_cols {
            return Err(PcoordsError::ShapeMismatch {
                expected: self.n_cols,
                actual: columns.len(),
            });
        }
        self.columns = Some(columns);
        Ok(self)
    }

    pub fn n_rows(&self) -> usize { self.rows.len() }

    pub fn n_cols(&self) -> usize { self.n_cols }

    /// Column names, if the table carries them.
    pub fn column_names(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    pub fn row(&self, idx: usize) -> &[f64] { &self.rows[idx] }
}
