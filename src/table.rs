//! Table module - Nested container of time series
//!
//! A `Table` is a two-dimensional container with named columns where every
//! cell holds one variable-length time series, mirroring the "nested
//! dataframe" layout used by time-series feature extraction tooling. All
//! columns of a table share the same row count; that invariant is enforced
//! whenever a column is added.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One time series occupying a single row/column position of a table.
pub type Cell = Vec<f64>;

/// A named, ordered column of time-series cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
}

impl Column {
    /// Create a new column from a name and its cells
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Column {
            name: name.into(),
            cells,
        }
    }

    /// Name of the column
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cells of the column, in row order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of rows (cells) in the column
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Two-dimensional container of time-series cells with named columns and
/// ordered rows.
///
/// # Example
/// ```
/// use tsframe::{Column, Table};
///
/// let mut table = Table::new();
/// table
///     .add_column(Column::new("dim_0", vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]))
///     .unwrap();
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column_names(), vec!["dim_0"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Table {
            columns: Vec::new(),
        }
    }

    /// Append a column to the table.
    ///
    /// The first column fixes the table's row count; every later column must
    /// match it. Column names must be unique.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(Error::DuplicateColumnName(column.name));
        }
        if let Some(first) = self.columns.first() {
            if column.len() != first.len() {
                return Err(Error::InconsistentRowCount {
                    expected: first.len(),
                    found: column.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// All columns, in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names, in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows shared by every column (0 for an empty table)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
