//! Length-normalizing resize transformer
//!
//! Resamples every time-series cell of a table to a fixed target length by
//! evaluating a piecewise-linear interpolant of the cell over positions
//! evenly spaced on [0, 1]. Output tables keep the input's row count and
//! column names/order; only cell lengths change.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interpolate::{interpolate_linear, linspace_unit};
use crate::table::{Cell, Column, Table};
use crate::transform::Transformer;

/// Resizes every time-series cell of a table to a fixed length.
///
/// The target length is validated once at construction and never changes.
/// A single-sample cell has no interpolation segments and is broadcast to
/// `length` copies of its sample; an empty cell fails the whole transform.
///
/// # Example
/// ```
/// use tsframe::{Column, Resizer, Table, Transformer};
///
/// let mut table = Table::new();
/// table
///     .add_column(Column::new("dim_0", vec![vec![0.0, 10.0, 20.0]]))
///     .unwrap();
///
/// let resizer = Resizer::new(5).unwrap();
/// let resized = resizer.transform(&table, None).unwrap();
/// assert_eq!(
///     resized.column("dim_0").unwrap().cells()[0],
///     vec![0.0, 5.0, 10.0, 15.0, 20.0]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResizerConfig")]
pub struct Resizer {
    length: usize,
}

/// Raw configuration shape; deserialization funnels through `Resizer::new`
/// so the length invariant holds for deserialized resizers too.
#[derive(Deserialize)]
struct ResizerConfig {
    length: usize,
}

impl TryFrom<ResizerConfig> for Resizer {
    type Error = Error;

    fn try_from(config: ResizerConfig) -> Result<Self> {
        Resizer::new(config.length)
    }
}

impl Resizer {
    /// Create a resizer with the given target length.
    ///
    /// # Arguments
    /// * `length` - Target length every output cell is resampled to
    ///
    /// # Errors
    /// Returns `Error::InvalidConfiguration` if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidConfiguration(
                "resizing length must be greater than zero".to_string(),
            ));
        }
        Ok(Resizer { length })
    }

    /// The configured target length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Resample one cell to the target length.
    ///
    /// The cell's samples are placed on positions evenly spaced over [0, 1]
    /// and the interpolant is evaluated at `length` positions on the same
    /// interval, so the first and last samples are always preserved exactly.
    pub fn resize_cell(&self, cell: &[f64]) -> Result<Cell> {
        match cell.len() {
            0 => Err(Error::EmptyCell(
                "cannot resize a time series with no samples".to_string(),
            )),
            1 => Ok(vec![cell[0]; self.length]),
            n => {
                let source = linspace_unit(n);
                let target = linspace_unit(self.length);
                Ok(interpolate_linear(&source, cell, &target))
            }
        }
    }

    fn resize_column(&self, column: &Column) -> Result<Column> {
        let cells = column
            .cells()
            .iter()
            .map(|cell| self.resize_cell(cell))
            .collect::<Result<Vec<_>>>()?;
        Ok(Column::new(column.name(), cells))
    }

    /// Parallel variant of [`Transformer::transform`].
    ///
    /// Cells are independent of one another, so they are resampled across a
    /// rayon thread pool. The result is identical to the sequential path;
    /// only the evaluation order differs.
    pub fn par_transform(&self, x: &Table) -> Result<Table> {
        let columns = x
            .columns()
            .par_iter()
            .map(|column| {
                let cells = column
                    .cells()
                    .par_iter()
                    .map(|cell| self.resize_cell(cell))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Column::new(column.name(), cells))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut result = Table::new();
        for column in columns {
            result.add_column(column)?;
        }
        Ok(result)
    }
}

impl Transformer for Resizer {
    fn transform(&self, x: &Table, _y: Option<&Table>) -> Result<Table> {
        let mut result = Table::new();
        for column in x.columns() {
            result.add_column(self.resize_column(column)?)?;
        }
        Ok(result)
    }
}
