//! TSFrame - Nested time-series tables with length-normalizing transformers
//!
//! This crate provides a small tabular container where every cell holds one
//! variable-length time series, plus a resize transformer that resamples
//! every cell to a fixed target length via piecewise-linear interpolation
//! over a normalized position axis.
//!
//! # Example
//! ```
//! use tsframe::{Column, Resizer, Table, Transformer};
//!
//! let mut table = Table::new();
//! table
//!     .add_column(Column::new(
//!         "sensor",
//!         vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 7.0]],
//!     ))
//!     .unwrap();
//!
//! let resizer = Resizer::new(3).unwrap();
//! let resized = resizer.transform(&table, None).unwrap();
//!
//! assert_eq!(resized.row_count(), 2);
//! for cell in resized.column("sensor").unwrap().cells() {
//!     assert_eq!(cell.len(), 3);
//! }
//! ```

pub mod error;
pub mod interpolate;
pub mod table;
pub mod transform;

// Re-export core types
pub use error::{Error, Result};
pub use table::{Cell, Column, Table};
pub use transform::{Resizer, Transformer};
