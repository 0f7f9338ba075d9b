//! Transformers over nested time-series tables
//!
//! Every transformer follows the uniform `transform(input, optional-target)`
//! contract so it can slot into a generic fit/transform workflow. Stateless
//! transformers ignore the target table and implement `fit` as a no-op.

pub mod resize;

use crate::error::Result;
use crate::table::Table;

pub use resize::Resizer;

/// Trait for table transformers
pub trait Transformer: std::fmt::Debug {
    /// Transform a table, returning a freshly built result.
    ///
    /// `y` is an optional target table carried for interface compatibility;
    /// transformers that do not use supervision ignore it.
    fn transform(&self, x: &Table, y: Option<&Table>) -> Result<Table>;

    /// Learn from data. Stateless transformers keep the no-op default.
    fn fit(&mut self, x: &Table, y: Option<&Table>) -> Result<()> {
        let _ = (x, y);
        Ok(())
    }

    /// Learn from data and then transform it
    fn fit_transform(&mut self, x: &Table, y: Option<&Table>) -> Result<Table> {
        self.fit(x, y)?;
        self.transform(x, y)
    }
}
