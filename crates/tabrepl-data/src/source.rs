//! Read-only providers of named tables.
//!
//! A [`DatasetSource`] answers two questions: which names it knows, and what
//! table a known name stands for. It never caches; caching is the job of
//! [`crate::Registry`].

use crate::error::Result;
use crate::table::Table;

/// Read-only provider of named tables.
///
/// # Example
///
/// ```
/// use tabrepl_data::{BuiltinDatasets, DatasetSource};
///
/// let source = BuiltinDatasets;
/// assert!(source.contains("cats"));
/// let cats = source.fetch("cats").unwrap();
/// assert_eq!(cats.header()[0], "Name");
/// ```
pub trait DatasetSource {
    /// Names this source can provide, in a stable order.
    fn names(&self) -> Vec<&str>;

    /// Whether `name` is known to this source.
    fn contains(&self, name: &str) -> bool {
        self.names().contains(&name)
    }

    /// Build the table for `name`.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownDataset` if the name is not known
    /// - `Error::Corrupted`, `Error::MissingHeader` or `Error::RaggedRow` if
    ///   the name is known but its data does not form a valid table
    fn fetch(&self, name: &str) -> Result<Table>;
}

impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    fn names(&self) -> Vec<&str> {
        (**self).names()
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }

    fn fetch(&self, name: &str) -> Result<Table> {
        (**self).fetch(name)
    }
}
