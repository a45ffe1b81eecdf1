//! Lazily populated cache of named tables.
//!
//! A name is fetched from the underlying [`DatasetSource`] the first time it
//! is resolved and shared from the cache afterwards, so repeated resolution
//! of one name always yields the same table.

use crate::error::{Error, Result};
use crate::source::DatasetSource;
use crate::table::Table;
use std::collections::HashMap;
use std::sync::Arc;

/// Caching front for a [`DatasetSource`].
#[derive(Debug)]
pub struct Registry<S> {
    source: S,
    cache: HashMap<String, Arc<Table>>,
}

impl<S: DatasetSource> Registry<S> {
    /// Create an empty registry over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether `name` is known to the source.
    pub fn contains(&self, name: &str) -> bool {
        self.source.contains(name)
    }

    /// Whether `name` has already been resolved and cached.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Resolve `name` to its table, fetching and caching it on first use.
    ///
    /// Failed fetches are not cached; the next call tries the source again.
    ///
    /// # Errors
    ///
    /// - `Error::UnknownDataset` if the source does not know the name
    /// - any corruption error returned by the source
    pub fn resolve(&mut self, name: &str) -> Result<Arc<Table>> {
        if !self.source.contains(name) {
            return Err(Error::UnknownDataset(name.to_string()));
        }

        if let Some(table) = self.cache.get(name) {
            tracing::debug!(dataset = name, "Registry cache hit");
            return Ok(Arc::clone(table));
        }

        tracing::debug!(dataset = name, "Registry cache miss, fetching from source");
        let table = match self.source.fetch(name) {
            Ok(table) => Arc::new(table),
            Err(e) => {
                tracing::warn!(dataset = name, error = %e, "Dataset could not be loaded");
                return Err(e);
            }
        };
        self.cache.insert(name.to_string(), Arc::clone(&table));
        Ok(table)
    }

    /// Drop every cached table.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
