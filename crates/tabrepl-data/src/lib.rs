//! Tabular datasets for the tabrepl command interpreter.
//!
//! This library provides the data half of tabrepl: string tables with a
//! header row, read-only providers of named tables, a caching registry in
//! front of those providers, and the exact-match row search used by the
//! `search` command.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builtin;
pub mod error;
pub mod registry;
pub mod search;
pub mod source;
pub mod table;

pub use builtin::BuiltinDatasets;
pub use error::{Error, Result};
pub use registry::Registry;
pub use search::{ColumnTarget, search};
pub use source::DatasetSource;
pub use table::{Row, Table};
