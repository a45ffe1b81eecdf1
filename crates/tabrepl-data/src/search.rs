//! Exact-match row search.
//!
//! The scan covers every row of the table, header included, and keeps rows
//! in their original order. Cells are compared with plain string equality:
//! no trimming, no case folding, no numeric interpretation.

use crate::table::{Row, Table};

/// Which cells of a row are compared against the search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTarget {
    /// A row matches if any of its cells equals the value.
    AnyColumn,
    /// A row matches if the cell at this index equals the value.
    Index(usize),
    /// A position that addresses no cell, such as a fraction. Matches no row.
    NoColumn,
}

/// Rows of `table` (header included) whose targeted cell equals `value`.
///
/// An [`ColumnTarget::Index`] past the table width matches nothing.
///
/// # Example
///
/// ```
/// use tabrepl_data::{search, ColumnTarget, Table};
///
/// let table = Table::from_literal(&[&["Name", "Age"], &["Fluffy", "2"], &["Tom", "20"]]).unwrap();
/// let rows = search(&table, ColumnTarget::Index(1), "2");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0][0], "Fluffy");
/// ```
pub fn search<'t>(table: &'t Table, target: ColumnTarget, value: &str) -> Vec<&'t Row> {
    table
        .rows()
        .iter()
        .filter(|row| match target {
            ColumnTarget::AnyColumn => row.iter().any(|cell| cell == value),
            ColumnTarget::Index(index) => row.get(index).is_some_and(|cell| cell == value),
            ColumnTarget::NoColumn => false,
        })
        .collect()
}
