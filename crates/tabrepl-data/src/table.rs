//! String tables with a header row.
//!
//! A [`Table`] stores its header as row 0 followed by the data rows, all of
//! the same width. Width is checked once, in [`Table::from_rows`]; every
//! accessor afterwards relies on it.

use crate::error::{Error, Result};
use serde::Serialize;

/// One row of cells.
pub type Row = Vec<String>;

/// A header row plus data rows of equal width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from rows, the first of which is the header.
    ///
    /// # Errors
    ///
    /// - `Error::MissingHeader` if `rows` is empty
    /// - `Error::RaggedRow` if any row's width differs from the header's
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let Some(header) = rows.first() else {
            return Err(Error::MissingHeader);
        };
        let expected = header.len();

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::RaggedRow {
                row,
                expected,
                found,
            });
        }

        Ok(Self { rows })
    }

    /// Build a table from string-slice literals.
    ///
    /// # Errors
    ///
    /// Same as [`Table::from_rows`].
    pub fn from_literal(rows: &[&[&str]]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    /// The header row (column names).
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`, where the header is row 0.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Position of the first header cell equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header().iter().position(|column| column == name)
    }
}
