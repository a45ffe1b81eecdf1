//! The `search` command.
//!
//! `search <value>` looks for `value` in every column; `search <column>
//! <value>` looks in one column, named either by header text or by 0-based
//! index. Matching is exact string equality over all rows, header included.

use crate::error::{CommandError, Result};
use crate::line::{Line, output_message, table_lines};
use crate::session::Session;
use tabrepl_data::{ColumnTarget, Table, search};

/// Column word meaning "search every column".
pub const ANY_COLUMN: &str = "anyColumn";

/// How the user named the column to search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnSelector<'a> {
    /// A header name, or [`ANY_COLUMN`].
    Name(&'a str),
    /// Anything that reads as a number.
    Number(f64),
}

impl<'a> ColumnSelector<'a> {
    /// Classify a selector: numeric if the whole text reads as a number.
    ///
    /// Numbers follow the usual loose text-to-number rules: surrounding
    /// whitespace is ignored, blank text is zero, `0x`/`0o`/`0b` prefixes
    /// select a radix, and `Infinity` (optionally signed) is the only
    /// spelled-out number. `inf`, `nan` and other words are names.
    pub fn parse(text: &'a str) -> Self {
        match parse_number(text) {
            Some(n) => ColumnSelector::Number(n),
            None => ColumnSelector::Name(text),
        }
    }

    /// Resolve against a table.
    ///
    /// A name present in the header resolves to its position even when it
    /// is [`ANY_COLUMN`]; the sentinel only means "every column" when no
    /// header cell carries that name. A number inside `[0, width)` is used
    /// as-is: whole numbers address that column, fractions address no
    /// column and so match nothing.
    ///
    /// # Errors
    ///
    /// - `CommandError::ColumnNotFound` for an unknown name
    /// - `CommandError::ColumnIndexOutOfBounds` for a number outside
    ///   `[0, width)`
    #[allow(
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn resolve(self, table: &Table) -> Result<ColumnTarget> {
        match self {
            ColumnSelector::Name(name) => match table.column_index(name) {
                Some(index) => Ok(ColumnTarget::Index(index)),
                None if name == ANY_COLUMN => Ok(ColumnTarget::AnyColumn),
                None => Err(CommandError::ColumnNotFound),
            },
            ColumnSelector::Number(n) if n < 0.0 || n >= table.width() as f64 => {
                Err(CommandError::ColumnIndexOutOfBounds)
            }
            ColumnSelector::Number(n) if n.fract() == 0.0 => Ok(ColumnTarget::Index(n as usize)),
            ColumnSelector::Number(_) => Ok(ColumnTarget::NoColumn),
        }
    }
}

/// Read `text` as a number, or `None` if it is not one.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    // Rust also reads `inf`, `infinity` and `nan`; only digits, signs, a
    // point and an exponent are accepted here.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse().ok()
}

/// Run `search` over the selected dataset.
///
/// # Errors
///
/// Checked in order:
/// - `CommandError::NoSelection` if no dataset is selected
/// - `CommandError::NoSearchTerm` if only the command word is given
/// - `CommandError::TooManySearchTerms` if more than two arguments are given
/// - column resolution errors from [`ColumnSelector::resolve`]
pub fn run(terms: &[&str], session: &Session, prefix: &str) -> Result<Vec<Line>> {
    let selected = session.selected().ok_or(CommandError::NoSelection)?;

    let (column, value) = match terms {
        [] | [_] => return Err(CommandError::NoSearchTerm),
        [_, value] => (ANY_COLUMN, *value),
        [_, column, value] => (*column, *value),
        _ => return Err(CommandError::TooManySearchTerms),
    };

    let target = ColumnSelector::parse(column).resolve(&selected.table)?;
    let rows = search(&selected.table, target, value);
    tracing::debug!(
        dataset = %selected.name,
        ?target,
        value,
        matches = rows.len(),
        "Search complete"
    );

    if rows.is_empty() {
        return Ok(vec![output_message(prefix, "Results not found.")]);
    }

    let noun = if rows.len() == 1 { "row" } else { "rows" };
    let mut lines = vec![output_message(
        prefix,
        &format!("{} {noun} found in {}.", rows.len(), selected.name),
    )];
    lines.extend(table_lines(rows));
    Ok(lines)
}
