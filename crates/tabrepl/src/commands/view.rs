//! The `view` command.

use crate::error::{CommandError, Result};
use crate::line::{Line, output_message, table_lines};
use crate::session::Session;

/// Show every row of the selected dataset, header included.
///
/// # Errors
///
/// Returns `CommandError::NoSelection` if no dataset is selected.
pub fn run(session: &Session, prefix: &str) -> Result<Vec<Line>> {
    let selected = session.selected().ok_or(CommandError::NoSelection)?;

    let mut lines = vec![output_message(
        prefix,
        &format!("{} displayed.", selected.name),
    )];
    lines.extend(table_lines(selected.table.rows()));
    Ok(lines)
}
