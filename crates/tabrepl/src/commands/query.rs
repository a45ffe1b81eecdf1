//! The `query` command.
//!
//! There is no query language behind this command. It recognizes exactly
//! one expression against the `burgers` dataset and answers it with a fixed
//! row; everything else is reported as unsupported, with suggestions for
//! the one form that works.

use crate::error::{CommandError, Result};
use crate::line::{Line, output_message, table_lines};
use crate::session::Session;

/// The only dataset `query` answers for.
pub const EXAMPLE_DATASET: &str = "burgers";

/// The only expression `query` answers.
pub const EXAMPLE_QUERY: &str =
    "AND('Lettuce, Tomato, Onion, Pickles' in 'Toppings', '900' in Calories')";

/// Row of [`EXAMPLE_DATASET`] (header is row 0) returned for [`EXAMPLE_QUERY`].
const EXAMPLE_ROW: usize = 1;

/// Query text of a `query` command line: everything after `query `.
pub fn query_text(command: &str) -> &str {
    command.strip_prefix("query ").unwrap_or("")
}

/// Answer `query` against the selected dataset.
///
/// # Errors
///
/// - `CommandError::NoSelection` if no dataset is selected
/// - `CommandError::UnsupportedQuery` for any other dataset or expression
pub fn run(query: &str, session: &Session, prefix: &str) -> Result<Vec<Line>> {
    let selected = session.selected().ok_or(CommandError::NoSelection)?;

    if selected.name != EXAMPLE_DATASET || query != EXAMPLE_QUERY {
        return Err(CommandError::UnsupportedQuery(query.to_string()));
    }
    let row = selected
        .table
        .row(EXAMPLE_ROW)
        .ok_or_else(|| CommandError::UnsupportedQuery(query.to_string()))?;

    let mut lines = vec![output_message(
        prefix,
        &format!("1 row found in {EXAMPLE_DATASET}."),
    )];
    lines.extend(table_lines([row]));
    Ok(lines)
}
