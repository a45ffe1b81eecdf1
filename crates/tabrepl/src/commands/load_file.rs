//! The `load_file` command.

use crate::error::{CommandError, Result};
use crate::line::{Line, output_message};
use crate::session::Session;
use tabrepl_data::{DatasetSource, Registry};

/// Select the dataset named by `terms[1]`.
///
/// Terms after the name are ignored. On failure the previous selection is
/// left untouched.
///
/// # Errors
///
/// Checked in order:
/// - `CommandError::MissingFilePath` if no name is given
/// - `CommandError::InvalidFilePath` if the registry does not know the name
/// - `CommandError::Corrupted` if the name is known but its table is unusable
pub fn run<S: DatasetSource>(
    terms: &[&str],
    session: &mut Session,
    registry: &mut Registry<S>,
    prefix: &str,
) -> Result<Vec<Line>> {
    let Some(&name) = terms.get(1) else {
        return Err(CommandError::MissingFilePath);
    };

    if !registry.contains(name) {
        return Err(CommandError::InvalidFilePath);
    }

    let table = registry.resolve(name).map_err(|e| {
        if e.is_corruption() {
            CommandError::Corrupted
        } else {
            CommandError::InvalidFilePath
        }
    })?;

    session.select(name, table);
    tracing::debug!(dataset = name, "Dataset selected");

    Ok(vec![output_message(prefix, &format!("{name} is loaded."))])
}
