//! Command-line evaluation.
//!
//! The [`Evaluator`] owns the dataset registry and turns one command line
//! into the lines to display. The [`Session`] is passed in by the caller on
//! every call, so one evaluator can serve any number of sessions.
//!
//! # Example
//!
//! ```
//! use tabrepl::evaluator::Evaluator;
//! use tabrepl::session::Session;
//! use tabrepl_data::BuiltinDatasets;
//!
//! let mut evaluator = Evaluator::new(BuiltinDatasets);
//! let mut session = Session::new();
//!
//! evaluator.evaluate(&mut session, "load_file cats");
//! let lines = evaluator.evaluate(&mut session, "search Age 2");
//! assert_eq!(lines.len(), 2);
//! ```

use crate::commands::{self, Command};
use crate::error::{CommandError, Result};
use crate::line::{Line, error_message, output_message};
use crate::session::Session;
use tabrepl_data::{DatasetSource, Registry};

/// Dispatches command lines to their handlers.
#[derive(Debug)]
pub struct Evaluator<S> {
    registry: Registry<S>,
}

impl<S: DatasetSource> Evaluator<S> {
    /// Create an evaluator over a dataset source.
    pub fn new(source: S) -> Self {
        Self {
            registry: Registry::new(source),
        }
    }

    /// The registry backing `load_file`.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Forget every cached dataset.
    pub fn clear_cache(&mut self) {
        self.registry.clear();
    }

    /// Evaluate one command line against `session`.
    ///
    /// The line is split on single spaces; the first term picks the command.
    /// An empty line yields no output. Errors never escape: they become
    /// message lines carrying the prefix of the mode in effect before the
    /// command ran.
    pub fn evaluate(&mut self, session: &mut Session, command: &str) -> Vec<Line> {
        if command.is_empty() {
            return Vec::new();
        }

        let prefix = session.output_prefix();
        let terms: Vec<&str> = command.split(' ').collect();

        match self.dispatch(session, command, &terms, prefix) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::debug!(command = terms[0], error = %e, "Command failed");
                error_lines(prefix, &e)
            }
        }
    }

    fn dispatch(
        &mut self,
        session: &mut Session,
        command: &str,
        terms: &[&str],
        prefix: &str,
    ) -> Result<Vec<Line>> {
        let word = terms[0];
        let Some(kind) = Command::from_word(word) else {
            return Err(CommandError::InvalidCommand);
        };
        tracing::debug!(command = %kind, args = terms.len() - 1, "Dispatching command");

        match kind {
            Command::Mode => Ok(commands::mode::run(session)),
            Command::LoadFile => commands::load_file::run(terms, session, &mut self.registry, prefix),
            Command::View => commands::view::run(session, prefix),
            Command::Search => commands::search::run(terms, session, prefix),
            Command::Query => {
                commands::query::run(commands::query::query_text(command), session, prefix)
            }
        }
    }
}

/// Lines shown for a failed command: the prefixed error, then any
/// unprefixed suggestions.
pub fn error_lines(prefix: &str, error: &CommandError) -> Vec<Line> {
    std::iter::once(error_message(prefix, &error.to_string()))
        .chain(
            error
                .suggestions()
                .iter()
                .map(|suggestion| output_message("", suggestion)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabrepl_data::BuiltinDatasets;

    fn evaluator() -> Evaluator<BuiltinDatasets> {
        Evaluator::new(BuiltinDatasets)
    }

    #[test]
    fn test_empty_line_is_noop() {
        let mut session = Session::new();
        assert!(evaluator().evaluate(&mut session, "").is_empty());
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::new();
        assert_eq!(
            evaluator().evaluate(&mut session, "select * from cats"),
            [error_message("", "[Error] Command is invalid.")]
        );
    }

    #[test]
    fn test_whitespace_only_line_is_invalid() {
        let mut session = Session::new();
        assert_eq!(
            evaluator().evaluate(&mut session, " "),
            [error_message("", "[Error] Command is invalid.")]
        );
    }

    #[test]
    fn test_errors_use_current_prefix() {
        let mut session = Session::with_verbose(true);
        assert_eq!(
            evaluator().evaluate(&mut session, "view"),
            [error_message("Output: ", "[Error] No csv is selected.")]
        );
    }

    #[test]
    fn test_double_space_makes_empty_term() {
        let mut evaluator = evaluator();
        let mut session = Session::new();
        evaluator.evaluate(&mut session, "load_file cats");

        // "search  Tiger" splits into ["search", "", "Tiger"]; a blank
        // selector reads as column 0.
        let lines = evaluator.evaluate(&mut session, "search  Tiger");
        assert_eq!(lines[0], output_message("", "1 row found in cats."));
        assert!(matches!(&lines[1], Line::Data { cells } if cells[0] == "Tiger"));
    }

    #[test]
    fn test_unsupported_query_suggestions_are_unprefixed() {
        let mut evaluator = evaluator();
        let mut session = Session::with_verbose(true);
        evaluator.evaluate(&mut session, "load_file cats");

        let lines = evaluator.evaluate(&mut session, "query Name = Tiger");
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            error_message(
                "Output: ",
                "[Error] This query command is not supported in mocking."
            )
        );
        assert_eq!(
            lines[1],
            output_message("", "Try the following commands instead")
        );
        assert_eq!(lines[2], output_message("", "load_file burgers"));
        assert_eq!(
            lines[3],
            output_message("", "query Name = Tiger")
        );
    }

    #[test]
    fn test_load_file_resolution_is_cached() {
        let mut evaluator = evaluator();
        let mut session = Session::new();
        evaluator.evaluate(&mut session, "load_file cats");
        assert!(evaluator.registry().is_cached("cats"));

        evaluator.clear_cache();
        assert!(!evaluator.registry().is_cached("cats"));
    }
}
