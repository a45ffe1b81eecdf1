//! Render-ready output lines.
//!
//! Command handlers produce [`Line`]s; the `output` module turns them into
//! HTML fragments, terminal text, or JSON. A line is either a message (one
//! text cell), a data row (one cell per column), or the echo of a command
//! shown in verbose mode.

use serde::Serialize;

/// Whether a message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Normal outcome.
    Info,
    /// A command error.
    Error,
}

/// One rendered unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Line {
    /// Echo of the command line, emitted in verbose mode.
    Command {
        /// The raw command line.
        text: String,
    },
    /// A message with its prefix already applied.
    Message {
        /// Prefix and content.
        text: String,
        /// Outcome of the message.
        level: Level,
    },
    /// A table row.
    Data {
        /// Cells in column order.
        cells: Vec<String>,
    },
}

impl Line {
    /// Whether this line is a table row.
    pub fn is_data(&self) -> bool {
        matches!(self, Line::Data { .. })
    }
}

/// A message line whose text is `prompt` immediately followed by `content`.
pub fn output_message(prompt: &str, content: &str) -> Line {
    Line::Message {
        text: format!("{prompt}{content}"),
        level: Level::Info,
    }
}

/// An error message line, `prompt` immediately followed by `content`.
pub fn error_message(prompt: &str, content: &str) -> Line {
    Line::Message {
        text: format!("{prompt}{content}"),
        level: Level::Error,
    }
}

/// One data line per row, cells in column order.
pub fn table_lines<'r, I>(rows: I) -> Vec<Line>
where
    I: IntoIterator<Item = &'r Vec<String>>,
{
    rows.into_iter()
        .map(|row| Line::Data { cells: row.clone() })
        .collect()
}

/// The verbose-mode echo of a command line.
pub fn command_echo(command: &str) -> Line {
    Line::Command {
        text: command.to_string(),
    }
}
