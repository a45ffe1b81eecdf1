//! Command handlers.
//!
//! Each submodule implements one command word. Handlers take the
//! space-split terms of the command line (term 0 is the command word), the
//! session, and the message prefix for the current mode, and return the
//! lines to show. Failures come back as [`crate::error::CommandError`].
//!
//! # Commands
//!
//! - `mode`: toggle brief/verbose output
//! - `load_file <name>`: select a dataset
//! - `view`: show the selected dataset
//! - `search [<column>] <value>`: exact-match row search
//! - `query <expression>`: fixed-response stub

pub mod load_file;
pub mod mode;
pub mod query;
pub mod search;
pub mod view;

use std::fmt;

/// The command words the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `mode`
    Mode,
    /// `load_file`
    LoadFile,
    /// `view`
    View,
    /// `search`
    Search,
    /// `query`
    Query,
}

impl Command {
    /// All commands, in help order.
    pub const ALL: [Command; 5] = [
        Command::Mode,
        Command::LoadFile,
        Command::View,
        Command::Search,
        Command::Query,
    ];

    /// Look up a command by its exact word.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.word() == word)
    }

    /// The word that invokes this command.
    pub fn word(self) -> &'static str {
        match self {
            Command::Mode => "mode",
            Command::LoadFile => "load_file",
            Command::View => "view",
            Command::Search => "search",
            Command::Query => "query",
        }
    }

    /// One-line usage string.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Mode => "mode",
            Command::LoadFile => "load_file <name>",
            Command::View => "view",
            Command::Search => "search [<column>] <value>",
            Command::Query => "query <expression>",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}
