//! Per-session state.
//!
//! A [`Session`] holds the currently selected dataset and the output mode.
//! It is an ordinary value owned by the caller and passed into every command
//! handler; there is no process-wide state.

use std::sync::Arc;
use tabrepl_data::Table;

/// Prefix put in front of message lines in verbose mode.
pub const VERBOSE_PREFIX: &str = "Output: ";

/// The dataset chosen by the last successful `load_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Name the dataset was loaded under.
    pub name: String,
    /// The loaded table, header included.
    pub table: Arc<Table>,
}

/// Mutable record of the selected table and display mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selected: Option<Selection>,
    verbose: bool,
}

impl Session {
    /// A fresh session: nothing selected, brief mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session starting in the given mode.
    pub fn with_verbose(verbose: bool) -> Self {
        Self {
            selected: None,
            verbose,
        }
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// Whether a dataset is selected.
    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Replace the selection wholesale.
    pub fn select(&mut self, name: impl Into<String>, table: Arc<Table>) {
        self.selected = Some(Selection {
            name: name.into(),
            table,
        });
    }

    /// Whether messages are prefixed.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Flip between brief and verbose mode, returning the new mode.
    pub fn toggle_verbose(&mut self) -> bool {
        self.verbose = !self.verbose;
        self.verbose
    }

    /// Prefix for message lines in the current mode.
    pub fn output_prefix(&self) -> &'static str {
        if self.verbose { VERBOSE_PREFIX } else { "" }
    }

    /// Return to the initial state, keeping nothing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
