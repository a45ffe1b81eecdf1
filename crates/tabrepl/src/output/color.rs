//! Color and styling helpers for terminal output.
//!
//! Semantic Color Theme:
//!   - Success:  green   (messages from commands that succeeded)
//!   - Error:    red     (`[Error]` messages)
//!   - Emphasis: bold    (interactive banner)
//!   - Muted:    dimmed  (verbose command echo, column separators)

use crate::line::Level;
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Color a message according to its level.
pub(crate) fn colorize_message(text: &str, level: Level, config: &OutputConfig) -> String {
    match level {
        Level::Info => success(text, config),
        Level::Error => error(text, config),
    }
}

/// Apply dimmed style to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
