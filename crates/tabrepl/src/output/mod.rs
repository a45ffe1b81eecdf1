//! Output formatting for evaluated lines.
//!
//! This module renders [`Line`]s in one of three formats:
//!
//! - [`html`]: table-row fragments for a browser-side log
//! - [`text`]: coloured, column-aligned terminal output
//! - [`json`]: one JSON object per line for programmatic use
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors)

pub mod color;
pub mod html;
pub mod json;
pub mod text;

use crate::line::Line;
use std::fmt;
use std::io::{self, Write};

// ============================================================================
// Output Configuration
// ============================================================================

/// Default wrap width for text output.
pub const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Configuration for text formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for message wrapping.
    pub max_width: usize,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(max_width: usize, use_colors: bool) -> Self {
        Self {
            max_width,
            use_colors,
        }
    }

    /// Width available for wrapped text: the configured maximum, capped by
    /// the terminal width when one is detected.
    pub fn content_width(&self) -> usize {
        get_terminal_width().min(self.max_width)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(DEFAULT_TERMINAL_WIDTH, |(w, _)| w.0)
        .into()
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal text
    #[default]
    Text,
    /// HTML table-row fragments
    Html,
    /// JSON, one object per line
    Json,
}

impl OutputFormat {
    /// Parse a format name (`text`, `html`, `json`), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Text, Self::Html, Self::Json]
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }

    /// The format's name.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Write a batch of lines in the given format.
///
/// # Errors
///
/// Returns any error from the underlying writer, or from JSON serialization.
pub fn write_lines<W: Write>(
    w: &mut W,
    lines: &[Line],
    format: OutputFormat,
    config: &OutputConfig,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::write_lines(w, lines, config),
        OutputFormat::Html => {
            for line in lines {
                writeln!(w, "{}", html::render_line(line))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            for line in lines {
                writeln!(w, "{}", json::render_line(line)?)?;
            }
            Ok(())
        }
    }
}
