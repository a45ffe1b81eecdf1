//! CLI value types with clap integration.
//!
//! These mirror library types but carry `ValueEnum` for argument parsing.

use crate::output::OutputFormat;
use clap::ValueEnum;

/// Output format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Coloured, column-aligned terminal text
    Text,
    /// HTML table-row fragments
    Html,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
