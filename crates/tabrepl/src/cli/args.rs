//! Argument structs for CLI commands.

use clap::Parser;

/// Arguments for the `repl` command
#[derive(Parser, Debug, Clone, Default)]
pub struct ReplArgs {
    /// Do not print the banner and prompt, even on a terminal
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Command lines to evaluate, in order, against one session
    ///
    /// Quote each line, e.g. `tabrepl run "load_file cats" "search Age 2"`.
    #[arg(required = true, value_name = "LINE")]
    pub lines: Vec<String>,
}

/// Arguments for the `datasets` command
#[derive(Parser, Debug, Clone, Default)]
pub struct DatasetsArgs {
    /// List names only, without column headers
    #[arg(long)]
    pub names_only: bool,
}
