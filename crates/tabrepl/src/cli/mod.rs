//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for tabrepl using clap's
//! derive API.
//!
//! # Commands
//!
//! - `repl`: Interactive session over stdin (the default)
//! - `run`: Evaluate command lines given as arguments
//! - `datasets`: List the built-in datasets
//!
//! # Global Flags
//!
//! - `--format <text|html|json>`: Output format
//! - `--verbose`: Start the session in verbose mode
//! - `--no-color`: Disable colored text output
//!
//! # Example
//!
//! ```bash
//! tabrepl run "load_file cats" "search Age 2"
//! tabrepl --format html run "load_file stars" view
//! echo "load_file burgers" | tabrepl repl --quiet
//! ```

mod args;
mod execute;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{DatasetsArgs, ReplArgs, RunArgs};
pub use types::FormatArg;

use crate::config::Config;

/// Tabrepl - load small tables and search their rows
///
/// Commands inside a session: mode, load_file <name>, view,
/// search [<column>] <value>, query <expression>.
#[derive(Parser, Debug)]
#[command(name = "tabrepl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides TABREPL_FORMAT)
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Start the session in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive session
    ///
    /// Reads one command per line from stdin until end of input or until a
    /// line reading `exit` or `quit`.
    Repl(ReplArgs),

    /// Evaluate command lines and exit
    ///
    /// Each argument is one command line. All lines share one session, so a
    /// `load_file` affects the lines after it.
    Run(RunArgs),

    /// List the built-in datasets
    ///
    /// Shows each dataset name with its column headers.
    Datasets(DatasetsArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns clap's error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Effective configuration: environment first, then flags.
    pub fn config(&self, mut base: Config) -> Config {
        if let Some(format) = self.format {
            base.format = format.into();
        }
        if self.verbose {
            base.verbose = true;
        }
        if self.no_color {
            base.output.use_colors = false;
        }
        base
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn execute(&self) -> Result<()> {
        let config = self.config(Config::from_env());
        tracing::debug!(format = %config.format, verbose = config.verbose, "Resolved configuration");

        match &self.command {
            Some(Commands::Repl(args)) => execute::execute_repl(args, &config),
            Some(Commands::Run(args)) => execute::execute_run(args, &config),
            Some(Commands::Datasets(args)) => execute::execute_datasets(args, &config),
            None => execute::execute_repl(&ReplArgs::default(), &config),
        }
    }
}
