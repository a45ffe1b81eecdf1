//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use std::io::{self, IsTerminal, Write};

use super::args::{DatasetsArgs, ReplArgs, RunArgs};
use crate::commands::Command;
use crate::config::Config;
use crate::io::{InputSource, LineReader, ScriptedInput, WriterSink};
use crate::line::Line;
use crate::output::{self, OutputFormat, color};
use crate::repl::Repl;
use tabrepl_data::{BuiltinDatasets, DatasetSource};

const PROMPT: &str = "> ";

/// Input source that prints a prompt before each read.
struct Prompted<I> {
    inner: I,
}

impl<I: InputSource> InputSource for Prompted<I> {
    fn read_command(&mut self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;
        self.inner.read_command()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

fn stdout_sink(config: &Config) -> WriterSink<io::Stdout> {
    WriterSink::new(io::stdout(), config.format, config.output.clone())
}

/// Execute the repl command
pub fn execute_repl(args: &ReplArgs, config: &Config) -> Result<()> {
    let interactive =
        !args.quiet && config.format == OutputFormat::Text && io::stdin().is_terminal();

    let mut repl = Repl::new(BuiltinDatasets, config.verbose).with_exit_words(true);
    let mut output = stdout_sink(config);
    let reader = LineReader::new(io::stdin().lock());

    let evaluated = if interactive {
        println!(
            "{} - type a command, or 'exit' to leave",
            color::bold(
                &format!("tabrepl {}", env!("CARGO_PKG_VERSION")),
                &config.output
            )
        );
        println!("Commands: {}", Command::ALL.map(Command::usage).join(", "));
        let datasets = repl.evaluator().registry().source().names();
        println!("Datasets: {}", datasets.join(", "));
        println!();
        repl.run(&mut Prompted { inner: reader }, &mut output)?
    } else {
        let mut reader = reader;
        repl.run(&mut reader, &mut output)?
    };

    tracing::debug!(evaluated, "Interactive session ended");
    Ok(())
}

/// Execute the run command
pub fn execute_run(args: &RunArgs, config: &Config) -> Result<()> {
    let mut repl = Repl::new(BuiltinDatasets, config.verbose);
    let mut input = ScriptedInput::new(args.lines.iter().map(String::as_str));
    let mut output = stdout_sink(config);

    repl.run(&mut input, &mut output)?;
    Ok(())
}

/// Execute the datasets command
pub fn execute_datasets(args: &DatasetsArgs, config: &Config) -> Result<()> {
    let lines = dataset_lines(&BuiltinDatasets, args.names_only);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_lines(&mut handle, &lines, config.format, &config.output)?;
    Ok(())
}

/// One data line per dataset: its name, then its column headers.
///
/// Datasets whose table cannot be built are listed with no columns.
fn dataset_lines<S: DatasetSource>(source: &S, names_only: bool) -> Vec<Line> {
    source
        .names()
        .into_iter()
        .map(|name| {
            let mut cells = vec![name.to_string()];
            if !names_only {
                match source.fetch(name) {
                    Ok(table) => cells.extend(table.header().iter().cloned()),
                    Err(e) => tracing::warn!(dataset = name, error = %e, "Skipping columns"),
                }
            }
            Line::Data { cells }
        })
        .collect()
}
