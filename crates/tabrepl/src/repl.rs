//! The read-evaluate-render cycle.
//!
//! A [`Repl`] owns an evaluator and one session and drives them from an
//! [`InputSource`] to an [`OutputSink`]. Each cycle runs to completion
//! before the next input is read:
//!
//! 1. read the command text
//! 2. evaluate it against the session
//! 3. in verbose mode, append an echo of the command
//! 4. append the evaluated lines
//! 5. clear the input
//!
//! # Example
//!
//! ```
//! use tabrepl::io::{MemorySink, ScriptedInput};
//! use tabrepl::repl::Repl;
//! use tabrepl_data::BuiltinDatasets;
//!
//! let mut repl = Repl::new(BuiltinDatasets, false);
//! let mut input = ScriptedInput::new(["load_file cats", "search Tiger"]);
//! let mut output = MemorySink::new();
//!
//! repl.run(&mut input, &mut output).unwrap();
//! assert_eq!(output.lines().len(), 3);
//! ```

use crate::evaluator::Evaluator;
use crate::io::{InputSource, OutputSink};
use crate::line::command_echo;
use crate::session::Session;
use std::io;
use tabrepl_data::DatasetSource;

/// Input lines that end an interactive session when exit words are enabled.
pub const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Outcome of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A command line was evaluated and rendered.
    Evaluated,
    /// The user asked to leave.
    Exit,
    /// The input source is exhausted.
    EndOfInput,
}

/// Evaluator plus session, driven cycle by cycle.
#[derive(Debug)]
pub struct Repl<S> {
    evaluator: Evaluator<S>,
    session: Session,
    start_verbose: bool,
    exit_words: bool,
}

impl<S: DatasetSource> Repl<S> {
    /// Create a REPL over `source`, starting in verbose mode if asked.
    pub fn new(source: S, verbose: bool) -> Self {
        Self {
            evaluator: Evaluator::new(source),
            session: Session::with_verbose(verbose),
            start_verbose: verbose,
            exit_words: false,
        }
    }

    /// Treat a line that is exactly `exit` or `quit` as a request to leave.
    #[must_use]
    pub fn with_exit_words(mut self, enabled: bool) -> Self {
        self.exit_words = enabled;
        self
    }

    /// The session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The evaluator.
    pub fn evaluator(&self) -> &Evaluator<S> {
        &self.evaluator
    }

    /// Run one cycle.
    ///
    /// # Errors
    ///
    /// Returns any error from reading input or appending output.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> io::Result<Step>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        let Some(command) = input.read_command()? else {
            return Ok(Step::EndOfInput);
        };

        if self.exit_words && EXIT_WORDS.contains(&command.as_str()) {
            input.clear();
            return Ok(Step::Exit);
        }

        let results = self.evaluator.evaluate(&mut self.session, &command);

        // The echo follows the mode in effect after evaluation, so the
        // command that switches to verbose is itself echoed.
        if self.session.is_verbose() {
            let mut lines = Vec::with_capacity(results.len() + 1);
            lines.push(command_echo(&command));
            lines.extend(results);
            output.append(&lines)?;
        } else {
            output.append(&results)?;
        }

        input.clear();
        Ok(Step::Evaluated)
    }

    /// Run cycles until the input is exhausted or the user exits.
    ///
    /// Returns the number of command lines evaluated.
    ///
    /// # Errors
    ///
    /// Returns the first error from reading input or appending output.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> io::Result<usize>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        let mut evaluated = 0;
        while self.step(input, output)? == Step::Evaluated {
            evaluated += 1;
        }
        tracing::debug!(evaluated, "REPL finished");
        Ok(evaluated)
    }

    /// Clear input and output, forget cached datasets, and start a fresh
    /// session in the initial mode.
    ///
    /// # Errors
    ///
    /// Returns any error from clearing the output.
    pub fn reset<I, O>(&mut self, input: &mut I, output: &mut O) -> io::Result<()>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        input.clear();
        output.clear()?;
        self.evaluator.clear_cache();
        self.session = Session::with_verbose(self.start_verbose);
        Ok(())
    }
}
