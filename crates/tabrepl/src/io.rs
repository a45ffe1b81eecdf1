//! Input and output capabilities for the REPL driver.
//!
//! The evaluator knows nothing about where commands come from or where
//! results go. The driver talks to two small traits instead:
//!
//! - [`InputSource`]: read the current command text, then clear it
//! - [`OutputSink`]: append a batch of lines to the visible log, or clear it
//!
//! This module provides implementations over readers and writers (the
//! terminal), over a fixed list of commands (`tabrepl run`), and in memory
//! (tests and embedding).

use crate::line::Line;
use crate::output::{self, OutputConfig, OutputFormat};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where command text comes from.
pub trait InputSource {
    /// The current command text, or `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying input.
    fn read_command(&mut self) -> io::Result<Option<String>>;

    /// Clear the current command text.
    fn clear(&mut self);
}

/// Where evaluated lines go.
pub trait OutputSink {
    /// Append `lines`, in order, to the log.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying output.
    fn append(&mut self, lines: &[Line]) -> io::Result<()>;

    /// Remove everything from the log, where the sink supports it.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying output.
    fn clear(&mut self) -> io::Result<()>;
}

// ============================================================================
// Input Sources
// ============================================================================

/// Reads one command per line from a buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a stray byte
/// becomes an ordinary (usually invalid) command instead of a read error.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_command(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn clear(&mut self) {
        self.buf.clear();
    }
}

/// Serves a fixed list of commands in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<String>,
    current: Option<String>,
}

impl ScriptedInput {
    /// Queue `commands` to be read in order.
    pub fn new<I, T>(commands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            pending: commands.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    /// Commands not read yet.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// The text read last and not yet cleared.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl InputSource for ScriptedInput {
    fn read_command(&mut self) -> io::Result<Option<String>> {
        self.current = self.pending.pop_front();
        Ok(self.current.clone())
    }

    fn clear(&mut self) {
        self.current = None;
    }
}

// ============================================================================
// Output Sinks
// ============================================================================

/// Renders lines to a writer in a chosen format.
///
/// A stream cannot retract what it has written, so [`OutputSink::clear`]
/// only flushes.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    format: OutputFormat,
    config: OutputConfig,
}

impl<W: Write> WriterSink<W> {
    /// Render to `writer` in `format`.
    pub fn new(writer: W, format: OutputFormat, config: OutputConfig) -> Self {
        Self {
            writer,
            format,
            config,
        }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn append(&mut self, lines: &[Line]) -> io::Result<()> {
        output::write_lines(&mut self.writer, lines, self.format, &self.config)?;
        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Keeps every appended line in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<Line>,
}

impl MemorySink {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended since the last clear.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The log rendered as HTML fragments.
    pub fn html(&self) -> Vec<String> {
        output::html::render_lines(&self.lines)
    }
}

impl OutputSink for MemorySink {
    fn append(&mut self, lines: &[Line]) -> io::Result<()> {
        self.lines.extend_from_slice(lines);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.lines.clear();
        Ok(())
    }
}
