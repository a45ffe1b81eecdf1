//! Terminal text output.
//!
//! Messages are wrapped to the content width and colored by level. Each
//! contiguous run of data lines is laid out as one aligned block, columns
//! separated by two spaces, so `view` and `search` results read as a table.

use super::OutputConfig;
use super::color::{colorize_message, dimmed};
use crate::line::Line;
use std::io::{self, Write};

const COLUMN_GAP: &str = "  ";

/// Write lines as terminal text.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_lines<W: Write>(w: &mut W, lines: &[Line], config: &OutputConfig) -> io::Result<()> {
    let width = config.content_width();

    for group in lines.chunk_by(|a, b| a.is_data() && b.is_data()) {
        match &group[0] {
            Line::Data { .. } => write_block(w, group, config)?,
            Line::Message { text, level } => {
                for part in wrap_text(text, width) {
                    writeln!(w, "{}", colorize_message(&part, *level, config))?;
                }
            }
            Line::Command { text } => {
                writeln!(w, "{}", dimmed(&format!("Command: {text}"), config))?;
            }
        }
    }
    Ok(())
}

/// Write a run of data lines with every column padded to its widest cell.
fn write_block<W: Write>(w: &mut W, rows: &[Line], config: &OutputConfig) -> io::Result<()> {
    let rows: Vec<&[String]> = rows
        .iter()
        .filter_map(|line| match line {
            Line::Data { cells } => Some(cells.as_slice()),
            _ => None,
        })
        .collect();
    let widths = column_widths(&rows);
    let gap = dimmed(COLUMN_GAP, config);

    for cells in rows {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                out.push_str(&gap);
            }
            out.push_str(cell);
            if i + 1 < cells.len() {
                let pad = widths[i].saturating_sub(cell.chars().count());
                out.extend(std::iter::repeat_n(' ', pad));
            }
        }
        writeln!(w, "{out}")?;
    }
    Ok(())
}

fn column_widths(rows: &[&[String]]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for cells in rows {
        for (i, cell) in cells.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, max_width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}
