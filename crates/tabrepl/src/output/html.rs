//! HTML table-row fragments.
//!
//! Each line becomes one `<tr>`: messages carry class `message` and a single
//! cell, data rows carry class `userData` and one cell per column, and the
//! verbose command echo carries class `outputMode`. Cell text is escaped;
//! nothing else is added between cells.

use crate::line::Line;

/// Render one line as a `<tr>` fragment.
pub fn render_line(line: &Line) -> String {
    match line {
        Line::Command { text } => {
            format!("<tr class='outputMode'><td>Command: {} </td></tr>", escape(text))
        }
        Line::Message { text, .. } => {
            format!("<tr class='message'><td>{}</td></tr>", escape(text))
        }
        Line::Data { cells } => {
            let row: String = cells
                .iter()
                .map(|cell| format!("<td>{}</td>", escape(cell)))
                .collect();
            format!("<tr class='userData'>{row}</tr>")
        }
    }
}

/// Render every line.
pub fn render_lines(lines: &[Line]) -> Vec<String> {
    lines.iter().map(render_line).collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
