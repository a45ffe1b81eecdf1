//! JSON output: one compact object per line.

use crate::line::Line;
use std::io;

/// Serialize one line as a single-line JSON object.
///
/// # Errors
///
/// Returns `io::ErrorKind::InvalidData` if serialization fails.
pub fn render_line(line: &Line) -> io::Result<String> {
    serde_json::to_string(line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
