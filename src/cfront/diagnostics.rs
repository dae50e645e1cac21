//! Source positions and error context
//!
//! Errors carry byte offsets. This module turns them into 1-based `line:column` positions
//! and numbered source excerpts for human readers:
//!
//! ```text
//!      1 | int x;
//! >>   2 | int y = 3 +;
//!        |            ^
//!      3 | int z;
//! ```

use std::fmt;

/// A position in source code, 0-based internally
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Displays 1-based, the way editors count
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Byte offset to line/column conversion for one source text
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position. Columns count bytes.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i.saturating_sub(1));

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Format source code context around an error offset
///
/// Shows 2 lines before the error, the error line with a >> marker and a caret under
/// the failing column, and 2 lines after. Lines are numbered from 1.
pub fn format_source_context(source: &str, offset: usize) -> String {
    let position = SourceLocation::new(source).byte_to_position(offset.min(source.len()));
    let lines: Vec<&str> = source.split('\n').collect();
    let error_line = position.line;

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!(
            "{} {:3} | {}\n",
            marker,
            line_num + 1,
            line.trim_end_matches('\r')
        ));
        if line_num == error_line {
            context.push_str(&format!("{:6} | {}^\n", "", " ".repeat(position.column)));
        }
    }

    context
}
