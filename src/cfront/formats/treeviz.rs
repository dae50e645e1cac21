//! Treeviz formatter
//!
//! One line per node, with box drawing connectors showing the structure:
//!
//! ```text
//! Program: 2 statements
//! ├─ Declaration: int x
//! └─ Assignment: int y
//!   └─ BinaryOp: +
//!     ├─ Number: 1
//!     └─ Identifier: x
//! ```
//!
//! The last child of a node is drawn with `└─`, every other child with `├─`. Below a
//! non-last child the column continues with `│ `, below a last child with two spaces.
//! Labels longer than the configured width are cut and end in `...`.

use crate::cfront::ast::AstSnapshot;
use crate::cfront::formats::registry::{FormatError, Formatter};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

/// Cut `s` to `max_chars` characters; 0 disables truncation
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars > 0 && s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// `Type: label`, or just `Type` when the label is empty
pub(crate) fn node_line(snapshot: &AstSnapshot, label_width: usize) -> String {
    if snapshot.label.is_empty() {
        snapshot.node_type.clone()
    } else {
        format!(
            "{}: {}",
            snapshot.node_type,
            truncate(&snapshot.label, label_width)
        )
    }
}

/// A node waiting to be written: the prefix of its line and whether it is a last child
type Pending<'a> = (&'a AstSnapshot, String, bool);

/// Queue the children of `parent` so the first child is popped first
fn push_children<'a>(stack: &mut Vec<Pending<'a>>, parent: &'a AstSnapshot, prefix: &str) {
    let child_count = parent.children.len();
    for (i, child) in parent.children.iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i + 1 == child_count));
    }
}

fn format_children(output: &mut String, root: &AstSnapshot, label_width: usize) {
    let mut stack = Vec::new();
    push_children(&mut stack, root, "");
    while let Some((snapshot, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{}{} {}\n",
            prefix,
            connector,
            node_line(snapshot, label_width)
        ));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        push_children(&mut stack, snapshot, &child_prefix);
    }
}

pub fn to_treeviz_str_with_width(snapshot: &AstSnapshot, label_width: usize) -> String {
    let mut output = format!("{}\n", node_line(snapshot, label_width));
    format_children(&mut output, snapshot, label_width);
    output
}

pub fn to_treeviz_str(snapshot: &AstSnapshot) -> String {
    to_treeviz_str_with_width(snapshot, DEFAULT_LABEL_WIDTH)
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, snapshot: &AstSnapshot) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(snapshot, self.label_width))
    }

    fn description(&self) -> &str {
        "Tree drawing with box connectors, one node per line"
    }
}
