//! Indented formatter
//!
//! One node per line, each child indented one unit deeper than its parent. No connectors;
//! useful for diffing and grepping.

use crate::cfront::ast::AstSnapshot;
use crate::cfront::formats::registry::{FormatError, Formatter};
use crate::cfront::formats::treeviz::node_line;

pub const DEFAULT_INDENT_WIDTH: usize = 2;

pub fn to_indented_str_with_width(snapshot: &AstSnapshot, indent_width: usize) -> String {
    let unit = " ".repeat(indent_width);
    let mut output = String::new();
    let mut stack = vec![(snapshot, 0)];
    while let Some((snapshot, depth)) = stack.pop() {
        output.push_str(&unit.repeat(depth));
        output.push_str(&node_line(snapshot, 0));
        output.push('\n');
        stack.extend(snapshot.children.iter().rev().map(|child| (child, depth + 1)));
    }
    output
}

pub fn to_indented_str(snapshot: &AstSnapshot) -> String {
    to_indented_str_with_width(snapshot, DEFAULT_INDENT_WIDTH)
}

pub struct IndentedFormatter {
    indent_width: usize,
}

impl IndentedFormatter {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

impl Default for IndentedFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl Formatter for IndentedFormatter {
    fn name(&self) -> &str {
        "indented"
    }

    fn serialize(&self, snapshot: &AstSnapshot) -> Result<String, FormatError> {
        Ok(to_indented_str_with_width(snapshot, self.indent_width))
    }

    fn description(&self) -> &str {
        "Plain indented listing, one node per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_indent_one_unit() {
        let snapshot = AstSnapshot::new("Program", "1 statement").with_child(
            AstSnapshot::new("Assignment", "int x").with_child(
                AstSnapshot::new("BinaryOp", "*")
                    .with_child(AstSnapshot::new("Number", "2"))
                    .with_child(AstSnapshot::new("Identifier", "y")),
            ),
        );
        let expected = "\
Program: 1 statement
  Assignment: int x
    BinaryOp: *
      Number: 2
      Identifier: y
";
        assert_eq!(to_indented_str(&snapshot), expected);
    }

    #[test]
    fn test_custom_unit() {
        let snapshot = AstSnapshot::new("a", "").with_child(AstSnapshot::new("b", ""));
        assert_eq!(to_indented_str_with_width(&snapshot, 4), "a\n    b\n");
        assert_eq!(to_indented_str_with_width(&snapshot, 0), "a\nb\n");
    }

    #[test]
    fn test_deep_chain_with_flat_unit() {
        let mut snapshot = AstSnapshot::new("Number", "0");
        for i in 1..50_000 {
            snapshot = AstSnapshot::new("BinaryOp", "-")
                .with_child(snapshot)
                .with_child(AstSnapshot::new("Number", i.to_string()));
        }
        let output = to_indented_str_with_width(&snapshot, 0);
        assert_eq!(output.lines().count(), 99_999);
        assert!(output.starts_with("BinaryOp: -\nBinaryOp: -\n"));
        assert!(output.ends_with("Number: 49999\n"));
    }

    #[test]
    fn test_labels_are_not_truncated() {
        let label = "x".repeat(50);
        let snapshot = AstSnapshot::new("Identifier", label.clone());
        assert_eq!(
            to_indented_str(&snapshot),
            format!("Identifier: {}\n", label)
        );
    }
}
