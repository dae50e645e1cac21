//! Graphviz DOT formatter
//!
//! Nodes are numbered in pre-order starting at 0, so the root is always `n0` and a node's
//! id is smaller than the ids of all its descendants. Every parent/child pair becomes one
//! edge. Render with `dot -Tsvg`.

use crate::cfront::ast::AstSnapshot;
use crate::cfront::formats::registry::{FormatError, Formatter};

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn node_label(snapshot: &AstSnapshot) -> String {
    if snapshot.label.is_empty() {
        escape(&snapshot.node_type)
    } else {
        format!(
            "{}\\n{}",
            escape(&snapshot.node_type),
            escape(&snapshot.label)
        )
    }
}

pub fn to_dot_str(snapshot: &AstSnapshot) -> String {
    let mut nodes = String::new();
    let mut edges = String::new();

    // ids are handed out in pop order, which is pre-order
    let mut next_id = 0;
    let mut stack: Vec<(&AstSnapshot, Option<usize>)> = vec![(snapshot, None)];
    while let Some((snapshot, parent)) = stack.pop() {
        let id = next_id;
        next_id += 1;
        nodes.push_str(&format!("  n{} [label=\"{}\"];\n", id, node_label(snapshot)));
        if let Some(parent) = parent {
            edges.push_str(&format!("  n{} -> n{};\n", parent, id));
        }
        stack.extend(snapshot.children.iter().rev().map(|child| (child, Some(id))));
    }

    format!(
        "digraph ast {{\n  node [shape=box, fontname=\"monospace\"];\n{}{}}}\n",
        nodes, edges
    )
}

pub struct DotFormatter;

impl Formatter for DotFormatter {
    fn name(&self) -> &str {
        "dot"
    }

    fn serialize(&self, snapshot: &AstSnapshot) -> Result<String, FormatError> {
        Ok(to_dot_str(snapshot))
    }

    fn description(&self) -> &str {
        "Graphviz digraph with pre-order node ids"
    }
}
