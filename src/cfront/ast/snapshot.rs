//! AST Snapshot - a normalized intermediate representation of a tree
//!
//! Every renderer consumes snapshots instead of walking `Node`s itself, so traversal order
//! is defined once, here. Parse trees convert to the same shape (see
//! [`ParseNode`](crate::cfront::parsing::ParseNode)), which lets one formatter render both.
//!
//! Operator chains are left-nested, so trees get as deep as the longest chain in the
//! source. Building, measuring and dropping snapshots uses an explicit stack instead of
//! recursion, and so do the formatters.

use super::node::Node;
use super::program::Program;
use super::traits::AstNode;
use serde::Serialize;

/// A node in normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstSnapshot {
    /// The kind of node, e.g. "BinaryOp" or "compound_statement"
    pub node_type: String,

    /// One line summary of the node's own data
    pub label: String,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of snapshots in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(snapshot) = stack.pop() {
            count += 1;
            stack.extend(&snapshot.children);
        }
        count
    }

    /// Length of the longest root-to-leaf path, counting snapshots
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((snapshot, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(snapshot.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl Drop for AstSnapshot {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut snapshot) = stack.pop() {
            stack.append(&mut snapshot.children);
        }
    }
}

/// Snapshot a tree of any node type, children in the order `children` returns them
pub(crate) fn build_snapshot<'a, T>(
    root: &'a T,
    describe: impl Fn(&'a T) -> AstSnapshot,
    children: impl Fn(&'a T) -> Vec<&'a T>,
) -> AstSnapshot {
    let open_frame = |node: &'a T| (describe(node), children(node).into_iter());
    let mut open = vec![open_frame(root)];
    while let Some((snapshot, mut pending)) = open.pop() {
        if let Some(child) = pending.next() {
            open.push((snapshot, pending));
            open.push(open_frame(child));
            continue;
        }
        match open.last_mut() {
            Some((parent, _)) => parent.children.push(snapshot),
            None => return snapshot,
        }
    }
    unreachable!("the root frame is only popped once it is complete")
}

/// Snapshot of a node and all of its descendants, children in stored order
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    build_snapshot(
        node,
        |node| AstSnapshot::new(node.node_type(), node.display_label()),
        Node::children,
    )
}

/// Snapshot rooted at the program
pub fn snapshot_from_program(program: &Program) -> AstSnapshot {
    AstSnapshot::new(program.node_type(), program.display_label())
        .with_children(program.statements.iter().map(snapshot_from_node).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfront::ast::BinaryOperator;

    #[test]
    fn test_snapshot_mirrors_tree() {
        let program = Program::new(vec![Node::compound(vec![Node::assignment(
            "int",
            "y",
            Node::binary(BinaryOperator::Multiply, Node::number(2), Node::identifier("x")),
        )])]);

        let snapshot = snapshot_from_program(&program);
        assert_eq!(snapshot.node_type, "Program");
        assert_eq!(snapshot.label, "1 statement");
        assert_eq!(snapshot.node_count(), 6);

        let compound = &snapshot.children[0];
        assert_eq!(compound.node_type, "CompoundStatement");
        assert_eq!(compound.label, "1 statement");

        let op = &compound.children[0].children[0];
        assert_eq!(op.label, "*");
        let operands: Vec<&str> = op.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(operands, vec!["2", "x"]);
    }

    #[test]
    fn test_depth_and_count() {
        let snapshot = AstSnapshot::new("a", "")
            .with_child(AstSnapshot::new("b", "").with_child(AstSnapshot::new("c", "")))
            .with_child(AstSnapshot::new("d", ""));
        assert_eq!(snapshot.depth(), 3);
        assert_eq!(snapshot.node_count(), 4);
        assert_eq!(AstSnapshot::new("a", "").depth(), 1);
    }

    #[test]
    fn test_left_nested_chain_is_snapshotted_and_dropped() {
        let mut node = Node::number(0);
        for i in 1..100_000 {
            node = Node::binary(BinaryOperator::Add, node, Node::number(i));
        }
        let snapshot = snapshot_from_node(&node);
        assert_eq!(snapshot.depth(), 100_000);
        assert_eq!(snapshot.node_count(), 199_999);
        assert_eq!(snapshot.children[1].label, "99999");
    }

    #[test]
    fn test_builder_methods() {
        let snapshot = AstSnapshot::new("a", "")
            .with_child(AstSnapshot::new("b", "1"))
            .with_children(vec![AstSnapshot::new("c", "2")]);
        assert_eq!(snapshot.children.len(), 2);
        assert_eq!(snapshot.children[1].node_type, "c");
    }
}
