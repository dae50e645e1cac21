//! The AST node type
//!
//! `Node` is a closed set of variants; every consumer dispatches with a `match`. Each
//! variant wraps its element struct so elements can also be handled on their own.
//!
//! A long operator chain is a left-nested tree as deep as the chain, so the whole-tree
//! operations here (`iter`, `depth`, `Display`, `Drop`) walk an explicit stack.

use super::elements::{
    Assignment, BinaryOp, BinaryOperator, CompoundStatement, Declaration, Identifier, Number,
};
use super::traits::AstNode;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::mem;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Number(Number),
    Identifier(Identifier),
    BinaryOp(BinaryOp),
    Declaration(Declaration),
    Assignment(Assignment),
    CompoundStatement(CompoundStatement),
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(Number::new(value))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier::new(name))
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::BinaryOp(BinaryOp::new(operator, left, right))
    }

    pub fn declaration(type_name: impl Into<String>, var_name: impl Into<String>) -> Self {
        Node::Declaration(Declaration::new(type_name, var_name))
    }

    pub fn assignment(
        type_name: impl Into<String>,
        var_name: impl Into<String>,
        value: Node,
    ) -> Self {
        Node::Assignment(Assignment::new(type_name, var_name, value))
    }

    pub fn compound(statements: Vec<Node>) -> Self {
        Node::CompoundStatement(CompoundStatement::new(statements))
    }

    /// Direct children in stored order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Number(_) | Node::Identifier(_) | Node::Declaration(_) => Vec::new(),
            Node::BinaryOp(op) => vec![op.left.as_ref(), op.right.as_ref()],
            Node::Assignment(assignment) => vec![assignment.value.as_ref()],
            Node::CompoundStatement(compound) => compound.statements.iter().collect(),
        }
    }

    /// Expressions can appear as operands and assignment values
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            Node::Number(_) | Node::Identifier(_) | Node::BinaryOp(_)
        )
    }

    /// Pre-order walk over this node and all of its descendants
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().into_iter().rev());
            Some(node)
        })
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest root-to-leaf path, counting nodes
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().into_iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Move the children out, leaving leaf placeholders behind
    fn take_children(&mut self) -> Vec<Node> {
        let placeholder = || Node::number(0);
        match self {
            Node::Number(_) | Node::Identifier(_) | Node::Declaration(_) => Vec::new(),
            Node::BinaryOp(op) => vec![
                mem::replace(op.left.as_mut(), placeholder()),
                mem::replace(op.right.as_mut(), placeholder()),
            ],
            Node::Assignment(assignment) => {
                vec![mem::replace(assignment.value.as_mut(), placeholder())]
            }
            Node::CompoundStatement(compound) => mem::take(&mut compound.statements),
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = self.take_children();
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.take_children());
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Number(n) => n.node_type(),
            Node::Identifier(n) => n.node_type(),
            Node::BinaryOp(n) => n.node_type(),
            Node::Declaration(n) => n.node_type(),
            Node::Assignment(n) => n.node_type(),
            Node::CompoundStatement(n) => n.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Number(n) => n.display_label(),
            Node::Identifier(n) => n.display_label(),
            Node::BinaryOp(n) => n.display_label(),
            Node::Declaration(n) => n.display_label(),
            Node::Assignment(n) => n.display_label(),
            Node::CompoundStatement(n) => n.display_label(),
        }
    }
}

/// Text still to be written, or a node still to be expanded
enum Piece<'a> {
    Text(Cow<'a, str>),
    Node(&'a Node),
}

/// Compact source-like rendering; binary operations are fully parenthesized
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Piece::{Node as Child, Text};

        let mut pending = vec![Child(self)];
        while let Some(piece) = pending.pop() {
            let node = match piece {
                Text(text) => {
                    f.write_str(&text)?;
                    continue;
                }
                Child(node) => node,
            };
            // pushed in reverse so they pop in source order
            match node {
                Node::Number(n) => fmt::Display::fmt(n, f)?,
                Node::Identifier(n) => fmt::Display::fmt(n, f)?,
                Node::Declaration(n) => fmt::Display::fmt(n, f)?,
                Node::BinaryOp(op) => pending.extend([
                    Text(")".into()),
                    Child(&op.right),
                    Text(format!(" {} ", op.operator).into()),
                    Child(&op.left),
                    Text("(".into()),
                ]),
                Node::Assignment(assignment) => pending.extend([
                    Text(";".into()),
                    Child(&assignment.value),
                    Text(format!("{} {} = ", assignment.type_name, assignment.var_name).into()),
                ]),
                Node::CompoundStatement(compound) => {
                    pending.push(Text(" }".into()));
                    for statement in compound.statements.iter().rev() {
                        pending.push(Child(statement));
                        pending.push(Text(" ".into()));
                    }
                    pending.push(Text("{".into()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        // { int x = (1 + 2) * y; int z; }
        Node::compound(vec![
            Node::assignment(
                "int",
                "x",
                Node::binary(
                    BinaryOperator::Multiply,
                    Node::binary(BinaryOperator::Add, Node::number(1), Node::number(2)),
                    Node::identifier("y"),
                ),
            ),
            Node::declaration("int", "z"),
        ])
    }

    #[test]
    fn test_children_in_stored_order() {
        let node = sample();
        let children = node.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].node_type(), "Assignment");
        assert_eq!(children[1].node_type(), "Declaration");
    }

    #[test]
    fn test_binary_op_has_two_children() {
        let node = Node::binary(BinaryOperator::Divide, Node::number(8), Node::number(2));
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.display_label(), "/");
    }

    #[test]
    fn test_counts_and_depth() {
        let node = sample();
        assert_eq!(node.node_count(), 8);
        assert_eq!(node.depth(), 5);
        assert_eq!(Node::number(1).depth(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "{ int x = ((1 + 2) * y); int z; }");
    }

    #[test]
    fn test_iter_is_pre_order() {
        let labels: Vec<String> = sample().iter().map(|n| n.display_label()).collect();
        assert_eq!(labels, vec!["2 statements", "int x", "*", "+", "1", "2", "y", "int z"]);
    }

    #[test]
    fn test_long_chain_displays_counts_and_drops() {
        let mut node = Node::number(0);
        for _ in 0..100_000 {
            node = Node::binary(BinaryOperator::Subtract, node, Node::number(1));
        }
        assert_eq!(node.depth(), 100_001);
        assert_eq!(node.node_count(), 200_001);

        let text = node.to_string();
        assert!(text.starts_with("((((0 - 1) - 1)"));
        assert!(text.ends_with(" - 1) - 1)"));
        assert_eq!(text.matches('(').count(), 100_000);

        let statement = Node::compound(vec![Node::assignment("int", "x", node)]);
        assert_eq!(statement.depth(), 100_003);
        drop(statement);
    }

    #[test]
    fn test_is_expression() {
        assert!(Node::identifier("a").is_expression());
        assert!(!Node::declaration("int", "a").is_expression());
        assert!(!Node::compound(vec![]).is_expression());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let node = Node::assignment("int", "x", Node::number(3));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Assignment");
        assert_eq!(json["var_name"], "x");
        assert_eq!(json["value"]["type"], "Number");
        assert_eq!(json["value"]["value"], 3);
    }

    #[test]
    fn test_operator_serializes_as_symbol() {
        let node = Node::binary(BinaryOperator::Subtract, Node::number(1), Node::number(2));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["operator"], "-");
    }
}
