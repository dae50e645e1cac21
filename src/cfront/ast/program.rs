//! Program root
//!
//! One source unit: the statements of `start := statement*` in source order. Empty
//! statements are not represented.

use super::node::Node;
use super::traits::{count_label, AstNode};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Total number of nodes below the root
    pub fn node_count(&self) -> usize {
        self.statements.iter().map(Node::node_count).sum()
    }

    /// Pre-order walk over every node in the program
    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack: Vec<&Node> = self.statements.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().into_iter().rev());
            Some(node)
        })
    }
}

impl AstNode for Program {
    fn node_type(&self) -> &'static str {
        "Program"
    }

    fn display_label(&self) -> String {
        count_label(self.statements.len(), "statement")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statements: Vec<String> = self.statements.iter().map(Node::to_string).collect();
        f.write_str(&statements.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfront::ast::BinaryOperator;

    #[test]
    fn test_iter_nodes_is_pre_order() {
        let program = Program::new(vec![
            Node::assignment(
                "int",
                "x",
                Node::binary(BinaryOperator::Add, Node::number(1), Node::identifier("y")),
            ),
            Node::declaration("int", "z"),
        ]);
        let types: Vec<&str> = program.iter_nodes().map(|n| n.node_type()).collect();
        assert_eq!(
            types,
            vec!["Assignment", "BinaryOp", "Number", "Identifier", "Declaration"]
        );
        assert_eq!(program.node_count(), 5);
    }

    #[test]
    fn test_label() {
        assert_eq!(Program::default().display_label(), "0 statements");
        let program = Program::new(vec![Node::declaration("int", "x")]);
        assert_eq!(program.display_label(), "1 statement");
        assert_eq!(program.to_string(), "int x;");
    }
}
