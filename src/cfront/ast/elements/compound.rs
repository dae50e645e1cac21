//! Compound statement
//!
//! A braced block of statements. Braces only mark the block boundary; no scope is
//! attached to it. Statements keep their source order and empty statements are not
//! represented.

use super::super::node::Node;
use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CompoundStatement {
    pub statements: Vec<Node>,
}

impl CompoundStatement {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl AstNode for CompoundStatement {
    fn node_type(&self) -> &'static str {
        "CompoundStatement"
    }

    fn display_label(&self) -> String {
        super::super::traits::count_label(self.statements.len(), "statement")
    }
}

impl fmt::Display for CompoundStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, " {}", statement)?;
        }
        write!(f, " }}")
    }
}
