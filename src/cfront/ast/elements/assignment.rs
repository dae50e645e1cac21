//! Assignment element
//!
//! A declaration with an initializer: `<type> <name> = <expression>;`.

use super::super::node::Node;
use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Assignment {
    pub type_name: String,
    pub var_name: String,
    pub value: Box<Node>,
}

impl Assignment {
    pub fn new(type_name: impl Into<String>, var_name: impl Into<String>, value: Node) -> Self {
        Self {
            type_name: type_name.into(),
            var_name: var_name.into(),
            value: Box::new(value),
        }
    }
}

impl AstNode for Assignment {
    fn node_type(&self) -> &'static str {
        "Assignment"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.type_name, self.var_name)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.type_name, self.var_name, self.value)
    }
}
