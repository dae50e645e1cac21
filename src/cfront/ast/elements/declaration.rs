//! Declaration element
//!
//! `<type> <name>;` with no initializer. The type is kept verbatim; nothing checks
//! that it names a real type.

use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Declaration {
    pub type_name: String,
    pub var_name: String,
}

impl Declaration {
    pub fn new(type_name: impl Into<String>, var_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            var_name: var_name.into(),
        }
    }
}

impl AstNode for Declaration {
    fn node_type(&self) -> &'static str {
        "Declaration"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.type_name, self.var_name)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.type_name, self.var_name)
    }
}
