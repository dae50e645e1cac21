//! Number literal
//!
//! Integer value of a numeric literal. Decimal literals are truncated toward zero when
//! the node is built, so `3.9` becomes `Number(3)`.

use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Number {
    pub value: i64,
}

impl Number {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl AstNode for Number {
    fn node_type(&self) -> &'static str {
        "Number"
    }

    fn display_label(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
