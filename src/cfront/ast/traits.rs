//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

/// Common interface for all AST nodes
pub trait AstNode {
    /// Name of the node kind, e.g. "BinaryOp"
    fn node_type(&self) -> &'static str;

    /// Short one line description of the node's own data (not its children)
    fn display_label(&self) -> String;
}

/// "1 statement", "3 statements"
pub(crate) fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
