//! Building module for cfront
//!
//! Turns the concrete parse tree into the AST. Statement wrappers, parentheses and
//! semicolons disappear; operator chains become left-nested binary operations:
//!
//!     expression(term(1) + term(2) - term(3))  ->  BinaryOp(-, BinaryOp(+, 1, 2), 3)
//!
//! The builder trusts nothing about its input and reports malformed shapes as
//! [`BuildError`]s instead of panicking, so hand-made parse trees are safe to feed in.

pub mod ast_tree;
pub mod error;
pub mod literals;

pub use ast_tree::AstTreeBuilder;
pub use error::BuildError;
