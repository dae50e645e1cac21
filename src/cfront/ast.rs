//! AST for cfront
//!
//! The AST is the reduced tree produced by [building](crate::cfront::building): grammar
//! artifacts such as statement wrappers, parentheses and semicolons are gone, and operator
//! chains are nested binary operations.
//!
//!     Program
//!     └─ Node := Number | Identifier | BinaryOp | Declaration | Assignment
//!              | CompoundStatement
//!
//! Nodes own their children. Trees are built once and never mutated; consumers walk them
//! with `match` or through an [`AstSnapshot`].

pub mod elements;
pub mod node;
pub mod program;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Assignment, BinaryOp, BinaryOperator, CompoundStatement, Declaration, Identifier, Number,
};
pub use node::Node;
pub use program::Program;
pub use snapshot::{snapshot_from_node, snapshot_from_program, AstSnapshot};
pub use traits::AstNode;
