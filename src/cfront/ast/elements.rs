//! AST element types
//!
//! One module per node shape. Leaves (numbers, identifiers, declarations) own plain
//! data; the other elements own their children through `Box`/`Vec`, so the tree has no
//! shared or back edges.

pub mod assignment;
pub mod binary_op;
pub mod compound;
pub mod declaration;
pub mod identifier;
pub mod number;

pub use assignment::Assignment;
pub use binary_op::{BinaryOp, BinaryOperator};
pub use compound::CompoundStatement;
pub use declaration::Declaration;
pub use identifier::Identifier;
pub use number::Number;
