//! Main module for cfront library functionality
//!
//! Processing End To End
//!
//!     Lexing:
//!         A logos lexer turns the source into `(Token, Range<usize>)` pairs, skipping
//!         whitespace and `//` comments. The first unmatched character aborts lexing.
//!
//!     Parsing:
//!         A chumsky grammar consumes the located tokens and produces a concrete parse
//!         tree of `ParseNode`s named after grammar productions. Precedence lives in the
//!         expression/term/factor layering, so no precedence table is needed.
//!
//!     Building:
//!         The `AstTreeBuilder` folds the parse tree bottom-up into typed `Node`s. Operator
//!         chains become left-nested `BinaryOp`s, parentheses disappear and number literals
//!         become integers.
//!
//!     Inspecting:
//!         Formatters render a snapshot of the AST as treeviz, indented text, JSON, YAML or
//!         DOT. They never see a partially built tree.

pub mod ast;
pub mod building;
pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;

pub use ast::{AstSnapshot, BinaryOperator, Node, Program};
pub use building::{AstTreeBuilder, BuildError};
pub use lexing::{tokenize, tokenize_with_spans, LexError, Token, TokenKind};
pub use parsing::{parse, parse_with_spans, ParseError, ParseNode};
pub use pipeline::{compile, ExecutionError, PipelineExecutor};
