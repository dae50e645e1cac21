//! # cfront
//!
//! A front end for a small C-like language: tokenizer, parser, AST builder and
//! AST inspector.
//!
//! File Layout
//!
//! The crate keeps every processing stage in its own module under `src/cfront`, and each
//! stage only depends on the stages before it:
//!
//! src/cfront
//!   ├── lexing       source text -> tokens
//!   ├── parsing      tokens -> concrete parse tree (ParseNode)
//!   ├── building     parse tree -> typed AST (Program / Node)
//!   ├── ast          the AST model and its snapshot representation
//!   ├── formats      textual renderings of tokens, parse trees and ASTs
//!   └── pipeline     stage/format selection and end to end execution
//!
//! For testing helpers, see the [testing module](cfront::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod cfront;
