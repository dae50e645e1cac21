//! Lexer module for cfront
//!
//! This module contains the tokenization logic, including token definitions and the
//! lexer implementation.
//!
//! Tokenization is handled entirely by logos, which gives us maximal munch for free:
//! `//` starts a comment while a lone `/` is division, and `12.5` is a single number.
//! Whitespace and comments are skipped inside the lexer, so they never reach the parser.
//!
//! Unlike many logos lexers we do not filter out error results. The first position that
//! matches no pattern becomes a [`LexError`] and lexing stops there.

pub mod error;
pub mod lexer_impl;
pub mod tokens;

pub use error::LexError;
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{Token, TokenKind, TokenLocation};
