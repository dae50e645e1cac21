//! Implementation of the cfront lexer
//!
//! This module provides the tokenization entry points. The actual matching is handled
//! entirely by logos; this layer attaches lexemes and spans and turns the first
//! unmatched position into a [`LexError`].

use crate::cfront::lexing::error::LexError;
use crate::cfront::lexing::tokens::{Token, TokenKind, TokenLocation};
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Result<Vec<TokenLocation>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push((Token::new(kind, lexer.slice()), span)),
            Err(()) => return Err(LexError::at(source, span.start)),
        }
    }

    Ok(tokens)
}
