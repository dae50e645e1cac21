//! Token extraction helpers
//!
//! Small conversions from parse tree tokens to AST data. Each one checks the token kind
//! it is handed and reports mismatches against the production being built.

use crate::cfront::ast::BinaryOperator;
use crate::cfront::building::error::BuildError;
use crate::cfront::lexing::{TokenKind, TokenLocation};
use crate::cfront::parsing::NodeType;

/// Integer value of a numeric literal.
///
/// Only the integer part is kept: `3.9` is 3 and `7.` is 7. Digits beyond the range of
/// i64 are an error, never a silent wrap.
pub fn parse_integer_literal(token: &TokenLocation) -> Result<i64, BuildError> {
    let (token, span) = token;
    let digits = token
        .lexeme
        .split_once('.')
        .map_or(token.lexeme.as_str(), |(integer, _)| integer);
    digits.parse::<i64>().map_err(|_| BuildError::InvalidNumber {
        lexeme: token.lexeme.clone(),
        span: span.clone(),
    })
}

/// Operator carried by a chain token.
///
/// `expression` only chains `+`/`-` and `term` only chains `*`/`/`; anything else
/// would silently change precedence.
pub fn chain_operator(
    production: NodeType,
    token: &TokenLocation,
) -> Result<BinaryOperator, BuildError> {
    let operator = match (production, token.0.kind) {
        (NodeType::Expression, TokenKind::Plus) => Some(BinaryOperator::Add),
        (NodeType::Expression, TokenKind::Minus) => Some(BinaryOperator::Subtract),
        (NodeType::Term, TokenKind::Times) => Some(BinaryOperator::Multiply),
        (NodeType::Term, TokenKind::Divide) => Some(BinaryOperator::Divide),
        _ => None,
    };
    operator.ok_or_else(|| BuildError::UnexpectedOperator {
        production,
        found: token.0.clone(),
        span: token.1.clone(),
    })
}

/// Lexeme of the identifier at `index` in a production's own tokens
pub fn identifier_at(
    production: NodeType,
    tokens: &[TokenLocation],
    index: usize,
) -> Result<String, BuildError> {
    match tokens.get(index) {
        Some((token, _)) if token.kind == TokenKind::Identifier => Ok(token.lexeme.clone()),
        _ => Err(BuildError::MalformedProduction {
            production,
            reason: "missing identifier",
        }),
    }
}
